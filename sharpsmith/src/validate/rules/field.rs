use super::super::Rule;
use crate::{builder::FieldBuilder, error::Violation};

pub(crate) struct ConstField;

impl Rule<FieldBuilder> for ConstField {
    fn name(&self) -> &'static str {
        "const-field"
    }

    fn description(&self) -> &'static str {
        "Const fields have an initializer and no static or readonly modifier"
    }

    fn check(&self, field: &FieldBuilder) -> Result<(), Violation> {
        if !field.is_const {
            return Ok(());
        }
        if field.value.is_none() {
            return Err(Violation::ConstWithoutValue);
        }
        if field.is_static || field.is_readonly {
            return Err(Violation::ConstWithModifier);
        }
        Ok(())
    }
}
