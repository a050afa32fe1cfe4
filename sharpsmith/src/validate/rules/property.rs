use std::collections::HashSet;

use super::super::Rule;
use crate::{builder::PropertyBuilder, error::Violation, model::AccessorKind};

/// Each accessor kind appears once; `set` and `init` exclude each other.
pub(crate) struct AccessorDuplicate;

impl Rule<PropertyBuilder> for AccessorDuplicate {
    fn name(&self) -> &'static str {
        "accessor-duplicate"
    }

    fn description(&self) -> &'static str {
        "Accessors are unique and a property has at most one of set or init"
    }

    fn check(&self, property: &PropertyBuilder) -> Result<(), Violation> {
        let mut seen = HashSet::new();
        for accessor in &property.accessors {
            if !seen.insert(accessor.kind) {
                return Err(Violation::DuplicateAccessor {
                    accessor: accessor.kind,
                });
            }
        }
        if seen.contains(&AccessorKind::Set) && seen.contains(&AccessorKind::Init) {
            return Err(Violation::SetAndInitAccessors);
        }
        Ok(())
    }
}

pub(crate) struct DefaultRequiresAuto;

impl Rule<PropertyBuilder> for DefaultRequiresAuto {
    fn name(&self) -> &'static str {
        "default-requires-auto"
    }

    fn description(&self) -> &'static str {
        "Only auto-implemented properties take a default value"
    }

    fn check(&self, property: &PropertyBuilder) -> Result<(), Violation> {
        let has_body = property.accessors.iter().any(|a| !a.body.is_auto());
        if property.default_value.is_some() && has_body {
            return Err(Violation::DefaultRequiresAutoAccessors);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_init_accepted() {
        let mut p = PropertyBuilder::new();
        p.with_getter().with_init();
        assert!(AccessorDuplicate.check(&p).is_ok());
    }

    #[test]
    fn test_default_without_accessors_accepted() {
        let mut p = PropertyBuilder::new();
        p.with_default_value("0").unwrap();
        assert!(DefaultRequiresAuto.check(&p).is_ok());
    }
}
