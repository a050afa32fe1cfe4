use super::super::Rule;
use crate::{builder::ConstructorBuilder, error::Violation};

/// Static constructors are parameterless and cannot chain.
pub(crate) struct StaticConstructor;

impl Rule<ConstructorBuilder> for StaticConstructor {
    fn name(&self) -> &'static str {
        "static-constructor"
    }

    fn description(&self) -> &'static str {
        "Static constructors take no parameters and call no other constructor"
    }

    fn check(&self, ctor: &ConstructorBuilder) -> Result<(), Violation> {
        if ctor.is_static && (!ctor.parameters.is_empty() || ctor.initializer.is_some()) {
            return Err(Violation::StaticConstructorShape);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_with_base_call_rejected() {
        let mut ctor = ConstructorBuilder::new();
        ctor.make_static().call_base(Vec::<String>::new()).unwrap();
        assert_eq!(
            StaticConstructor.check(&ctor),
            Err(Violation::StaticConstructorShape)
        );
    }

    #[test]
    fn test_instance_constructor_with_parameters_accepted() {
        let mut ctor = ConstructorBuilder::new();
        ctor.add_parameter("int", "size").unwrap();
        assert!(StaticConstructor.check(&ctor).is_ok());
    }
}
