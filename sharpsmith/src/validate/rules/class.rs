//! Rules for classes and structs.

use super::super::Rule;
use crate::{
    builder::{BaseType, ClassBuilder},
    error::Violation,
    model::{TypeKind, TypeModifier},
};

fn modifiers(class: &ClassBuilder) -> impl Iterator<Item = TypeModifier> {
    [
        (class.is_abstract, TypeModifier::Abstract),
        (class.is_static, TypeModifier::Static),
        (class.is_sealed, TypeModifier::Sealed),
    ]
    .into_iter()
    .filter_map(|(set, modifier)| set.then_some(modifier))
}

/// The name reported for constructors, which take the type's name.
fn constructor_name(class: &ClassBuilder) -> String {
    format!("{}()", class.name.as_deref().unwrap_or_default())
}

/// At most one of abstract, static and sealed.
pub(crate) struct SingleTypeModifier;

impl Rule<ClassBuilder> for SingleTypeModifier {
    fn name(&self) -> &'static str {
        "single-type-modifier"
    }

    fn description(&self) -> &'static str {
        "A type is at most one of abstract, static or sealed"
    }

    fn check(&self, class: &ClassBuilder) -> Result<(), Violation> {
        if modifiers(class).count() > 1 {
            return Err(Violation::ConflictingTypeModifiers);
        }
        Ok(())
    }
}

pub(crate) struct StructTypeModifier;

impl Rule<ClassBuilder> for StructTypeModifier {
    fn name(&self) -> &'static str {
        "struct-type-modifier"
    }

    fn description(&self) -> &'static str {
        "Structs cannot be abstract, static or sealed"
    }

    fn check(&self, class: &ClassBuilder) -> Result<(), Violation> {
        if class.kind == TypeKind::Struct {
            if let Some(modifier) = modifiers(class).next() {
                return Err(Violation::StructTypeModifier { modifier });
            }
        }
        Ok(())
    }
}

pub(crate) struct StructBaseClass;

impl Rule<ClassBuilder> for StructBaseClass {
    fn name(&self) -> &'static str {
        "struct-base-class"
    }

    fn description(&self) -> &'static str {
        "Structs may implement interfaces but cannot inherit a base class"
    }

    fn check(&self, class: &ClassBuilder) -> Result<(), Violation> {
        match (&class.kind, &class.base) {
            (TypeKind::Struct, Some(BaseType::Class(base))) => Err(Violation::StructBaseClass {
                base: base.clone(),
            }),
            _ => Ok(()),
        }
    }
}

/// Every field, property and constructor of a static class is static.
pub(crate) struct StaticClassMembers;

impl Rule<ClassBuilder> for StaticClassMembers {
    fn name(&self) -> &'static str {
        "static-class-members"
    }

    fn description(&self) -> &'static str {
        "Static classes only contain static members"
    }

    fn check(&self, class: &ClassBuilder) -> Result<(), Violation> {
        if !class.is_static {
            return Ok(());
        }

        // const fields are implicitly static
        let field = class
            .fields
            .iter()
            .find(|f| !f.is_static && !f.is_const)
            .map(|f| f.name.clone().unwrap_or_default());
        let property = || {
            class
                .properties
                .iter()
                .find(|p| !p.is_static)
                .map(|p| p.name.clone().unwrap_or_default())
        };
        let constructor = || {
            class
                .constructors
                .iter()
                .any(|c| !c.is_static)
                .then(|| constructor_name(class))
        };

        match field.or_else(property).or_else(constructor) {
            Some(member) => Err(Violation::InstanceMemberInStaticClass { member }),
            None => Ok(()),
        }
    }
}

/// Class members need an explicit access level; `None` is for interface members.
pub(crate) struct ExplicitMemberAccess;

impl Rule<ClassBuilder> for ExplicitMemberAccess {
    fn name(&self) -> &'static str {
        "explicit-member-access"
    }

    fn description(&self) -> &'static str {
        "Fields, properties and instance constructors declare an access level"
    }

    fn check(&self, class: &ClassBuilder) -> Result<(), Violation> {
        let fields = class
            .fields
            .iter()
            .filter(|f| f.access.is_none())
            .map(|f| f.name.clone().unwrap_or_default());
        let properties = class
            .properties
            .iter()
            .filter(|p| p.access.is_none())
            .map(|p| p.name.clone().unwrap_or_default());
        let constructors = class
            .constructors
            .iter()
            .filter(|c| !c.is_static && c.access.is_none())
            .map(|_| constructor_name(class));

        match fields.chain(properties).chain(constructors).next() {
            Some(member) => Err(Violation::MissingMemberAccess { member }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::{ConstructorBuilder, FieldBuilder},
        model::Accessibility,
    };

    fn class(name: &str) -> ClassBuilder {
        let mut c = ClassBuilder::default();
        c.with_name(name).unwrap();
        c
    }

    #[test]
    fn test_single_modifier_passes() {
        let mut c = class("Shape");
        assert!(SingleTypeModifier.check(&c).is_ok());
        c.make_sealed();
        assert!(SingleTypeModifier.check(&c).is_ok());
        c.make_abstract();
        assert_eq!(
            SingleTypeModifier.check(&c),
            Err(Violation::ConflictingTypeModifiers)
        );
    }

    #[test]
    fn test_class_may_have_base_class() {
        let mut c = class("Circle");
        c.with_base_type("Shape").unwrap();
        assert!(StructBaseClass.check(&c).is_ok());
    }

    #[test]
    fn test_static_class_allows_const_field() {
        let mut max = FieldBuilder::new();
        max.with_type("int")
            .unwrap()
            .with_name("Max")
            .unwrap()
            .make_const()
            .with_value("10")
            .unwrap();
        let mut c = class("Limits");
        c.make_static().add_field(max);
        assert!(StaticClassMembers.check(&c).is_ok());
    }

    #[test]
    fn test_static_class_rejects_instance_constructor() {
        let mut c = class("Limits");
        c.make_static().add_constructor(ConstructorBuilder::new());
        assert_eq!(
            StaticClassMembers.check(&c),
            Err(Violation::InstanceMemberInStaticClass {
                member: "Limits()".into()
            })
        );
    }

    #[test]
    fn test_static_constructor_needs_no_access() {
        let mut ctor = ConstructorBuilder::new();
        ctor.make_static().with_access(Accessibility::None);
        let mut c = class("Cache");
        c.add_constructor(ctor);
        assert!(ExplicitMemberAccess.check(&c).is_ok());

        let mut ctor = ConstructorBuilder::new();
        ctor.with_access(Accessibility::None);
        c.add_constructor(ctor);
        assert_eq!(
            ExplicitMemberAccess.check(&c),
            Err(Violation::MissingMemberAccess {
                member: "Cache()".into()
            })
        );
    }
}
