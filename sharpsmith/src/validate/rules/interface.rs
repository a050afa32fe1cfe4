//! Rules for properties declared inside an interface.

use super::super::Rule;
use crate::{
    builder::{InterfaceBuilder, PropertyBuilder},
    error::Violation,
    model::Accessibility,
};

fn property_name(property: &PropertyBuilder) -> String {
    property.name.clone().unwrap_or_default()
}

pub(crate) struct InterfacePropertyDefault;

impl Rule<InterfaceBuilder> for InterfacePropertyDefault {
    fn name(&self) -> &'static str {
        "interface-property-default"
    }

    fn description(&self) -> &'static str {
        "Interface properties cannot have a default value"
    }

    fn check(&self, interface: &InterfaceBuilder) -> Result<(), Violation> {
        match interface
            .properties
            .iter()
            .find(|p| p.default_value.is_some())
        {
            Some(p) => Err(Violation::InterfacePropertyDefault {
                property: property_name(p),
            }),
            None => Ok(()),
        }
    }
}

pub(crate) struct InterfacePropertyAccessor;

impl Rule<InterfaceBuilder> for InterfacePropertyAccessor {
    fn name(&self) -> &'static str {
        "interface-property-accessor"
    }

    fn description(&self) -> &'static str {
        "Interface properties declare at least one accessor"
    }

    fn check(&self, interface: &InterfaceBuilder) -> Result<(), Violation> {
        match interface.properties.iter().find(|p| p.accessors.is_empty()) {
            Some(p) => Err(Violation::InterfacePropertyWithoutAccessor {
                property: property_name(p),
            }),
            None => Ok(()),
        }
    }
}

pub(crate) struct InterfacePropertyAuto;

impl Rule<InterfaceBuilder> for InterfacePropertyAuto {
    fn name(&self) -> &'static str {
        "interface-property-auto"
    }

    fn description(&self) -> &'static str {
        "Interface properties only use auto-implemented accessors"
    }

    fn check(&self, interface: &InterfaceBuilder) -> Result<(), Violation> {
        match interface
            .properties
            .iter()
            .find(|p| p.accessors.iter().any(|a| !a.body.is_auto()))
        {
            Some(p) => Err(Violation::InterfacePropertyNotAuto {
                property: property_name(p),
            }),
            None => Ok(()),
        }
    }
}

/// Interface members are written without a modifier, so only `None` and
/// `Public` are accepted on the property and only `None` on its accessors.
pub(crate) struct InterfaceMemberAccess;

impl Rule<InterfaceBuilder> for InterfaceMemberAccess {
    fn name(&self) -> &'static str {
        "interface-member-access"
    }

    fn description(&self) -> &'static str {
        "Interface members carry no access modifier"
    }

    fn check(&self, interface: &InterfaceBuilder) -> Result<(), Violation> {
        for property in &interface.properties {
            if !matches!(property.access, Accessibility::None | Accessibility::Public) {
                return Err(Violation::InterfaceMemberAccess {
                    member: property_name(property),
                    access: property.access,
                });
            }
            if let Some(accessor) = property.accessors.iter().find(|a| !a.access.is_none()) {
                return Err(Violation::InterfaceMemberAccess {
                    member: format!("{}.{}", property_name(property), accessor.kind),
                    access: accessor.access,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::AccessorBuilder, model::AccessorKind};

    #[test]
    fn test_accessor_access_rejected() {
        let mut setter = AccessorBuilder::new(AccessorKind::Set);
        setter.with_access(Accessibility::Private);
        let mut name = PropertyBuilder::new();
        name.with_type("string")
            .unwrap()
            .with_name("Name")
            .unwrap()
            .with_getter()
            .add_accessor(setter);
        let mut i = InterfaceBuilder::new();
        i.add_property(name);

        assert_eq!(
            InterfaceMemberAccess.check(&i),
            Err(Violation::InterfaceMemberAccess {
                member: "Name.set".into(),
                access: Accessibility::Private
            })
        );
    }

    #[test]
    fn test_public_property_accepted() {
        let mut name = PropertyBuilder::new();
        name.with_type("string")
            .unwrap()
            .with_name("Name")
            .unwrap()
            .with_getter();
        let mut i = InterfaceBuilder::new();
        i.add_property(name);

        assert!(InterfaceMemberAccess.check(&i).is_ok());
        assert!(InterfacePropertyAuto.check(&i).is_ok());
        assert!(InterfacePropertyAccessor.check(&i).is_ok());
        assert!(InterfacePropertyDefault.check(&i).is_ok());
    }
}
