//! Interface builder.

use indexmap::IndexSet;

use super::{
    MemberKind, NameComparison, PropertyBuilder, contains_member, required, required_all,
};
use crate::{
    error::{Construct, Error, Result},
    model::{Accessibility, InterfaceModel},
    options::RenderOptions,
    render::CSharpRenderer,
    validate,
};

/// Builder for C# interfaces.
///
/// Interfaces hold property declarations only. Attached properties must use
/// auto-implemented accessors without a default value, and are written
/// without an access modifier.
#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
    pub(crate) name: Option<String>,
    pub(crate) access: Accessibility,
    pub(crate) docs: Vec<String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) interfaces: IndexSet<String>,
    pub(crate) properties: Vec<PropertyBuilder>,
}

impl InterfaceBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            access: Accessibility::Public,
            docs: Vec::new(),
            attributes: Vec::new(),
            interfaces: IndexSet::new(),
            properties: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.name = Some(required("name", name)?);
        Ok(self)
    }

    pub fn with_access(&mut self, access: Accessibility) -> &mut Self {
        self.access = access;
        self
    }

    pub fn add_doc(&mut self, line: impl Into<String>) -> &mut Self {
        self.docs.push(line.into());
        self
    }

    pub fn add_attribute(&mut self, attribute: impl Into<String>) -> Result<&mut Self> {
        self.attributes.push(required("attribute", attribute)?);
        Ok(self)
    }

    pub fn add_attributes<I>(&mut self, attributes: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.attributes
            .extend(required_all("attributes", attributes)?);
        Ok(self)
    }

    /// Adds an inherited interface.
    pub fn add_interface(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.interfaces.insert(required("interface", name)?);
        Ok(self)
    }

    pub fn add_interfaces<I>(&mut self, names: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.interfaces.extend(required_all("interfaces", names)?);
        Ok(self)
    }

    pub fn add_property(&mut self, property: PropertyBuilder) -> &mut Self {
        self.properties.push(property);
        self
    }

    pub fn add_properties(
        &mut self,
        properties: impl IntoIterator<Item = PropertyBuilder>,
    ) -> &mut Self {
        self.properties.extend(properties);
        self
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.has_member_with(name, MemberKind::Any, NameComparison::IgnoreCase)
    }

    pub fn has_member_with(
        &self,
        name: &str,
        kind: MemberKind,
        comparison: NameComparison,
    ) -> bool {
        let properties = self
            .properties
            .iter()
            .map(|p| (p.name.as_deref(), MemberKind::Property));
        contains_member(properties, name, kind, comparison)
    }

    pub fn build(self) -> Result<InterfaceModel> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| Error::missing(Construct::Interface, "name"))?;

        for property in &self.properties {
            property.require_settings()?;
        }

        validate::check(validate::INTERFACE_RULES, &self)
            .map_err(|violation| Error::syntax(Construct::Interface, &name, violation))?;

        let properties = self
            .properties
            .into_iter()
            .map(|mut property| {
                property.access = Accessibility::None;
                property.build()
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(name = %name, properties = properties.len(), "built interface");

        Ok(InterfaceModel {
            name,
            access: self.access,
            docs: self.docs,
            attributes: self.attributes,
            interfaces: self.interfaces,
            properties,
        })
    }

    pub fn to_source_code(self) -> Result<String> {
        self.to_source_code_with(&RenderOptions::default())
    }

    pub fn to_source_code_with(self, options: &RenderOptions) -> Result<String> {
        Ok(CSharpRenderer::new(*options).render(&self.build()?))
    }
}

impl Default for InterfaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::AccessorBuilder,
        error::{ErrorKind, Violation},
        model::AccessorKind,
    };

    fn property(ty: &str, name: &str) -> PropertyBuilder {
        let mut p = PropertyBuilder::new();
        p.with_type(ty).unwrap().with_name(name).unwrap();
        p
    }

    fn person() -> InterfaceBuilder {
        let mut i = InterfaceBuilder::new();
        i.with_name("IPerson").unwrap();
        i
    }

    #[test]
    fn test_default_value_is_syntax_error() {
        let mut name = property("string", "Name");
        name.with_getter().with_default_value("\"\"").unwrap();
        let mut i = person();
        i.add_property(name);

        let err = i.build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(
            err.violation(),
            Some(&Violation::InterfacePropertyDefault {
                property: "Name".into()
            })
        );
    }

    #[test]
    fn test_auto_getter_succeeds_without_modifier() {
        let mut name = property("string", "Name");
        name.with_getter();
        let mut i = person();
        i.add_property(name);

        let model = i.build().unwrap();
        let name = &model.properties()[0];
        assert_eq!(name.access(), Accessibility::None);
        assert_eq!(name.accessors().len(), 1);
    }

    #[test]
    fn test_property_needs_accessor() {
        let mut i = person();
        i.add_property(property("int", "Age"));
        assert_eq!(
            i.build().unwrap_err().violation(),
            Some(&Violation::InterfacePropertyWithoutAccessor {
                property: "Age".into()
            })
        );
    }

    #[test]
    fn test_property_accessors_must_be_auto() {
        let mut getter = AccessorBuilder::new(AccessorKind::Get);
        getter.with_expression("42").unwrap();
        let mut age = property("int", "Age");
        age.add_accessor(getter);
        let mut i = person();
        i.add_property(age);
        assert_eq!(
            i.build().unwrap_err().violation(),
            Some(&Violation::InterfacePropertyNotAuto {
                property: "Age".into()
            })
        );
    }

    #[test]
    fn test_private_property_rejected() {
        let mut age = property("int", "Age");
        age.with_getter().with_access(Accessibility::Private);
        let mut i = person();
        i.add_property(age);
        assert_eq!(
            i.build().unwrap_err().violation(),
            Some(&Violation::InterfaceMemberAccess {
                member: "Age".into(),
                access: Accessibility::Private
            })
        );
    }

    #[test]
    fn test_rules_run_in_order() {
        let mut age = property("int", "Age");
        age.with_default_value("1").unwrap();
        let mut i = person();
        i.add_property(age);
        assert!(matches!(
            i.build().unwrap_err().violation(),
            Some(Violation::InterfacePropertyDefault { .. })
        ));
    }

    #[test]
    fn test_unnamed_property_is_missing_setting() {
        let mut untitled = PropertyBuilder::new();
        untitled.with_type("string").unwrap();
        let mut i = person();
        i.add_property(untitled);
        assert_eq!(
            i.build().unwrap_err(),
            Error::missing(Construct::Property, "name")
        );
    }

    #[test]
    fn test_has_member() {
        let mut i = person();
        i.add_property(property("string", "Name"));
        assert!(i.has_member("NAME"));
        assert!(!i.has_member_with("Name", MemberKind::Field, NameComparison::IgnoreCase));
    }
}
