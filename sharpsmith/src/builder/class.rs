//! Class and struct builder.

use indexmap::IndexSet;

use super::{
    ConstructorBuilder, FieldBuilder, MemberKind, NameComparison, PropertyBuilder, TypeBuilder,
    contains_member, required, required_all,
};
use crate::{
    error::{Construct, Error, Result},
    model::{Accessibility, ClassModel, TypeKind, TypeModifier},
    options::RenderOptions,
    render::CSharpRenderer,
    validate,
};

/// The type named after the colon of a class or struct declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseType {
    /// A base class. Rejected on structs.
    Class(String),
    /// An interface reference; treated as the first implemented interface.
    Interface(String),
}

impl BaseType {
    pub fn name(&self) -> &str {
        match self {
            Self::Class(name) | Self::Interface(name) => name,
        }
    }
}

/// Builder for C# classes and structs.
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    pub(crate) kind: TypeKind,
    pub(crate) name: Option<String>,
    pub(crate) access: Accessibility,
    pub(crate) docs: Vec<String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) is_abstract: bool,
    pub(crate) is_static: bool,
    pub(crate) is_sealed: bool,
    pub(crate) is_partial: bool,
    pub(crate) base: Option<BaseType>,
    pub(crate) interfaces: IndexSet<String>,
    pub(crate) fields: Vec<FieldBuilder>,
    pub(crate) constructors: Vec<ConstructorBuilder>,
    pub(crate) properties: Vec<PropertyBuilder>,
    pub(crate) nested_types: Vec<TypeBuilder>,
}

impl ClassBuilder {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            name: None,
            access: Accessibility::Public,
            docs: Vec::new(),
            attributes: Vec::new(),
            is_abstract: false,
            is_static: false,
            is_sealed: false,
            is_partial: false,
            base: None,
            interfaces: IndexSet::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            properties: Vec::new(),
            nested_types: Vec::new(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
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

    /// Adds an attribute, written as `[text]`.
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

    pub fn make_abstract(&mut self) -> &mut Self {
        self.is_abstract = true;
        self
    }

    pub fn make_static(&mut self) -> &mut Self {
        self.is_static = true;
        self
    }

    pub fn make_sealed(&mut self) -> &mut Self {
        self.is_sealed = true;
        self
    }

    pub fn make_partial(&mut self) -> &mut Self {
        self.is_partial = true;
        self
    }

    /// Sets the base class.
    pub fn with_base_type(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.base = Some(BaseType::Class(required("base type", name)?));
        Ok(self)
    }

    pub fn with_base(&mut self, base: BaseType) -> Result<&mut Self> {
        self.base = Some(match base {
            BaseType::Class(name) => BaseType::Class(required("base type", name)?),
            BaseType::Interface(name) => BaseType::Interface(required("base type", name)?),
        });
        Ok(self)
    }

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

    pub fn add_field(&mut self, field: FieldBuilder) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = FieldBuilder>) -> &mut Self {
        self.fields.extend(fields);
        self
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

    pub fn add_constructor(&mut self, constructor: ConstructorBuilder) -> &mut Self {
        self.constructors.push(constructor);
        self
    }

    pub fn add_constructors(
        &mut self,
        constructors: impl IntoIterator<Item = ConstructorBuilder>,
    ) -> &mut Self {
        self.constructors.extend(constructors);
        self
    }

    /// Adds a nested class, struct, interface or enum.
    pub fn add_type(&mut self, nested: impl Into<TypeBuilder>) -> &mut Self {
        self.nested_types.push(nested.into());
        self
    }

    pub fn add_types<I>(&mut self, nested: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<TypeBuilder>,
    {
        self.nested_types.extend(nested.into_iter().map(Into::into));
        self
    }

    /// Returns true if a field, property or nested type with this name exists,
    /// ignoring case.
    pub fn has_member(&self, name: &str) -> bool {
        self.has_member_with(name, MemberKind::Any, NameComparison::IgnoreCase)
    }

    pub fn has_member_with(
        &self,
        name: &str,
        kind: MemberKind,
        comparison: NameComparison,
    ) -> bool {
        let fields = self
            .fields
            .iter()
            .map(|f| (f.name.as_deref(), MemberKind::Field));
        let properties = self
            .properties
            .iter()
            .map(|p| (p.name.as_deref(), MemberKind::Property));
        let nested = self.nested_types.iter().map(|t| (t.name(), t.member_kind()));

        contains_member(fields.chain(properties).chain(nested), name, kind, comparison)
    }

    pub(crate) fn construct(&self) -> Construct {
        match self.kind {
            TypeKind::Class => Construct::Class,
            TypeKind::Struct => Construct::Struct,
        }
    }

    /// Validates the configuration and finalizes every member in order.
    pub fn build(self) -> Result<ClassModel> {
        let construct = self.construct();
        let name = self
            .name
            .clone()
            .ok_or_else(|| Error::missing(construct, "name"))?;

        // members are named before any member rule runs
        for field in &self.fields {
            field.require_settings()?;
        }
        for property in &self.properties {
            property.require_settings()?;
        }

        validate::check(validate::CLASS_RULES, &self)
            .map_err(|violation| Error::syntax(construct, &name, violation))?;

        let modifier = if self.is_abstract {
            Some(TypeModifier::Abstract)
        } else if self.is_static {
            Some(TypeModifier::Static)
        } else if self.is_sealed {
            Some(TypeModifier::Sealed)
        } else {
            None
        };

        let (base_type, interfaces) = match self.base {
            Some(BaseType::Class(base)) => (Some(base), self.interfaces),
            Some(BaseType::Interface(first)) => {
                let mut interfaces = IndexSet::with_capacity(self.interfaces.len() + 1);
                interfaces.insert(first);
                interfaces.extend(self.interfaces);
                (None, interfaces)
            }
            None => (None, self.interfaces),
        };

        let fields = self
            .fields
            .into_iter()
            .map(FieldBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        let constructors = self
            .constructors
            .into_iter()
            .map(|mut ctor| {
                ctor.type_name = Some(name.clone());
                ctor.build()
            })
            .collect::<Result<Vec<_>>>()?;

        let properties = self
            .properties
            .into_iter()
            .map(PropertyBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        let nested_types = self
            .nested_types
            .into_iter()
            .map(TypeBuilder::build)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            kind = %self.kind,
            name = %name,
            fields = fields.len(),
            constructors = constructors.len(),
            properties = properties.len(),
            nested_types = nested_types.len(),
            "built type"
        );

        Ok(ClassModel {
            kind: self.kind,
            name,
            access: self.access,
            docs: self.docs,
            attributes: self.attributes,
            modifier,
            is_partial: self.is_partial,
            base_type,
            interfaces,
            fields,
            constructors,
            properties,
            nested_types,
        })
    }

    /// Builds and renders with default options.
    pub fn to_source_code(self) -> Result<String> {
        self.to_source_code_with(&RenderOptions::default())
    }

    pub fn to_source_code_with(self, options: &RenderOptions) -> Result<String> {
        Ok(CSharpRenderer::new(*options).render(&self.build()?))
    }
}

impl Default for ClassBuilder {
    fn default() -> Self {
        Self::new(TypeKind::Class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::{EnumBuilder, InterfaceBuilder},
        error::{ErrorKind, Violation},
        model::AccessorKind,
    };

    fn property(ty: &str, name: &str) -> PropertyBuilder {
        let mut p = PropertyBuilder::new();
        p.with_type(ty).unwrap().with_name(name).unwrap();
        p
    }

    fn field(ty: &str, name: &str) -> FieldBuilder {
        let mut f = FieldBuilder::new();
        f.with_type(ty).unwrap().with_name(name).unwrap();
        f
    }

    #[test]
    fn test_build_without_name_is_missing_setting() {
        let err = ClassBuilder::default().build().unwrap_err();
        assert_eq!(
            err,
            Error::MissingSetting {
                construct: Construct::Class,
                setting: "name"
            }
        );

        let err = ClassBuilder::new(TypeKind::Struct).build().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingSetting {
                construct: Construct::Struct,
                ..
            }
        ));
    }

    #[test]
    fn test_build_with_name() {
        let mut builder = ClassBuilder::default();
        builder.with_name("X").unwrap();
        let model = builder.build().unwrap();
        assert_eq!(model.name(), "X");
        assert_eq!(model.access(), Accessibility::Public);
        assert_eq!(model.modifier(), None);
    }

    #[test]
    fn test_blank_name_is_argument_null() {
        let mut builder = ClassBuilder::default();
        assert_eq!(
            builder.with_name("  ").unwrap_err().kind(),
            ErrorKind::ArgumentNull
        );
        assert!(builder.name().is_none());
    }

    #[test]
    fn test_has_member_default_ignores_case_and_kind() {
        let mut builder = ClassBuilder::default();
        builder.add_property(property("int", "Age"));

        assert!(builder.has_member("age"));
        assert!(builder.has_member("Age"));
        assert!(!builder.has_member_with("Age", MemberKind::Field, NameComparison::IgnoreCase));
        assert!(builder.has_member_with("Age", MemberKind::Property, NameComparison::Exact));
        assert!(!builder.has_member_with("age", MemberKind::Property, NameComparison::Exact));
    }

    #[test]
    fn test_has_member_nested_types() {
        let mut nested = EnumBuilder::new();
        nested.with_name("Status").unwrap();
        let mut builder = ClassBuilder::default();
        builder.add_type(nested);

        assert!(builder.has_member_with("status", MemberKind::Enum, NameComparison::IgnoreCase));
        assert!(!builder.has_member_with("Status", MemberKind::Class, NameComparison::IgnoreCase));
    }

    #[test]
    fn test_add_interfaces_is_atomic() {
        let mut builder = ClassBuilder::default();
        builder.add_interface("IDisposable").unwrap();

        let err = builder
            .add_interfaces(["IComparable", "", "IEquatable<Person>"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentInvalid);
        assert_eq!(builder.interfaces.len(), 1);
        assert!(builder.interfaces.contains("IDisposable"));
    }

    #[test]
    fn test_interfaces_keep_order_and_collapse_duplicates() {
        let mut builder = ClassBuilder::default();
        builder
            .with_name("Person")
            .unwrap()
            .add_interfaces(["IB", "IA", "IB"])
            .unwrap();
        let model = builder.build().unwrap();
        let names: Vec<_> = model.interfaces().iter().map(String::as_str).collect();
        assert_eq!(names, vec!["IB", "IA"]);
    }

    #[test]
    fn test_conflicting_modifiers() {
        let mut builder = ClassBuilder::default();
        builder.with_name("Util").unwrap().make_static().make_sealed();
        let err = builder.build().unwrap_err();
        assert_eq!(err.violation(), Some(&Violation::ConflictingTypeModifiers));
    }

    #[test]
    fn test_single_modifier_is_kept() {
        let mut builder = ClassBuilder::default();
        builder.with_name("Shape").unwrap().make_abstract();
        assert_eq!(
            builder.build().unwrap().modifier(),
            Some(TypeModifier::Abstract)
        );
    }

    #[test]
    fn test_struct_rejects_base_class() {
        let mut builder = ClassBuilder::new(TypeKind::Struct);
        builder
            .with_name("Point")
            .unwrap()
            .with_base_type("Shape")
            .unwrap();
        let err = builder.build().unwrap_err();
        assert_eq!(
            err.violation(),
            Some(&Violation::StructBaseClass {
                base: "Shape".into()
            })
        );
    }

    #[test]
    fn test_struct_accepts_interface_base() {
        let mut builder = ClassBuilder::new(TypeKind::Struct);
        builder
            .with_name("Point")
            .unwrap()
            .with_base(BaseType::Interface("IEquatable<Point>".into()))
            .unwrap()
            .add_interface("IFormattable")
            .unwrap();
        let model = builder.build().unwrap();
        assert_eq!(model.base_type(), None);
        let names: Vec<_> = model.interfaces().iter().map(String::as_str).collect();
        assert_eq!(names, vec!["IEquatable<Point>", "IFormattable"]);
    }

    #[test]
    fn test_struct_rejects_type_modifier() {
        let mut builder = ClassBuilder::new(TypeKind::Struct);
        builder.with_name("Point").unwrap().make_abstract();
        assert_eq!(
            builder.build().unwrap_err().violation(),
            Some(&Violation::StructTypeModifier {
                modifier: TypeModifier::Abstract
            })
        );
    }

    #[test]
    fn test_static_class_requires_static_members() {
        let mut builder = ClassBuilder::default();
        builder
            .with_name("Counters")
            .unwrap()
            .make_static()
            .add_property(property("int", "Count"));
        assert_eq!(
            builder.build().unwrap_err().violation(),
            Some(&Violation::InstanceMemberInStaticClass {
                member: "Count".into()
            })
        );

        let mut count = property("int", "Count");
        count.make_static();
        let mut builder = ClassBuilder::default();
        builder
            .with_name("Counters")
            .unwrap()
            .make_static()
            .add_property(count);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_unnamed_member_is_missing_setting_before_rules() {
        let mut untitled = PropertyBuilder::new();
        untitled.with_type("int").unwrap();
        let mut builder = ClassBuilder::default();
        builder
            .with_name("Util")
            .unwrap()
            .make_static()
            .add_property(untitled);
        assert_eq!(
            builder.build().unwrap_err(),
            Error::missing(Construct::Property, "name")
        );
    }

    #[test]
    fn test_fields_are_checked_for_settings_before_properties() {
        let mut untyped = FieldBuilder::new();
        untyped.with_name("_count").unwrap();
        let mut untitled = PropertyBuilder::new();
        untitled.with_type("int").unwrap();
        let mut builder = ClassBuilder::default();
        builder
            .with_name("Counter")
            .unwrap()
            .add_property(untitled)
            .add_field(untyped);
        assert_eq!(
            builder.build().unwrap_err(),
            Error::missing(Construct::Field, "type")
        );
    }

    #[test]
    fn test_duplicate_member_names() {
        let mut builder = ClassBuilder::default();
        builder
            .with_name("Person")
            .unwrap()
            .add_field(field("string", "Name"))
            .add_property(property("string", "Name"));
        assert_eq!(
            builder.build().unwrap_err().violation(),
            Some(&Violation::DuplicateMember {
                member: "Name".into()
            })
        );
    }

    #[test]
    fn test_member_named_after_type() {
        let mut builder = ClassBuilder::default();
        builder
            .with_name("Person")
            .unwrap()
            .add_property(property("string", "Person"));
        assert_eq!(
            builder.build().unwrap_err().violation(),
            Some(&Violation::MemberNamedAfterType {
                member: "Person".into()
            })
        );
    }

    #[test]
    fn test_member_access_none_rejected() {
        let mut name = property("string", "Name");
        name.with_access(Accessibility::None);
        let mut builder = ClassBuilder::default();
        builder.with_name("Person").unwrap().add_property(name);
        assert_eq!(
            builder.build().unwrap_err().violation(),
            Some(&Violation::MissingMemberAccess {
                member: "Name".into()
            })
        );
    }

    #[test]
    fn test_constructor_takes_type_name() {
        let mut builder = ClassBuilder::default();
        builder
            .with_name("Person")
            .unwrap()
            .add_constructor(ConstructorBuilder::new());
        let model = builder.build().unwrap();
        assert_eq!(model.constructors()[0].type_name(), "Person");
    }

    #[test]
    fn test_nested_failure_short_circuits() {
        let mut builder = ClassBuilder::default();
        builder
            .with_name("Outer")
            .unwrap()
            .add_type(InterfaceBuilder::new());
        assert_eq!(
            builder.build().unwrap_err(),
            Error::MissingSetting {
                construct: Construct::Interface,
                setting: "name"
            }
        );
    }

    #[test]
    fn test_property_without_accessors_gets_auto_get_set() {
        let mut builder = ClassBuilder::default();
        builder
            .with_name("Person")
            .unwrap()
            .add_property(property("string", "Name"));
        let model = builder.build().unwrap();
        let name = model.property("Name").unwrap();
        assert!(name.accessor(AccessorKind::Get).is_some());
        assert!(name.accessor(AccessorKind::Set).is_some());
        assert!(name.is_auto());
    }
}
