//! Finalized type declarations.

use indexmap::IndexSet;
use serde::Serialize;

use super::{Accessibility, ConstructorModel, FieldModel, PropertyModel, TypeKind, TypeModifier};

/// A single enum member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMemberModel {
    pub(crate) name: String,
    pub(crate) value: Option<i64>,
    pub(crate) docs: Vec<String>,
}

impl EnumMemberModel {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit or derived value; `None` lets the compiler number the member.
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub fn docs(&self) -> &[String] {
        &self.docs
    }
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumModel {
    pub(crate) name: String,
    pub(crate) access: Accessibility,
    pub(crate) docs: Vec<String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) flags: bool,
    pub(crate) underlying_type: Option<String>,
    pub(crate) members: Vec<EnumMemberModel>,
}

impl EnumModel {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn access(&self) -> Accessibility {
        self.access
    }

    pub fn docs(&self) -> &[String] {
        &self.docs
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Returns true for a bitmask (`[Flags]`) enum.
    pub fn is_flags(&self) -> bool {
        self.flags
    }

    pub fn underlying_type(&self) -> Option<&str> {
        self.underlying_type.as_deref()
    }

    pub fn members(&self) -> &[EnumMemberModel] {
        &self.members
    }

    /// Value of the named member, if the member exists and has one.
    pub fn value_of(&self, member: &str) -> Option<i64> {
        self.members
            .iter()
            .find(|m| m.name == member)
            .and_then(|m| m.value)
    }
}

/// An interface declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceModel {
    pub(crate) name: String,
    pub(crate) access: Accessibility,
    pub(crate) docs: Vec<String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) interfaces: IndexSet<String>,
    pub(crate) properties: Vec<PropertyModel>,
}

impl InterfaceModel {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn access(&self) -> Accessibility {
        self.access
    }

    pub fn docs(&self) -> &[String] {
        &self.docs
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Inherited interfaces, in declaration order.
    pub fn interfaces(&self) -> &IndexSet<String> {
        &self.interfaces
    }

    pub fn properties(&self) -> &[PropertyModel] {
        &self.properties
    }
}

/// A class or struct declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassModel {
    pub(crate) kind: TypeKind,
    pub(crate) name: String,
    pub(crate) access: Accessibility,
    pub(crate) docs: Vec<String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) modifier: Option<TypeModifier>,
    pub(crate) is_partial: bool,
    pub(crate) base_type: Option<String>,
    pub(crate) interfaces: IndexSet<String>,
    pub(crate) fields: Vec<FieldModel>,
    pub(crate) constructors: Vec<ConstructorModel>,
    pub(crate) properties: Vec<PropertyModel>,
    pub(crate) nested_types: Vec<TypeModel>,
}

impl ClassModel {
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn access(&self) -> Accessibility {
        self.access
    }

    pub fn docs(&self) -> &[String] {
        &self.docs
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn modifier(&self) -> Option<TypeModifier> {
        self.modifier
    }

    pub fn is_partial(&self) -> bool {
        self.is_partial
    }

    pub fn base_type(&self) -> Option<&str> {
        self.base_type.as_deref()
    }

    /// Implemented interfaces, in declaration order.
    pub fn interfaces(&self) -> &IndexSet<String> {
        &self.interfaces
    }

    pub fn fields(&self) -> &[FieldModel] {
        &self.fields
    }

    pub fn constructors(&self) -> &[ConstructorModel] {
        &self.constructors
    }

    pub fn properties(&self) -> &[PropertyModel] {
        &self.properties
    }

    pub fn nested_types(&self) -> &[TypeModel] {
        &self.nested_types
    }

    /// Looks up a property by exact name.
    pub fn property(&self, name: &str) -> Option<&PropertyModel> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Looks up a field by exact name.
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Any type that can live in a namespace or be nested in a class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypeModel {
    Class(ClassModel),
    Interface(InterfaceModel),
    Enum(EnumModel),
}

impl TypeModel {
    pub fn name(&self) -> &str {
        match self {
            Self::Class(c) => c.name(),
            Self::Interface(i) => i.name(),
            Self::Enum(e) => e.name(),
        }
    }

    pub fn as_class(&self) -> Option<&ClassModel> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceModel> {
        match self {
            Self::Interface(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumModel> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ClassModel> for TypeModel {
    fn from(model: ClassModel) -> Self {
        Self::Class(model)
    }
}

impl From<InterfaceModel> for TypeModel {
    fn from(model: InterfaceModel) -> Self {
        Self::Interface(model)
    }
}

impl From<EnumModel> for TypeModel {
    fn from(model: EnumModel) -> Self {
        Self::Enum(model)
    }
}
