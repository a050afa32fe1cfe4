//! Finalized class and interface members.

use std::fmt;

use serde::Serialize;

use super::Accessibility;

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldModel {
    pub(crate) ty: String,
    pub(crate) name: String,
    pub(crate) access: Accessibility,
    pub(crate) docs: Vec<String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) is_static: bool,
    pub(crate) is_readonly: bool,
    pub(crate) is_const: bool,
    pub(crate) value: Option<String>,
}

impl FieldModel {
    pub fn ty(&self) -> &str {
        &self.ty
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

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_readonly(&self) -> bool {
        self.is_readonly
    }

    pub fn is_const(&self) -> bool {
        self.is_const
    }

    /// Initializer expression, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Which accessor of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    Get,
    Set,
    Init,
}

impl AccessorKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Init => "init",
        }
    }
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Body of a property accessor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorBody {
    /// Auto-implemented: `get;`
    #[default]
    Auto,
    /// Expression-bodied: `get => _name;`
    Expression(String),
    /// Statement block.
    Block(Vec<String>),
}

impl AccessorBody {
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// A `get`, `set` or `init` accessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessorModel {
    pub(crate) kind: AccessorKind,
    pub(crate) access: Accessibility,
    pub(crate) body: AccessorBody,
}

impl AccessorModel {
    pub fn kind(&self) -> AccessorKind {
        self.kind
    }

    /// Accessor-level access, [`Accessibility::None`] when it inherits the property's.
    pub fn access(&self) -> Accessibility {
        self.access
    }

    pub fn body(&self) -> &AccessorBody {
        &self.body
    }
}

/// A property declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyModel {
    pub(crate) ty: String,
    pub(crate) name: String,
    pub(crate) access: Accessibility,
    pub(crate) docs: Vec<String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) is_static: bool,
    pub(crate) accessors: Vec<AccessorModel>,
    pub(crate) default_value: Option<String>,
}

impl PropertyModel {
    pub fn ty(&self) -> &str {
        &self.ty
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

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn accessors(&self) -> &[AccessorModel] {
        &self.accessors
    }

    /// Returns the accessor of the given kind, if declared.
    pub fn accessor(&self, kind: AccessorKind) -> Option<&AccessorModel> {
        self.accessors.iter().find(|a| a.kind == kind)
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Returns true if every accessor is auto-implemented.
    pub fn is_auto(&self) -> bool {
        self.accessors.iter().all(|a| a.body.is_auto())
    }
}

/// A constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterModel {
    pub(crate) ty: String,
    pub(crate) name: String,
    pub(crate) default_value: Option<String>,
}

impl ParameterModel {
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

/// `: base(...)` or `: this(...)` after a constructor signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructorInitializer {
    Base(Vec<String>),
    This(Vec<String>),
}

impl ConstructorInitializer {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Base(_) => "base",
            Self::This(_) => "this",
        }
    }

    pub fn arguments(&self) -> &[String] {
        match self {
            Self::Base(args) | Self::This(args) => args,
        }
    }
}

/// A constructor of a class or struct.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstructorModel {
    pub(crate) type_name: String,
    pub(crate) access: Accessibility,
    pub(crate) is_static: bool,
    pub(crate) docs: Vec<String>,
    pub(crate) parameters: Vec<ParameterModel>,
    pub(crate) initializer: Option<ConstructorInitializer>,
    pub(crate) body: Vec<String>,
}

impl ConstructorModel {
    /// Name of the type this constructor belongs to.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn access(&self) -> Accessibility {
        self.access
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn docs(&self) -> &[String] {
        &self.docs
    }

    pub fn parameters(&self) -> &[ParameterModel] {
        &self.parameters
    }

    pub fn initializer(&self) -> Option<&ConstructorInitializer> {
        self.initializer.as_ref()
    }

    /// Statement lines of the body.
    pub fn body(&self) -> &[String] {
        &self.body
    }
}
