use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::model::{Accessibility, AccessorKind, TypeModifier};

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of construct an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    Namespace,
    Class,
    Struct,
    Interface,
    Enum,
    EnumMember,
    Field,
    Property,
    Accessor,
    Constructor,
}

impl Construct {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::EnumMember => "enum member",
            Self::Field => "field",
            Self::Property => "property",
            Self::Accessor => "accessor",
            Self::Constructor => "constructor",
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ArgumentNull,
    ArgumentInvalid,
    MissingSetting,
    Syntax,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    /// A required name, type or expression was blank.
    #[error("argument '{argument}' must not be empty")]
    #[diagnostic(code(sharpsmith::argument_null))]
    ArgumentNull { argument: &'static str },

    /// A supplied value or collection element was rejected.
    #[error("invalid argument '{argument}': {reason}")]
    #[diagnostic(code(sharpsmith::argument_invalid))]
    ArgumentInvalid {
        argument: &'static str,
        reason: String,
    },

    /// A mandatory setting was never configured before `build`.
    #[error("{construct} is missing required setting '{setting}'")]
    #[diagnostic(
        code(sharpsmith::missing_setting),
        help("set the {setting} on the {construct} builder before building it")
    )]
    MissingSetting {
        construct: Construct,
        setting: &'static str,
    },

    /// The configuration would produce invalid C#.
    #[error("{construct} '{name}' is invalid: {violation}")]
    #[diagnostic(code(sharpsmith::syntax))]
    Syntax {
        construct: Construct,
        name: String,
        #[source]
        violation: Violation,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ArgumentNull { .. } => ErrorKind::ArgumentNull,
            Self::ArgumentInvalid { .. } => ErrorKind::ArgumentInvalid,
            Self::MissingSetting { .. } => ErrorKind::MissingSetting,
            Self::Syntax { .. } => ErrorKind::Syntax,
        }
    }

    /// The violated rule, for syntax errors.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Syntax { violation, .. } => Some(violation),
            _ => None,
        }
    }

    pub(crate) fn missing(construct: Construct, setting: &'static str) -> Self {
        Self::MissingSetting { construct, setting }
    }

    pub(crate) fn syntax(
        construct: Construct,
        name: impl Into<String>,
        violation: Violation,
    ) -> Self {
        Self::Syntax {
            construct,
            name: name.into(),
            violation,
        }
    }
}

/// A structural rule of C# that a configuration breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("only one of abstract, static or sealed may be set")]
    ConflictingTypeModifiers,

    #[error("a struct cannot be {modifier}")]
    StructTypeModifier { modifier: TypeModifier },

    #[error("a struct cannot inherit from base class '{base}'")]
    StructBaseClass { base: String },

    #[error("member '{member}' of a static class must be static")]
    InstanceMemberInStaticClass { member: String },

    #[error("member '{member}' is declared more than once")]
    DuplicateMember { member: String },

    #[error("member '{member}' cannot have the same name as its enclosing type")]
    MemberNamedAfterType { member: String },

    #[error("member '{member}' must declare an access level other than none")]
    MissingMemberAccess { member: String },

    #[error("interface property '{property}' cannot have a default value")]
    InterfacePropertyDefault { property: String },

    #[error("interface property '{property}' must declare at least one accessor")]
    InterfacePropertyWithoutAccessor { property: String },

    #[error("interface property '{property}' may only use auto-implemented accessors")]
    InterfacePropertyNotAuto { property: String },

    #[error("interface member '{member}' cannot be declared {access}")]
    InterfaceMemberAccess {
        member: String,
        access: Accessibility,
    },

    #[error("accessor '{accessor}' is declared more than once")]
    DuplicateAccessor { accessor: AccessorKind },

    #[error("a property cannot declare both 'set' and 'init' accessors")]
    SetAndInitAccessors,

    #[error("a default value requires auto-implemented accessors")]
    DefaultRequiresAutoAccessors,

    #[error("a const field requires an initializer")]
    ConstWithoutValue,

    #[error("a const field cannot also be static or readonly")]
    ConstWithModifier,

    #[error("a static constructor cannot declare parameters or a base/this call")]
    StaticConstructorShape,

    #[error("enum member '{member}' is declared more than once")]
    DuplicateEnumMember { member: String },

    #[error("flags enum has {count} members but derived values fit only {capacity}")]
    TooManyFlags { count: usize, capacity: usize },
}
