//! Access levels and type-level modifiers.

use std::fmt;

use serde::Serialize;

/// Visibility modifier of a type or member.
///
/// `None` means no modifier is written, which is only meaningful where the
/// surrounding construct implies one (interface members, types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    None,
    #[default]
    Public,
    Private,
    Protected,
    Internal,
    ProtectedInternal,
    PrivateProtected,
}

impl Accessibility {
    /// The C# modifier text, empty for [`Accessibility::None`].
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::ProtectedInternal => "protected internal",
            Self::PrivateProtected => "private protected",
        }
    }

    /// Returns true if no modifier is written.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            other => write!(f, "{}", other.keyword()),
        }
    }
}

/// Inheritance modifier of a class. At most one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeModifier {
    Abstract,
    Static,
    Sealed,
}

impl TypeModifier {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Static => "static",
            Self::Sealed => "sealed",
        }
    }
}

impl fmt::Display for TypeModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Whether a [`ClassModel`](super::ClassModel) is a reference or value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
}

impl TypeKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessibility_keywords() {
        assert_eq!(Accessibility::None.keyword(), "");
        assert_eq!(Accessibility::Public.keyword(), "public");
        assert_eq!(Accessibility::ProtectedInternal.keyword(), "protected internal");
        assert_eq!(Accessibility::PrivateProtected.keyword(), "private protected");
    }

    #[test]
    fn test_accessibility_display() {
        assert_eq!(Accessibility::None.to_string(), "none");
        assert_eq!(Accessibility::Internal.to_string(), "internal");
    }

    #[test]
    fn test_default_accessibility_is_public() {
        assert_eq!(Accessibility::default(), Accessibility::Public);
        assert!(!Accessibility::default().is_none());
    }

    #[test]
    fn test_type_modifier_and_kind_keywords() {
        assert_eq!(TypeModifier::Sealed.to_string(), "sealed");
        assert_eq!(TypeKind::Struct.to_string(), "struct");
        assert_eq!(TypeKind::default(), TypeKind::Class);
    }
}
