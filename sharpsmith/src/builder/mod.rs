//! Mutable builders, one per construct.
//!
//! Builders accumulate configuration through chained `&mut self` setters and
//! are consumed by `build()`, which validates the configuration, finalizes
//! every nested builder in insertion order and returns the immutable model.
//!
//! ```
//! use sharpsmith::{Accessibility, create};
//!
//! # fn main() -> sharpsmith::Result<()> {
//! let mut person = create::class_named("Person", Accessibility::Public)?;
//! person
//!     .add_property(create::property_named("string", "Name", Accessibility::Public)?)
//!     .add_property(create::property_named("int", "Age", Accessibility::Public)?);
//!
//! let model = person.build()?;
//! assert_eq!(model.properties().len(), 2);
//! # Ok(())
//! # }
//! ```

mod class;
mod constructor;
mod enumeration;
mod field;
mod interface;
mod namespace;
mod property;

pub use class::{BaseType, ClassBuilder};
pub use constructor::ConstructorBuilder;
pub use enumeration::{EnumBuilder, EnumMemberBuilder};
pub use field::FieldBuilder;
pub use interface::InterfaceBuilder;
pub use namespace::NamespaceBuilder;
pub use property::{AccessorBuilder, PropertyBuilder};

use crate::{
    error::{Error, Result},
    model::{TypeKind, TypeModel},
};

/// Which kind of member a [`has_member_with`](ClassBuilder::has_member_with) query matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemberKind {
    #[default]
    Any,
    Field,
    Property,
    Class,
    Struct,
    Interface,
    Enum,
    EnumMember,
}

impl MemberKind {
    fn accepts(self, actual: MemberKind) -> bool {
        self == MemberKind::Any || self == actual
    }
}

/// How member names are compared in member queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameComparison {
    #[default]
    IgnoreCase,
    Exact,
}

impl NameComparison {
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::IgnoreCase => a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// Any type builder that a namespace or class accepts as a member.
#[derive(Debug, Clone)]
pub enum TypeBuilder {
    Class(ClassBuilder),
    Interface(InterfaceBuilder),
    Enum(EnumBuilder),
}

impl TypeBuilder {
    /// The configured name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Class(b) => b.name(),
            Self::Interface(b) => b.name(),
            Self::Enum(b) => b.name(),
        }
    }

    pub fn member_kind(&self) -> MemberKind {
        match self {
            Self::Class(b) => match b.kind() {
                TypeKind::Class => MemberKind::Class,
                TypeKind::Struct => MemberKind::Struct,
            },
            Self::Interface(_) => MemberKind::Interface,
            Self::Enum(_) => MemberKind::Enum,
        }
    }

    pub fn build(self) -> Result<TypeModel> {
        Ok(match self {
            Self::Class(b) => TypeModel::Class(b.build()?),
            Self::Interface(b) => TypeModel::Interface(b.build()?),
            Self::Enum(b) => TypeModel::Enum(b.build()?),
        })
    }
}

impl From<ClassBuilder> for TypeBuilder {
    fn from(builder: ClassBuilder) -> Self {
        Self::Class(builder)
    }
}

impl From<InterfaceBuilder> for TypeBuilder {
    fn from(builder: InterfaceBuilder) -> Self {
        Self::Interface(builder)
    }
}

impl From<EnumBuilder> for TypeBuilder {
    fn from(builder: EnumBuilder) -> Self {
        Self::Enum(builder)
    }
}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn required(argument: &'static str, value: impl Into<String>) -> Result<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::ArgumentNull { argument });
    }
    Ok(trimmed.to_string())
}

/// Collects every element of `values`, failing on the first blank one.
///
/// Nothing is returned on failure, so callers can extend their lists only
/// after the whole collection passed.
pub(crate) fn required_all<I>(argument: &'static str, values: I) -> Result<Vec<String>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            required(argument, value).map_err(|_| Error::ArgumentInvalid {
                argument,
                reason: format!("element {} is empty", index),
            })
        })
        .collect()
}

/// Shared lookup behind every `has_member_with`.
pub(crate) fn contains_member<'a>(
    members: impl IntoIterator<Item = (Option<&'a str>, MemberKind)>,
    name: &str,
    kind: MemberKind,
    comparison: NameComparison,
) -> bool {
    members.into_iter().any(|(member_name, member_kind)| {
        kind.accepts(member_kind) && member_name.is_some_and(|n| comparison.matches(n, name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims_and_rejects_blank() {
        assert_eq!(required("name", "  Person ").unwrap(), "Person");
        assert_eq!(
            required("name", "   "),
            Err(Error::ArgumentNull { argument: "name" })
        );
        assert_eq!(required("name", ""), Err(Error::ArgumentNull { argument: "name" }));
    }

    #[test]
    fn test_required_all_reports_first_blank_element() {
        let err = required_all("interfaces", ["IA", "", "IB"]).unwrap_err();
        assert_eq!(
            err,
            Error::ArgumentInvalid {
                argument: "interfaces",
                reason: "element 1 is empty".into()
            }
        );
        assert_eq!(
            required_all("interfaces", vec!["IA".to_string(), "IB".to_string()]).unwrap(),
            vec!["IA", "IB"]
        );
    }

    #[test]
    fn test_name_comparison() {
        assert!(NameComparison::IgnoreCase.matches("Age", "age"));
        assert!(!NameComparison::Exact.matches("Age", "age"));
        assert!(NameComparison::Exact.matches("Age", "Age"));
        assert_eq!(NameComparison::default(), NameComparison::IgnoreCase);
    }

    #[test]
    fn test_contains_member_skips_unnamed() {
        let members = vec![(None, MemberKind::Field), (Some("Age"), MemberKind::Property)];
        assert!(contains_member(
            members.clone(),
            "AGE",
            MemberKind::Any,
            NameComparison::IgnoreCase
        ));
        assert!(!contains_member(
            members,
            "Age",
            MemberKind::Field,
            NameComparison::IgnoreCase
        ));
    }

    #[test]
    fn test_type_builder_member_kind() {
        assert_eq!(
            TypeBuilder::from(ClassBuilder::new(TypeKind::Struct)).member_kind(),
            MemberKind::Struct
        );
        assert_eq!(
            TypeBuilder::from(EnumBuilder::new()).member_kind(),
            MemberKind::Enum
        );
    }
}
