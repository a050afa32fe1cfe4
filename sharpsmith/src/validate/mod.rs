//! Structural validation run by each builder's `build`.
//!
//! Every construct has an ordered rule set. Rules run in order and the first
//! violation stops the build, surfacing as [`Error::Syntax`](crate::Error::Syntax)
//! with the exact [`Violation`] that was found.

mod rule;
mod rules;

pub use rule::RuleInfo;
pub(crate) use rule::Rule;
use rules::*;

use crate::{
    builder::{
        ClassBuilder, ConstructorBuilder, EnumBuilder, FieldBuilder, InterfaceBuilder,
        NamespaceBuilder, PropertyBuilder,
    },
    error::{Construct, Violation},
};

pub(crate) const CLASS_RULES: &[&dyn Rule<ClassBuilder>] = &[
    &SingleTypeModifier,
    &StructTypeModifier,
    &StructBaseClass,
    &StaticClassMembers,
    &UniqueMemberNames,
    &ExplicitMemberAccess,
];

pub(crate) const INTERFACE_RULES: &[&dyn Rule<InterfaceBuilder>] = &[
    &InterfacePropertyDefault,
    &InterfacePropertyAccessor,
    &InterfacePropertyAuto,
    &InterfaceMemberAccess,
    &UniqueMemberNames,
];

pub(crate) const PROPERTY_RULES: &[&dyn Rule<PropertyBuilder>] =
    &[&AccessorDuplicate, &DefaultRequiresAuto];

pub(crate) const FIELD_RULES: &[&dyn Rule<FieldBuilder>] = &[&ConstField];

pub(crate) const CONSTRUCTOR_RULES: &[&dyn Rule<ConstructorBuilder>] = &[&StaticConstructor];

pub(crate) const ENUM_RULES: &[&dyn Rule<EnumBuilder>] = &[&UniqueEnumMembers, &FlagsCapacity];

pub(crate) const NAMESPACE_RULES: &[&dyn Rule<NamespaceBuilder>] = &[&UniqueMemberNames];

/// Runs `rules` in order, stopping at the first violation.
pub(crate) fn check<S: ?Sized>(rules: &[&dyn Rule<S>], subject: &S) -> Result<(), Violation> {
    for rule in rules {
        tracing::trace!(rule = rule.name(), "checking rule");
        rule.check(subject)?;
    }
    Ok(())
}

fn infos<S: ?Sized>(construct: Construct, rules: &[&dyn Rule<S>]) -> Vec<(Construct, RuleInfo)> {
    rules.iter().map(|rule| (construct, rule.info())).collect()
}

/// Every rule applied at build time, grouped by construct in evaluation order.
///
/// Struct builds use the class rules.
pub fn catalog() -> Vec<(Construct, RuleInfo)> {
    let mut all = infos(Construct::Class, CLASS_RULES);
    all.extend(infos(Construct::Interface, INTERFACE_RULES));
    all.extend(infos(Construct::Property, PROPERTY_RULES));
    all.extend(infos(Construct::Field, FIELD_RULES));
    all.extend(infos(Construct::Constructor, CONSTRUCTOR_RULES));
    all.extend(infos(Construct::Enum, ENUM_RULES));
    all.extend(infos(Construct::Namespace, NAMESPACE_RULES));
    all
}
