//! Built-in rules, grouped by the construct they check.

mod class;
mod constructor;
mod enumeration;
mod field;
mod interface;
mod property;
mod unique_names;

pub(crate) use class::{
    ExplicitMemberAccess, SingleTypeModifier, StaticClassMembers, StructBaseClass,
    StructTypeModifier,
};
pub(crate) use constructor::StaticConstructor;
pub(crate) use enumeration::{FlagsCapacity, UniqueEnumMembers};
pub(crate) use field::ConstField;
pub(crate) use interface::{
    InterfaceMemberAccess, InterfacePropertyAccessor, InterfacePropertyAuto,
    InterfacePropertyDefault,
};
pub(crate) use property::{AccessorDuplicate, DefaultRequiresAuto};
pub(crate) use unique_names::UniqueMemberNames;
