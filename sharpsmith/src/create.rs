//! Factory functions, one pair per construct.
//!
//! The zero-argument form returns an empty builder. The `_named` form seeds
//! the identifying attributes and rejects a blank name or type with
//! [`Error::ArgumentNull`](crate::Error::ArgumentNull).
//!
//! ```
//! use sharpsmith::{Accessibility, create};
//!
//! # fn main() -> sharpsmith::Result<()> {
//! let mut status = create::enum_named("Status", Accessibility::Public)?;
//! status.add_member_names(["Active", "Archived"])?;
//!
//! let mut models = create::namespace_named("App.Models")?;
//! models.add_using("System")?.add_type(status);
//! assert!(models.has_member("status"));
//! # Ok(())
//! # }
//! ```

use crate::{
    builder::{
        AccessorBuilder, ClassBuilder, ConstructorBuilder, EnumBuilder, EnumMemberBuilder,
        FieldBuilder, InterfaceBuilder, NamespaceBuilder, PropertyBuilder,
    },
    error::Result,
    model::{Accessibility, AccessorKind, TypeKind},
};

pub fn namespace() -> NamespaceBuilder {
    NamespaceBuilder::new()
}

pub fn namespace_named(name: impl Into<String>) -> Result<NamespaceBuilder> {
    let mut builder = NamespaceBuilder::new();
    builder.with_name(name)?;
    Ok(builder)
}

pub fn class() -> ClassBuilder {
    ClassBuilder::new(TypeKind::Class)
}

pub fn class_named(name: impl Into<String>, access: Accessibility) -> Result<ClassBuilder> {
    let mut builder = class();
    builder.with_name(name)?.with_access(access);
    Ok(builder)
}

pub fn structure() -> ClassBuilder {
    ClassBuilder::new(TypeKind::Struct)
}

pub fn struct_named(name: impl Into<String>, access: Accessibility) -> Result<ClassBuilder> {
    let mut builder = structure();
    builder.with_name(name)?.with_access(access);
    Ok(builder)
}

pub fn interface() -> InterfaceBuilder {
    InterfaceBuilder::new()
}

pub fn interface_named(
    name: impl Into<String>,
    access: Accessibility,
) -> Result<InterfaceBuilder> {
    let mut builder = interface();
    builder.with_name(name)?.with_access(access);
    Ok(builder)
}

pub fn enumeration() -> EnumBuilder {
    EnumBuilder::new()
}

pub fn enum_named(name: impl Into<String>, access: Accessibility) -> Result<EnumBuilder> {
    let mut builder = enumeration();
    builder.with_name(name)?.with_access(access);
    Ok(builder)
}

pub fn enum_member() -> EnumMemberBuilder {
    EnumMemberBuilder::new()
}

pub fn enum_member_named(name: impl Into<String>) -> Result<EnumMemberBuilder> {
    let mut builder = enum_member();
    builder.with_name(name)?;
    Ok(builder)
}

pub fn field() -> FieldBuilder {
    FieldBuilder::new()
}

pub fn field_named(
    ty: impl Into<String>,
    name: impl Into<String>,
    access: Accessibility,
) -> Result<FieldBuilder> {
    let mut builder = field();
    builder.with_type(ty)?.with_name(name)?.with_access(access);
    Ok(builder)
}

pub fn property() -> PropertyBuilder {
    PropertyBuilder::new()
}

pub fn property_named(
    ty: impl Into<String>,
    name: impl Into<String>,
    access: Accessibility,
) -> Result<PropertyBuilder> {
    let mut builder = property();
    builder.with_type(ty)?.with_name(name)?.with_access(access);
    Ok(builder)
}

pub fn constructor() -> ConstructorBuilder {
    ConstructorBuilder::new()
}

pub fn constructor_with(access: Accessibility) -> ConstructorBuilder {
    let mut builder = constructor();
    builder.with_access(access);
    builder
}

/// An auto-implemented `get;`.
pub fn getter() -> AccessorBuilder {
    AccessorBuilder::new(AccessorKind::Get)
}

/// An auto-implemented `set;`.
pub fn setter() -> AccessorBuilder {
    AccessorBuilder::new(AccessorKind::Set)
}

/// An auto-implemented `init;`.
pub fn init_accessor() -> AccessorBuilder {
    AccessorBuilder::new(AccessorKind::Init)
}
