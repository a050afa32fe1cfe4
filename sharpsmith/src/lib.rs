//! Fluent builders that model C# declarations and render them as source text.
//!
//! Code flows through three stages:
//!
//! - [`create`] factories return mutable builders ([`builder`])
//! - `build()` validates a builder against the rules in [`validate`] and
//!   freezes it into an immutable [`model`] value
//! - [`CSharpRenderer`] turns a model into formatted text
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
//! assert_eq!(
//!     person.to_source_code()?,
//!     "public class Person\n\
//!      {\n    public string Name { get; set; }\n\n    public int Age { get; set; }\n}\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Every failure is an [`Error`]: blank arguments fail at the setter, missing
//! settings and rule violations fail at `build()`.

pub mod builder;
pub mod create;
mod error;
pub mod model;
mod options;
mod render;
pub mod validate;

pub use builder::{
    AccessorBuilder, BaseType, ClassBuilder, ConstructorBuilder, EnumBuilder, EnumMemberBuilder,
    FieldBuilder, InterfaceBuilder, MemberKind, NameComparison, NamespaceBuilder, PropertyBuilder,
    TypeBuilder,
};
pub use error::{Construct, Error, ErrorKind, Result, Violation};
pub use model::{
    Accessibility, AccessorBody, AccessorKind, AccessorModel, ClassModel, ConstructorInitializer,
    ConstructorModel, EnumMemberModel, EnumModel, FieldModel, InterfaceModel, NamespaceModel,
    ParameterModel, PropertyModel, TypeKind, TypeModel, TypeModifier,
};
pub use options::{NamespaceStyle, RenderOptions};
pub use render::{CSharpNode, CSharpRenderer};
pub use sharpsmith_writer::Indent;
