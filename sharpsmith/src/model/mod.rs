//! Immutable representation of finalized C# constructs.
//!
//! Model values are only produced by the builders in [`crate::builder`]; they
//! expose read-only accessors and are consumed by the renderer.
//!
//! ```text
//! builder (mutable) → build() → model (immutable) → CSharpRenderer → text
//! ```

mod access;
mod members;
mod namespace;
mod types;

pub use access::{Accessibility, TypeKind, TypeModifier};
pub use members::{
    AccessorBody, AccessorKind, AccessorModel, ConstructorInitializer, ConstructorModel, FieldModel,
    ParameterModel, PropertyModel,
};
pub use namespace::NamespaceModel;
pub use types::{ClassModel, EnumMemberModel, EnumModel, InterfaceModel, TypeModel};
