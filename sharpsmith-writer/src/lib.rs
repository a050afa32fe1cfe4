//! Text emission building blocks for the sharpsmith code generator.
//!
//! This crate knows nothing about C#. It turns a tree of [`CodeFragment`]s
//! into indented text and is shared by every renderer in the workspace.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod fragment;
mod indent;

pub use code_builder::CodeBuilder;
pub use fragment::{CodeFragment, Renderable};
pub use indent::Indent;
