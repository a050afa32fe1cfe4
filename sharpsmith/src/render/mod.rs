//! C# text rendering.
//!
//! Each model describes itself as [`CodeFragment`]s through [`CSharpNode`];
//! the [`CSharpRenderer`] feeds those fragments to a [`CodeBuilder`] that owns
//! indentation. Output uses Allman braces and always ends with one newline.

mod members;
mod namespace;
mod types;

use std::fmt;

use sharpsmith_writer::{CodeBuilder, CodeFragment, Renderable};

use crate::{
    model::{
        ClassModel, ConstructorModel, EnumModel, FieldModel, InterfaceModel, NamespaceModel,
        PropertyModel, TypeModel,
    },
    options::RenderOptions,
};

/// A model that can be written as C# source.
pub trait CSharpNode {
    /// Describe this node as fragments, honoring `options`.
    fn fragments(&self, options: &RenderOptions) -> Vec<CodeFragment>;
}

impl<T: CSharpNode + ?Sized> CSharpNode for &T {
    fn fragments(&self, options: &RenderOptions) -> Vec<CodeFragment> {
        (**self).fragments(options)
    }
}

/// Binds a node to options so the writer can emit it.
struct Configured<'a, N: ?Sized> {
    node: &'a N,
    options: &'a RenderOptions,
}

impl<N: CSharpNode + ?Sized> Renderable for Configured<'_, N> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.node.fragments(self.options)
    }
}

/// Renders finalized models to C# text.
///
/// ```
/// use sharpsmith::{CSharpRenderer, Indent, RenderOptions, create};
///
/// # fn main() -> sharpsmith::Result<()> {
/// let mut point = create::struct_named("Point", sharpsmith::Accessibility::Public)?;
/// point.add_field(create::field_named("int", "X", sharpsmith::Accessibility::Public)?);
///
/// let renderer = CSharpRenderer::new(RenderOptions::default().indent(Indent::COMPACT));
/// assert_eq!(
///     renderer.render(&point.build()?),
///     "public struct Point\n{\n  public int X;\n}\n"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer {
    options: RenderOptions,
}

impl CSharpRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a namespace, a type or a single member.
    pub fn render(&self, node: &impl CSharpNode) -> String {
        let mut builder = CodeBuilder::new(self.options.indent);
        builder.emit(&Configured {
            node,
            options: &self.options,
        });
        let source = builder.build();
        tracing::debug!(bytes = source.len(), "rendered C# source");
        source
    }
}

/// `/// <summary>` block followed by `[Attribute]` lines.
pub(crate) fn preamble<'a>(
    docs: &[String],
    attributes: impl IntoIterator<Item = &'a str>,
) -> Vec<CodeFragment> {
    let mut out = Vec::new();
    if !docs.is_empty() {
        out.push(CodeFragment::doc("<summary>"));
        out.extend(docs.iter().map(|line| CodeFragment::doc(line.as_str())));
        out.push(CodeFragment::doc("</summary>"));
    }
    out.extend(
        attributes
            .into_iter()
            .map(|attribute| CodeFragment::line(format!("[{}]", attribute))),
    );
    out
}

/// Joins modifier keywords and names, skipping empty parts.
pub(crate) fn declaration<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Implements `Renderable` and `Display` with default options.
macro_rules! impl_source {
    ($($model:ty),+ $(,)?) => {
        $(
            impl Renderable for $model {
                fn to_fragments(&self) -> Vec<CodeFragment> {
                    self.fragments(&RenderOptions::default())
                }
            }

            impl fmt::Display for $model {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&CSharpRenderer::default().render(self))
                }
            }
        )+
    };
}

impl_source!(
    NamespaceModel,
    TypeModel,
    ClassModel,
    InterfaceModel,
    EnumModel,
    FieldModel,
    PropertyModel,
    ConstructorModel,
);
