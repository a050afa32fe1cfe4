//! Rendering configuration.

use sharpsmith_writer::Indent;

/// How a namespace declaration encloses its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamespaceStyle {
    /// `namespace Acme { ... }`
    #[default]
    Block,
    /// `namespace Acme;` followed by unindented members.
    FileScoped,
}

/// Options controlling the text produced by [`CSharpRenderer`](crate::CSharpRenderer).
///
/// ```
/// use sharpsmith::{Indent, NamespaceStyle, RenderOptions};
///
/// let options = RenderOptions::default()
///     .indent(Indent::Tab)
///     .namespace_style(NamespaceStyle::FileScoped);
/// assert_eq!(options.indent, Indent::Tab);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indentation for one nesting level.
    pub indent: Indent,
    /// Namespace declaration style.
    pub namespace_style: NamespaceStyle,
    /// Separate members inside a type body with a blank line.
    pub blank_line_between_members: bool,
}

impl RenderOptions {
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn namespace_style(mut self, style: NamespaceStyle) -> Self {
        self.namespace_style = style;
        self
    }

    pub fn blank_line_between_members(mut self, enabled: bool) -> Self {
        self.blank_line_between_members = enabled;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: Indent::CSHARP,
            namespace_style: NamespaceStyle::Block,
            blank_line_between_members: true,
        }
    }
}
