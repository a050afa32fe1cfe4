//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Model nodes describe themselves as fragments; the [`CodeBuilder`](crate::CodeBuilder)
//! decides indentation and line endings.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, indented body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A `///` documentation comment line.
    Doc(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a brace-on-its-own-line block:
    ///
    /// ```text
    /// header
    /// {
    ///     body
    /// }
    /// ```
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Sequence(vec![
            Self::Line(header.into()),
            Self::Block {
                header: "{".to_string(),
                body,
                close: Some("}".to_string()),
            },
        ])
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    /// Create a documentation comment fragment.
    pub fn doc(s: impl Into<String>) -> Self {
        Self::Doc(s.into())
    }

    /// Join groups of fragments, optionally separating consecutive groups with a blank line.
    pub fn separated(groups: Vec<Vec<CodeFragment>>, blank_between: bool) -> Vec<CodeFragment> {
        let mut out = Vec::new();
        for (i, group) in groups.into_iter().enumerate() {
            if i > 0 && blank_between {
                out.push(Self::Blank);
            }
            out.extend(group);
        }
        out
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl Renderable for [CodeFragment] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_vec()
    }
}
