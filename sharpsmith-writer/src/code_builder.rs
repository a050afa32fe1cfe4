//! Code builder utility for generating properly indented code.

use crate::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`).
///
/// # Example (Consuming API)
///
/// ```
/// use sharpsmith_writer::CodeBuilder;
///
/// let code = CodeBuilder::csharp()
///     .line("class Program")
///     .line("{")
///     .indent()
///     .line("static void Main() { }")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "class Program\n{\n    static void Main() { }\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use sharpsmith_writer::CodeBuilder;
///
/// let mut builder = CodeBuilder::csharp();
/// builder
///     .push_line("enum Color")
///     .push_line("{")
///     .push_indent()
///     .push_line("Red,")
///     .push_dedent()
///     .push_line("}");
/// let code = builder.build();
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    ///
    /// An empty line is written without indentation so output never carries
    /// trailing whitespace.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add `///` documentation comment lines (mutable).
    ///
    /// Every line of `text` gets its own `///` prefix.
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self.push_doc_line("");
        }
        for line in text.lines() {
            self.push_doc_line(line);
        }
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Doc(text) => {
                self.push_doc(&text);
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a braced block with the braces on their own lines.
    ///
    /// # Example
    ///
    /// ```
    /// use sharpsmith_writer::CodeBuilder;
    ///
    /// let code = CodeBuilder::csharp()
    ///     .braced("namespace Acme", |b| b.line("class Foo { }"))
    ///     .build();
    ///
    /// assert_eq!(code, "namespace Acme\n{\n    class Foo { }\n}\n");
    /// ```
    pub fn braced<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).line("{").indent();
        f(builder).dedent().line("}")
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn push_doc_line(&mut self, line: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("///");
        let line = line.trim_end();
        if !line.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(line);
        }
        self.buffer.push('\n');
        self
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.indent.write_to(&mut self.buffer);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}
