//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the C# convention.
    pub const CSHARP: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const COMPACT: Self = Self::Spaces(2);

    /// Write one indent level into `buffer`.
    pub fn write_to(&self, buffer: &mut String) {
        match self {
            Self::Spaces(width) => {
                for _ in 0..*width {
                    buffer.push(' ');
                }
            }
            Self::Tab => buffer.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSHARP
    }
}
