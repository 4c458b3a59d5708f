//! Line-oriented text builder for generated definitions.

/// Indentation style for generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation used by SDL definitions.
    pub const SDL: Self = Self::Spaces(2);

    fn write_to(&self, buffer: &mut String) {
        match self {
            Self::Spaces(n) => buffer.extend(std::iter::repeat_n(' ', usize::from(*n))),
            Self::Tab => buffer.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::SDL
    }
}

/// Builds text line by line with tracked indentation.
///
/// # Example
///
/// ```
/// use tablegraft_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::sdl();
/// builder
///     .push_line("type Album_ImportedType {")
///     .push_indent()
///     .push_line("Title : String!")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "type Album_ImportedType {\n  Title : String!\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new builder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new builder with 2-space indentation.
    pub fn sdl() -> Self {
        Self::new(Indent::SDL)
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.indent.write_to(&mut self.buffer);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Check if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the text.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_indentation() {
        let mut builder = CodeBuilder::sdl();
        builder
            .push_line("a {")
            .push_indent()
            .push_line("b {")
            .push_indent()
            .push_line("c")
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "a {\n  b {\n    c\n  }\n}\n");
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.push_indent().push_line("x");
        assert_eq!(builder.build(), "\tx\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::sdl();
        builder.push_dedent().push_line("x").push_blank();
        assert_eq!(builder.build(), "x\n\n");
    }

    #[test]
    fn test_is_empty() {
        let mut builder = CodeBuilder::default();
        assert!(builder.is_empty());
        builder.push_line("");
        assert!(!builder.is_empty());
    }
}
