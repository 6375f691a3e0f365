//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Builder for properly indented code.
///
/// Mutable methods (returning `&mut Self`) emit incrementally; [`line`] is
/// the consuming shorthand for single statements.
///
/// [`line`]: CodeBuilder::line
///
/// # Example
///
/// ```
/// use postgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::javascript();
/// builder
///     .push_line("if (ready) {")
///     .push_indent()
///     .push_line("start();")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "if (ready) {\n  start();\n}\n");
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

    /// Create a new CodeBuilder with 2-space indentation (JavaScript default).
    pub fn javascript() -> Self {
        Self::new(Indent::JAVASCRIPT)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
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

    /// Add a multi-line JSDoc comment (mutable).
    pub fn push_jsdoc(&mut self, lines: &[String]) -> &mut Self {
        self.push_line("/**");
        for line in lines {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {line}"));
            }
        }
        self.push_line(" */")
    }

    /// Emit a Renderable node (mutable).
    ///
    /// This is the primary way to render AST nodes.
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
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
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
            CodeFragment::JsDoc(lines) => {
                self.push_jsdoc(&lines);
            }
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::javascript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::javascript().line("const x = 1;").build();
        assert_eq!(code, "const x = 1;\n");
    }

    #[test]
    fn test_nested_lines() {
        let mut builder = CodeBuilder::javascript();
        builder
            .push_line("export {")
            .push_indent()
            .push_line("users,")
            .push_blank()
            .push_line("orders,")
            .push_dedent()
            .push_line("};");

        assert_eq!(builder.build(), "export {\n  users,\n\n  orders,\n};\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::javascript();
        builder.push_dedent().push_line("a();");
        assert_eq!(builder.build(), "a();\n");
    }

    #[test]
    fn test_jsdoc_is_indented() {
        let mut builder = CodeBuilder::javascript();
        builder
            .push_indent()
            .push_jsdoc(&["@param {string} name".to_string()]);
        assert_eq!(
            builder.build(),
            "  /**\n   * @param {string} name\n   */\n"
        );
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::jsdoc(["Entry point"]),
                    CodeFragment::block(
                        "function main() {",
                        vec![CodeFragment::line("return 0;")],
                        Some("}".to_string()),
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::javascript();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "/**\n * Entry point\n */\nfunction main() {\n  return 0;\n}\n"
        );
    }
}
