use std::fmt::{self, Write};

use rowan::{NodeOrToken, TextRange};

use super::Document;
use crate::language::fields::{Field, field_children};
use crate::parser::SyntaxNode;

/// Renders a document either as a tree-sitter style s-expression (default)
/// or as the raw CST (`raw(true)`).
pub struct DocumentPrinter<'d, 'src> {
    doc: &'d Document<'src>,
    raw: bool,
    trivia: bool,
    spans: bool,
}

impl<'d, 'src> DocumentPrinter<'d, 'src> {
    pub fn new(doc: &'d Document<'src>) -> Self {
        Self {
            doc,
            raw: false,
            trivia: false,
            spans: false,
        }
    }

    pub fn raw(self, raw: bool) -> Self {
        Self { raw, ..self }
    }

    /// Only affects the raw CST.
    pub fn with_trivia(self, trivia: bool) -> Self {
        Self { trivia, ..self }
    }

    /// Appends ` [start..end]` to every node and token.
    pub fn with_spans(self, spans: bool) -> Self {
        Self { spans, ..self }
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> fmt::Result {
        let root = self.doc.syntax();
        if self.raw {
            return self.write_raw(root, 0, w);
        }
        self.write_sexp(root, None, 0, w)?;
        w.write_char('\n')
    }

    /// One line per element: `Kind` for nodes, `Kind "text"` for tokens.
    fn write_raw(&self, node: &SyntaxNode, depth: usize, w: &mut impl Write) -> fmt::Result {
        writeln!(w, "{}{:?}{}", Indent(depth), node.kind(), self.span(node.text_range()))?;

        for child in node.children_with_tokens() {
            let token = match child {
                NodeOrToken::Node(child) => {
                    self.write_raw(&child, depth + 1, w)?;
                    continue;
                }
                NodeOrToken::Token(token) => token,
            };
            if token.kind().is_trivia() && !self.trivia {
                continue;
            }
            writeln!(
                w,
                "{}{:?}{} {:?}",
                Indent(depth + 1),
                token.kind(),
                self.span(token.text_range()),
                token.text()
            )?;
        }
        Ok(())
    }

    /// Named nodes only, children prefixed with their field name.
    fn write_sexp(
        &self,
        node: &SyntaxNode,
        field: Option<Field>,
        depth: usize,
        w: &mut impl Write,
    ) -> fmt::Result {
        write!(w, "{}", Indent(depth))?;
        if let Some(field) = field {
            write!(w, "{}: ", field.as_str())?;
        }
        let name = node.kind().grammar_name().unwrap_or("UNKNOWN");
        write!(w, "({}{}", name, self.span(node.text_range()))?;

        for (field, child) in field_children(node) {
            w.write_char('\n')?;
            self.write_sexp(&child, field, depth + 1, w)?;
        }
        w.write_char(')')
    }

    fn span(&self, range: TextRange) -> Span {
        Span(self.spans.then_some(range))
    }
}

struct Indent(usize);

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (0..self.0).try_for_each(|_| f.write_str("  "))
    }
}

struct Span(Option<TextRange>);

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(range) => write!(
                f,
                " [{}..{}]",
                u32::from(range.start()),
                u32::from(range.end())
            ),
            None => Ok(()),
        }
    }
}
