//! Document facade: parse, validate, and print Auto sources.
//!
//! ```
//! use auto_syntax::Document;
//!
//! let doc = Document::new("if x > 1 { print(x) }")
//!     .with_exec_fuel(Some(10_000))
//!     .exec()
//!     .expect("fuel");
//! assert!(doc.is_valid());
//! ```

mod printer;
mod validate;
mod visitor;

#[cfg(test)]
mod mod_tests;

pub use printer::DocumentPrinter;

use rowan::GreenNodeBuilder;

use crate::diagnostics::Diagnostics;
use crate::parser::ast::Code;
use crate::parser::lexer::lex;
use crate::parser::{ParseResult, Parser, SyntaxKind, SyntaxNode};
use crate::{Error, Result};

/// Tokens a single parse may consume.
pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
/// How deep productions may nest.
pub const DEFAULT_RECURSION_FUEL: u32 = 1024;

/// One Auto source file and what the parser made of it.
///
/// A freshly created document holds an empty `Code` root. [`exec`](Self::exec)
/// fills in the tree and the diagnostics; malformed input still yields a tree.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    source: &'a str,
    root: Code,
    exec_limit: Option<u32>,
    depth_limit: Option<u32>,
    fuel_used: u32,
    syntax_errors: Diagnostics,
    semantic_errors: Diagnostics,
}

impl<'a> Document<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut builder = GreenNodeBuilder::new();
        builder.start_node(SyntaxKind::Code.into());
        builder.finish_node();
        let root = SyntaxNode::new_root(builder.finish());

        Self {
            source,
            root: Code::cast(root).expect("root was built as Code"),
            exec_limit: Some(DEFAULT_EXEC_FUEL),
            depth_limit: Some(DEFAULT_RECURSION_FUEL),
            fuel_used: 0,
            syntax_errors: Diagnostics::new(),
            semantic_errors: Diagnostics::new(),
        }
    }

    /// Caps the number of tokens the parser may consume; `None` lifts the cap.
    /// Hitting it makes [`exec`](Self::exec) fail with [`Error::ExecFuelExhausted`].
    pub fn with_exec_fuel(self, limit: Option<u32>) -> Self {
        Self {
            exec_limit: limit,
            ..self
        }
    }

    /// Caps nesting depth; `None` lifts the cap. Hitting it makes
    /// [`exec`](Self::exec) fail with [`Error::RecursionLimitExceeded`].
    pub fn with_recursion_fuel(self, limit: Option<u32>) -> Self {
        Self {
            depth_limit: limit,
            ..self
        }
    }

    /// Lexes, parses and validates. Only the fuel limits make this fail.
    pub fn exec(mut self) -> Result<Self> {
        let parser = Parser::new(self.source, lex(self.source))
            .with_exec_fuel(self.exec_limit)
            .with_recursion_fuel(self.depth_limit);
        let ParseResult {
            root,
            diagnostics,
            exec_fuel_consumed,
        } = parser.parse()?;

        self.root = root;
        self.syntax_errors = diagnostics;
        self.fuel_used = exec_fuel_consumed;
        self.validate();
        Ok(self)
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn root(&self) -> &Code {
        &self.root
    }

    pub fn syntax(&self) -> &SyntaxNode {
        self.root.as_cst()
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        self.fuel_used
    }

    /// Parser diagnostics followed by validation diagnostics, unfiltered.
    pub fn diagnostics(&self) -> Diagnostics {
        let mut all = self.syntax_errors.clone();
        all.extend(self.semantic_errors.clone());
        all
    }

    /// No errors. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        !(self.syntax_errors.has_errors() || self.semantic_errors.has_errors())
    }

    /// `Ok(self)` when valid, otherwise [`Error::ParseError`] with the filtered diagnostics.
    pub fn into_valid(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::ParseError(self.diagnostics().filtered()))
        }
    }

    pub fn printer(&self) -> DocumentPrinter<'_, 'a> {
        DocumentPrinter::new(self)
    }
}

impl<'a> TryFrom<&'a str> for Document<'a> {
    type Error = Error;

    fn try_from(source: &'a str) -> Result<Self> {
        Document::new(source).exec()
    }
}

impl<'a> TryFrom<&'a String> for Document<'a> {
    type Error = Error;

    fn try_from(source: &'a String) -> Result<Self> {
        Document::try_from(source.as_str())
    }
}

#[cfg(test)]
impl Document<'_> {
    /// Parses, asserts no errors, returns the s-expression.
    #[track_caller]
    pub(crate) fn expect_valid_sexp(source: &str) -> String {
        let doc = Document::try_from(source).expect("fuel");
        assert!(
            doc.is_valid(),
            "expected valid document, got:\n{}",
            doc.diagnostics().printer().render()
        );
        doc.printer().dump()
    }

    /// Parses, asserts no errors, returns the raw CST.
    #[track_caller]
    pub(crate) fn expect_valid_cst(source: &str) -> String {
        let doc = Document::try_from(source).expect("fuel");
        assert!(
            doc.is_valid(),
            "expected valid document, got:\n{}",
            doc.diagnostics().printer().render()
        );
        doc.printer().raw(true).dump()
    }

    /// Parses, asserts errors, returns the filtered diagnostics one per line.
    #[track_caller]
    pub(crate) fn expect_invalid(source: &str) -> String {
        let doc = Document::try_from(source).expect("fuel");
        assert!(!doc.is_valid(), "expected diagnostics for {:?}", source);
        doc.diagnostics().filtered().printer().render()
    }

    /// Like [`expect_invalid`](Self::expect_invalid) but without cascade suppression.
    #[track_caller]
    pub(crate) fn expect_invalid_raw(source: &str) -> String {
        let doc = Document::try_from(source).expect("fuel");
        assert!(!doc.is_valid(), "expected diagnostics for {:?}", source);
        doc.diagnostics().printer().render()
    }

    /// Parses, returns whatever diagnostics were produced, filtered.
    #[track_caller]
    pub(crate) fn diagnostics_of(source: &str) -> String {
        let doc = Document::try_from(source).expect("fuel");
        doc.diagnostics().filtered().printer().render()
    }
}
