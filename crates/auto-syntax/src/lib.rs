//! Syntax for the Auto language: lexer, error-tolerant parser, typed tree views,
//! and the static grammar descriptor exposed to C as `tree_sitter_auto`.
//!
//! # Example
//!
//! ```
//! use auto_syntax::Document;
//!
//! let source = r#"
//!     var greeting = f"hello $name"
//!     fn add(a, b) = a + b
//! "#;
//!
//! let doc = Document::try_from(source).expect("out of fuel");
//! assert!(doc.is_valid());
//! println!("{}", doc.printer().dump());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod document;
pub mod ffi;
pub mod language;
pub mod parser;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use document::{DEFAULT_EXEC_FUEL, DEFAULT_RECURSION_FUEL, Document, DocumentPrinter};
pub use language::{Language, language};
pub use parser::{SyntaxKind, SyntaxNode, ast, parse};

/// Errors that abort parsing.
///
/// Syntax errors are not among them: those are reported as [`Diagnostics`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The parser consumed more tokens than its execution fuel allows.
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Input nested deeper than the recursion fuel allows.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// Returned by [`Document::into_valid`] for sources with errors.
    #[error("parsing failed with {} errors", .0.error_count())]
    ParseError(Diagnostics),
}

pub type Result<T> = std::result::Result<T, Error>;
