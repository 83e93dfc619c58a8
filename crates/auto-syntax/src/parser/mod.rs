//! Parser infrastructure for Auto source text.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: binary operators, calls and assignments wrap their left operand retroactively
//! - Line breaks are trivia, but separators accept them in place of `;` and `,`
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Recovery follows these rules:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. List items stop at their closer or at the closer of any enclosing delimiter
//! 4. Unclosed delimiters point back at where they were opened
//!
//! However, fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod tests;

pub use cst::{AutoLang, SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{Code, Expr, Stmt};

pub use core::{ParseResult, Parser};

use crate::Result;
use lexer::lex;

/// Parses with no fuel limits. Syntax errors end up in the result's diagnostics.
pub fn parse(source: &str) -> Result<ParseResult> {
    Parser::new(source, lex(source)).parse()
}
