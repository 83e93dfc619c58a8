//! Template strings: `f"..."`, `f"""..."""`, ``f`...` `` and ```` ```...``` ````.
//!
//! The lexer already split the body into `StrPart` runs and `$` interpolations,
//! so the parser only groups them.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::TEMPLATE_CLOSERS;
use crate::parser::cst::{SyntaxKind, TokenSet};

fn template_closer(opener: SyntaxKind) -> SyntaxKind {
    match opener {
        SyntaxKind::FStrOpen => SyntaxKind::DoubleQuote,
        SyntaxKind::FStrTripleOpen => SyntaxKind::TripleQuote,
        SyntaxKind::FTickOpen => SyntaxKind::Backtick,
        SyntaxKind::MStrFence => SyntaxKind::MStrFence,
        _ => panic!("template_closer: {:?} does not open a template", opener),
    }
}

impl Parser<'_> {
    pub(super) fn parse_fstr(&mut self) {
        self.start_node(SyntaxKind::FStr);
        self.parse_template(true);
        self.finish_node();
    }

    /// Multi-line strings keep their literal runs as bare `StrPart` tokens.
    pub(super) fn parse_mstr(&mut self) {
        self.start_node(SyntaxKind::MStr);
        self.parse_template(false);
        self.finish_node();
    }

    fn parse_template(&mut self, wrap_parts: bool) {
        let opener = self.current();
        let closer = template_closer(opener);
        let open_span = self.span_here();
        self.push_delimiter(opener);
        self.bump();

        loop {
            match self.nth_raw(0) {
                SyntaxKind::StrPart if wrap_parts => {
                    self.start_node(SyntaxKind::SPart);
                    self.bump();
                    self.finish_node();
                }
                SyntaxKind::StrPart => self.bump(),
                SyntaxKind::Dollar => self.parse_interpol(),
                _ => break,
            }
            if self.has_fatal_error() {
                break;
            }
        }

        self.pop_delimiter();
        if !self.eat(closer) {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedString,
                "string started here",
                open_span,
            );
        }
    }

    /// `$name` or `${ value }`
    fn parse_interpol(&mut self) {
        self.start_node(SyntaxKind::Interpol);
        self.bump();

        if !self.at(SyntaxKind::BraceOpen) {
            self.parse_name();
            self.finish_node();
            return;
        }

        let open = self.open_delimiter(SyntaxKind::BraceOpen);
        self.parse_asn_expr_or_error("inside `${ }`");
        let recovery = TEMPLATE_CLOSERS.union(TokenSet::single(SyntaxKind::BraceClose));
        if !self.at_any(recovery) && !self.should_stop() {
            self.error_recover(DiagnosticKind::UnexpectedToken, "expected `}`", recovery);
        }
        self.close_delimiter(SyntaxKind::BraceOpen, open, "interpolation started here");

        self.finish_node();
    }
}
