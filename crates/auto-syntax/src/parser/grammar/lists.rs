//! Separated lists and delimiter bookkeeping shared by all productions.

use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{CLOSERS, SEPARATORS};
use crate::parser::cst::{SyntaxKind, TokenSet};

fn closer_for(open: SyntaxKind) -> Option<SyntaxKind> {
    match open {
        SyntaxKind::ParenOpen => Some(SyntaxKind::ParenClose),
        SyntaxKind::BracketOpen => Some(SyntaxKind::BracketClose),
        SyntaxKind::BraceOpen => Some(SyntaxKind::BraceClose),
        _ => None,
    }
}

fn unclosed_kind(open: SyntaxKind) -> DiagnosticKind {
    match open {
        SyntaxKind::ParenOpen => DiagnosticKind::UnclosedParen,
        SyntaxKind::BracketOpen => DiagnosticKind::UnclosedBracket,
        SyntaxKind::BraceOpen => DiagnosticKind::UnclosedBrace,
        _ => DiagnosticKind::UnclosedString,
    }
}

impl Parser<'_> {
    /// Bumps the opening delimiter and tracks it for unclosed-delimiter reporting.
    pub(super) fn open_delimiter(&mut self, open: SyntaxKind) -> TextRange {
        self.assert_current(open);
        let span = self.span_here();
        self.push_delimiter(open);
        self.bump();
        span
    }

    /// Eats the closer matching `open`, or reports it missing with `label` at the opener.
    pub(super) fn close_delimiter(&mut self, open: SyntaxKind, open_span: TextRange, label: &str) {
        self.pop_delimiter();
        let closed = closer_for(open).is_some_and(|closer| self.eat(closer));
        if !closed {
            self.error_unclosed_delimiter(unclosed_kind(open), label, open_span);
        }
    }

    /// Whether the current token closes a delimiter opened by an enclosing production.
    pub(super) fn at_enclosing_closer(&mut self) -> bool {
        let current = self.current();
        self.open_delimiters
            .iter()
            .any(|d| closer_for(d.kind) == Some(current))
    }

    /// Parses `item (sep item)* sep?` where a line break may stand in for `sep`.
    ///
    /// Stops at `closer`, at any closer of an enclosing delimiter, or at EOF.
    /// Tokens that cannot start an item are wrapped in `Error` nodes.
    pub(super) fn parse_separated(
        &mut self,
        separator: SyntaxKind,
        closer: Option<SyntaxKind>,
        first: TokenSet,
        what: &str,
        item: fn(&mut Self),
    ) {
        let mut needs_separator = false;

        loop {
            // Trailing trivia has to be skipped before EOF is observable.
            let current = self.current();
            if self.should_stop() || Some(current) == closer || self.at_enclosing_closer() {
                break;
            }

            if current == separator {
                if needs_separator {
                    self.bump();
                    needs_separator = false;
                } else {
                    let text = self.current_text();
                    self.error_skip_with(
                        DiagnosticKind::InvalidSeparator,
                        format!("`{}` must follow {}", text, what),
                    );
                }
                continue;
            }

            if SEPARATORS.contains(current) {
                let expected = if separator == SyntaxKind::Comma { "," } else { ";" };
                let span = self.span_here();
                self.report_fix(
                    DiagnosticKind::InvalidSeparator,
                    span,
                    format!("expected `{}`", expected),
                    format!("use `{}`", expected),
                    expected,
                );
                self.skip_as_error();
                needs_separator = false;
                continue;
            }

            if first.contains(current) {
                if needs_separator && !self.at_line_break() {
                    let span = self.span_here();
                    let at = self.last_non_trivia_end().unwrap_or(span.start());
                    let sep = if separator == SyntaxKind::Comma { "," } else { ";" };
                    self.report_fix(
                        DiagnosticKind::MissingSeparator,
                        TextRange::empty(at),
                        format!("expected `{}` or a line break before {}", sep, what),
                        format!("insert `{}`", sep),
                        sep,
                    );
                }
                item(self);
                needs_separator = true;
                continue;
            }

            if current == SyntaxKind::Dollar {
                self.error_skip(DiagnosticKind::LoneDollar);
                needs_separator = false;
                continue;
            }

            if CLOSERS.contains(current) {
                let text = self.current_text();
                self.error_skip_with(
                    DiagnosticKind::UnexpectedToken,
                    format!("unmatched `{}`", text),
                );
                needs_separator = false;
                continue;
            }

            let recovery = first.union(SEPARATORS).union(CLOSERS);
            self.error_recover(
                DiagnosticKind::UnexpectedToken,
                &format!("expected {}", what),
                recovery,
            );
            needs_separator = false;
        }
    }
}
