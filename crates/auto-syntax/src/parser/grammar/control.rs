use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::Restrictions;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{CASE_FIRST, EXPR_FIRST, STMT_FIRST};

impl Parser<'_> {
    /// `if cond { } else if cond { } else { }`
    ///
    /// `else if` branches stay flat inside one `If` node.
    pub(super) fn parse_if(&mut self) {
        self.start_node(SyntaxKind::If);
        self.assert_current(SyntaxKind::KwIf);
        self.bump();
        self.parse_cond_and_then();

        while self.at(SyntaxKind::KwElse) {
            if self.peek_is(SyntaxKind::KwIf) {
                self.bump();
                self.expect(SyntaxKind::KwIf, "`if` after `else`");
                self.parse_cond_and_then();
                continue;
            }
            self.bump();
            self.parse_block_or_error(SyntaxKind::Else, "after `else`");
            break;
        }

        self.finish_node();
    }

    fn parse_cond_and_then(&mut self) {
        if self.at(SyntaxKind::BraceOpen) {
            self.error_with(DiagnosticKind::ExpectedExpression, "condition before `{`");
        } else {
            self.parse_expr_with_or_error(Restrictions::CONDITION, "after `if`");
        }
        self.parse_block_or_error(SyntaxKind::Then, "after the condition");
    }

    /// `for var i = 0; cond { }` or `for i, x in xs { }`
    pub(super) fn parse_for(&mut self) {
        self.start_node(SyntaxKind::For);
        self.assert_current(SyntaxKind::KwFor);
        self.bump();

        if self.at_in_clause() {
            self.parse_in();
        } else {
            self.parse_inits();
            if !self.at(SyntaxKind::BraceOpen) && self.at_any(EXPR_FIRST) {
                self.parse_expr_with(Restrictions::CONDITION);
            }
        }
        self.parse_block_or_error(SyntaxKind::Body, "for the loop");

        self.finish_node();
    }

    fn at_in_clause(&mut self) -> bool {
        self.at(SyntaxKind::Ident)
            && matches!(self.nth(1), SyntaxKind::Comma | SyntaxKind::KwIn)
    }

    /// `(var ... ;)*` ahead of a loop condition or `when` subject.
    fn parse_inits(&mut self) {
        while self.at(SyntaxKind::KwVar) {
            self.parse_var();
            self.expect(SyntaxKind::Semicolon, "`;` after the initializer");
        }
    }

    /// `idx, name in iterable`
    fn parse_in(&mut self) {
        self.start_node(SyntaxKind::In);

        if self.peek_is(SyntaxKind::Comma) {
            self.start_node(SyntaxKind::Idx);
            self.bump();
            self.finish_node();
            self.expect(SyntaxKind::Comma, "`,` after the index");
        }

        if self.at(SyntaxKind::Ident) {
            self.start_node(SyntaxKind::Name);
            self.bump();
            self.finish_node();
        } else {
            self.error_with(DiagnosticKind::ExpectedName, "for the loop variable");
        }

        if self.expect(SyntaxKind::KwIn, "`in`") {
            self.parse_asn_expr_with_or_error(Restrictions::CONDITION, "after `in`");
        }

        self.finish_node();
    }

    /// `when subject { is pattern -> stmt; else { } }`
    pub(super) fn parse_when(&mut self) {
        self.start_node(SyntaxKind::When);
        self.assert_current(SyntaxKind::KwWhen);
        self.bump();
        self.parse_inits();

        if self.at(SyntaxKind::BraceOpen) {
            self.error_with(DiagnosticKind::ExpectedExpression, "subject before `{`");
        } else {
            self.parse_asn_expr_with_or_error(Restrictions::CONDITION, "after `when`");
        }

        if self.at(SyntaxKind::BraceOpen) {
            self.start_node(SyntaxKind::Body);
            let open = self.open_delimiter(SyntaxKind::BraceOpen);
            self.parse_separated(
                SyntaxKind::Semicolon,
                Some(SyntaxKind::BraceClose),
                CASE_FIRST,
                "an `is` case",
                Self::parse_when_arm,
            );
            self.close_delimiter(SyntaxKind::BraceOpen, open, "`when` body started here");
            self.finish_node();
        } else {
            self.error_with(DiagnosticKind::ExpectedBody, "after the `when` subject");
        }

        self.finish_node();
    }

    /// `is pattern (body | -> stmt)` or `else (body | -> stmt)`
    fn parse_when_arm(&mut self) {
        let kind = if self.at(SyntaxKind::KwIs) {
            SyntaxKind::Case
        } else {
            SyntaxKind::Else
        };

        self.start_node(kind);
        self.bump();

        if kind == SyntaxKind::Case {
            if self.at(SyntaxKind::BraceOpen) {
                self.error_with(DiagnosticKind::ExpectedExpression, "pattern after `is`");
            } else {
                self.parse_expr_with_or_error(Restrictions::CASE_PATTERN, "after `is`");
            }
        }

        if self.at(SyntaxKind::BraceOpen) {
            self.parse_block(SyntaxKind::Body);
        } else if self.eat(SyntaxKind::Arrow) {
            if self.at_any(STMT_FIRST) {
                self.parse_stmt();
            } else {
                self.error_with(DiagnosticKind::ExpectedExpression, "after `->`");
            }
        } else {
            self.error_with(DiagnosticKind::ExpectedBody, "or `->` after the pattern");
        }

        self.finish_node();
    }
}
