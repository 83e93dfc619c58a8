use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{NAME_FIRST, NODE_ITEM_FIRST, STMT_FIRST};

impl Parser<'_> {
    pub fn parse_code(&mut self) {
        self.start_node(SyntaxKind::Code);
        self.parse_separated(
            SyntaxKind::Semicolon,
            None,
            STMT_FIRST,
            "a statement",
            Self::parse_stmt,
        );
        self.eat_trivia();
        self.finish_node();
    }

    pub(super) fn parse_stmt(&mut self) {
        if !self.enter_recursion() {
            return;
        }

        match self.current() {
            SyntaxKind::KwMod => self.parse_mod(),
            SyntaxKind::KwUse => self.parse_use(),
            SyntaxKind::KwImport => self.parse_import(),
            SyntaxKind::KwVar => self.parse_var(),
            SyntaxKind::KwFn => self.parse_fn(),
            SyntaxKind::KwNode => self.parse_node_decl(),
            SyntaxKind::KwIf => self.parse_if(),
            SyntaxKind::KwFor => self.parse_for(),
            SyntaxKind::KwWhen => self.parse_when(),
            SyntaxKind::KwUi => self.parse_ui(),
            SyntaxKind::KwStyle => self.parse_style(),
            _ => self.parse_expr_stmt(),
        }

        self.exit_recursion();
    }

    /// Expression statement, or `name = value` when an `=` follows.
    fn parse_expr_stmt(&mut self) {
        let checkpoint = self.checkpoint();
        let start = self.span_here().start();
        let Some(kind) = self.parse_expr() else {
            return;
        };
        if !self.at(SyntaxKind::Equals) {
            return;
        }

        if kind != SyntaxKind::Name {
            let end = self.last_non_trivia_end().unwrap_or(start);
            self.diagnostics
                .report(DiagnosticKind::UnexpectedToken, TextRange::new(start, end))
                .message("only a name can be assigned")
                .emit();
        }

        self.start_node_at(checkpoint, SyntaxKind::Asn);
        self.bump();
        self.parse_asn_expr_or_error("after `=`");
        self.finish_node();
    }

    /// `{ stmt* }` wrapped in a node of `kind` (`Body`, `Then` or `Else`).
    pub(super) fn parse_block(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        let open = self.open_delimiter(SyntaxKind::BraceOpen);
        self.parse_separated(
            SyntaxKind::Semicolon,
            Some(SyntaxKind::BraceClose),
            STMT_FIRST,
            "a statement",
            Self::parse_stmt,
        );
        self.close_delimiter(SyntaxKind::BraceOpen, open, "block started here");
        self.finish_node();
    }

    pub(super) fn parse_block_or_error(&mut self, kind: SyntaxKind, context: &str) {
        if self.at(SyntaxKind::BraceOpen) {
            self.parse_block(kind);
        } else {
            self.error_with(DiagnosticKind::ExpectedBody, context);
        }
    }

    pub(super) fn parse_name_or_error(&mut self, context: &str) -> bool {
        if self.at(SyntaxKind::Ident)
            || (self.at(SyntaxKind::Dot) && self.peek_is(SyntaxKind::Ident))
        {
            self.parse_name();
            return true;
        }
        self.error_with(DiagnosticKind::ExpectedName, context);
        false
    }

    /// `mod name { ... }`
    fn parse_mod(&mut self) {
        self.start_node(SyntaxKind::Mod);
        self.assert_current(SyntaxKind::KwMod);
        self.bump();
        self.parse_name_or_error("after `mod`");
        self.parse_block_or_error(SyntaxKind::Body, "after the module name");
        self.finish_node();
    }

    /// `ui { ... }`
    fn parse_ui(&mut self) {
        self.start_node(SyntaxKind::Ui);
        self.bump();
        self.parse_block_or_error(SyntaxKind::Body, "after `ui`");
        self.finish_node();
    }

    /// `style { ... }`; the statements sit directly in the style node.
    fn parse_style(&mut self) {
        self.start_node(SyntaxKind::Style);
        self.bump();
        if self.at(SyntaxKind::BraceOpen) {
            let open = self.open_delimiter(SyntaxKind::BraceOpen);
            self.parse_separated(
                SyntaxKind::Semicolon,
                Some(SyntaxKind::BraceClose),
                STMT_FIRST,
                "a statement",
                Self::parse_stmt,
            );
            self.close_delimiter(SyntaxKind::BraceOpen, open, "style started here");
        } else {
            self.error_with(DiagnosticKind::ExpectedBody, "after `style`");
        }
        self.finish_node();
    }

    /// `use name` or `use name: a, b`
    fn parse_use(&mut self) {
        self.start_node(SyntaxKind::Use);
        self.bump();
        self.parse_name_or_error("after `use`");

        if self.at(SyntaxKind::Colon) {
            self.start_node(SyntaxKind::Subs);
            self.bump();
            self.parse_name_or_error("after `:`");
            while self.at(SyntaxKind::Comma) && !self.at_line_break() {
                self.bump();
                self.parse_name_or_error("after `,`");
            }
            self.finish_node();
        }

        self.finish_node();
    }

    /// `import name` or `import name(args)`
    fn parse_import(&mut self) {
        self.start_node(SyntaxKind::Import);
        self.bump();
        self.parse_name_or_error("after `import`");
        if self.at(SyntaxKind::ParenOpen) && !self.at_line_break() {
            self.parse_args();
        }
        self.finish_node();
    }

    /// `var name = value`
    pub(super) fn parse_var(&mut self) {
        self.start_node(SyntaxKind::Var);
        self.assert_current(SyntaxKind::KwVar);
        self.bump();
        self.parse_name_or_error("after `var`");
        if self.expect(SyntaxKind::Equals, "`=` after the variable name") {
            self.parse_asn_expr_or_error("after `=`");
        }
        self.finish_node();
    }

    /// `fn name(params) { ... }` or `fn name(params) = expr`
    fn parse_fn(&mut self) {
        self.start_node(SyntaxKind::Fn);
        self.bump();
        self.parse_name_or_error("after `fn`");

        self.start_node(SyntaxKind::Params);
        if self.at(SyntaxKind::ParenOpen) {
            let open = self.open_delimiter(SyntaxKind::ParenOpen);
            self.parse_separated(
                SyntaxKind::Comma,
                Some(SyntaxKind::ParenClose),
                NAME_FIRST,
                "a parameter",
                Self::parse_name,
            );
            self.close_delimiter(SyntaxKind::ParenOpen, open, "parameters started here");
        } else {
            self.error_with(
                DiagnosticKind::UnexpectedToken,
                "expected `(` after the function name",
            );
        }
        self.finish_node();

        if self.at(SyntaxKind::BraceOpen) {
            self.parse_block(SyntaxKind::Body);
        } else if self.eat(SyntaxKind::Equals) {
            self.start_node(SyntaxKind::Body);
            self.parse_expr_or_error("after `=`");
            self.finish_node();
        } else {
            self.error_with(DiagnosticKind::ExpectedBody, "after the parameters");
        }

        self.finish_node();
    }

    /// `node name(prop, prop type) { key: value, if ... }`
    fn parse_node_decl(&mut self) {
        self.start_node(SyntaxKind::NodeDecl);
        self.bump();
        self.parse_name_or_error("after `node`");

        if self.at(SyntaxKind::ParenOpen) {
            let open = self.open_delimiter(SyntaxKind::ParenOpen);
            self.parse_separated(
                SyntaxKind::Comma,
                Some(SyntaxKind::ParenClose),
                NAME_FIRST,
                "a property",
                Self::parse_prop,
            );
            self.close_delimiter(SyntaxKind::ParenOpen, open, "properties started here");
        } else {
            self.error_with(
                DiagnosticKind::UnexpectedToken,
                "expected `(` after the node name",
            );
        }

        if self.at(SyntaxKind::BraceOpen) {
            self.start_node(SyntaxKind::Body);
            let open = self.open_delimiter(SyntaxKind::BraceOpen);
            self.parse_separated(
                SyntaxKind::Comma,
                Some(SyntaxKind::BraceClose),
                NODE_ITEM_FIRST,
                "a node body item",
                Self::parse_node_item,
            );
            self.close_delimiter(SyntaxKind::BraceOpen, open, "node body started here");
            self.finish_node();
        }

        self.finish_node();
    }

    /// `name` or `name type`, the type on the same line.
    fn parse_prop(&mut self) {
        self.start_node(SyntaxKind::Prop);
        self.parse_name();
        if self.at_any(NAME_FIRST) && !self.at_line_break() {
            self.parse_name_or_error("as the property type");
        }
        self.finish_node();
    }

    fn parse_node_item(&mut self) {
        if self.at(SyntaxKind::KwIf) {
            self.parse_if();
            return;
        }

        let start = self.span_here().start();
        let kind = self.parse_expr();
        if kind.is_some_and(|k| k != SyntaxKind::Pair) {
            let end = self.last_non_trivia_end().unwrap_or(start);
            self.diagnostics
                .report(
                    DiagnosticKind::InvalidNodeBodyItem,
                    TextRange::new(start, end),
                )
                .emit();
        }
    }
}
