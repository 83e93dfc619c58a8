//! Expressions: Pratt loop over primaries, postfix calls and binary operators.
//!
//! Binding powers derive from precedence levels: left power is `2 * prec`,
//! right power `2 * prec + 1`, so equal levels associate to the left.

use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::Restrictions;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    ASN_EXPR_FIRST, CLOSERS, EXPR_FIRST, LINE_START_OPS, STMT_FIRST,
};

const PREC_TRANS: u8 = 12;
const PREC_COMP: u8 = 14;
const PREC_ADD: u8 = 15;
const PREC_MUL: u8 = 16;
const PREC_UNA: u8 = 17;
const PREC_CALL: u8 = 18;

fn infix_binding_power(op: SyntaxKind) -> Option<(u8, u8, SyntaxKind)> {
    let (prec, node) = match op {
        SyntaxKind::EqEq
        | SyntaxKind::NotEq
        | SyntaxKind::Lt
        | SyntaxKind::LtEq
        | SyntaxKind::Gt
        | SyntaxKind::GtEq => (PREC_COMP, SyntaxKind::Comp),
        SyntaxKind::Plus | SyntaxKind::Minus => (PREC_ADD, SyntaxKind::Bina),
        SyntaxKind::Star | SyntaxKind::Slash => (PREC_MUL, SyntaxKind::Bina),
        _ => return None,
    };
    Some((prec * 2, prec * 2 + 1, node))
}

impl Parser<'_> {
    /// Returns the kind of the outermost node built, `None` if nothing was.
    pub(super) fn parse_expr(&mut self) -> Option<SyntaxKind> {
        self.parse_expr_with(Restrictions::NONE)
    }

    pub(super) fn parse_expr_with(&mut self, restrictions: Restrictions) -> Option<SyntaxKind> {
        self.parse_expr_bp(0, restrictions)
    }

    pub(super) fn parse_expr_or_error(&mut self, context: &str) -> Option<SyntaxKind> {
        self.parse_expr_with_or_error(Restrictions::NONE, context)
    }

    pub(super) fn parse_expr_with_or_error(
        &mut self,
        restrictions: Restrictions,
        context: &str,
    ) -> Option<SyntaxKind> {
        if self.at_any(EXPR_FIRST) {
            return self.parse_expr_with(restrictions);
        }
        self.error_expected_expression(context);
        None
    }

    /// Value position: an expression, `if` or `when`.
    pub(super) fn parse_asn_expr_or_error(&mut self, context: &str) -> Option<SyntaxKind> {
        self.parse_asn_expr_with_or_error(Restrictions::NONE, context)
    }

    pub(super) fn parse_asn_expr_with_or_error(
        &mut self,
        restrictions: Restrictions,
        context: &str,
    ) -> Option<SyntaxKind> {
        match self.current() {
            SyntaxKind::KwIf => {
                self.parse_if();
                Some(SyntaxKind::If)
            }
            SyntaxKind::KwWhen => {
                self.parse_when();
                Some(SyntaxKind::When)
            }
            _ => self.parse_expr_with_or_error(restrictions, context),
        }
    }

    /// Reports a missing expression; a stray token that cannot start one is consumed.
    fn error_expected_expression(&mut self, context: &str) {
        let current = self.current();
        if self.eof()
            || CLOSERS.contains(current)
            || STMT_FIRST.contains(current)
            || matches!(current, SyntaxKind::Comma | SyntaxKind::Semicolon)
            || self.at_line_break()
        {
            self.error_with(DiagnosticKind::ExpectedExpression, context);
        } else if current == SyntaxKind::Dollar {
            self.error_skip(DiagnosticKind::LoneDollar);
        } else {
            self.error_skip_with(DiagnosticKind::ExpectedExpression, context);
        }
    }

    fn parse_expr_bp(&mut self, min_bp: u8, restrictions: Restrictions) -> Option<SyntaxKind> {
        if !self.enter_recursion() {
            return None;
        }

        let checkpoint = self.checkpoint();
        let mut lhs = self.parse_primary(restrictions);

        while let Some(kind) = lhs {
            let op = self.current();
            if LINE_START_OPS.contains(op) && self.at_line_break() {
                break;
            }

            lhs = match op {
                SyntaxKind::ParenOpen => {
                    if PREC_CALL * 2 < min_bp {
                        break;
                    }
                    self.parse_call(checkpoint, restrictions);
                    Some(SyntaxKind::Call)
                }
                SyntaxKind::Arrow if kind == SyntaxKind::Name && !restrictions.no_trans => {
                    if PREC_TRANS * 2 < min_bp {
                        break;
                    }
                    self.start_node_at(checkpoint, SyntaxKind::Trans);
                    self.bump();
                    self.parse_name_or_error("after `->`");
                    self.finish_node();
                    Some(SyntaxKind::Trans)
                }
                _ => {
                    let Some((left_bp, right_bp, node)) = infix_binding_power(op) else {
                        break;
                    };
                    if left_bp < min_bp {
                        break;
                    }
                    let op_text = self.current_text();
                    self.start_node_at(checkpoint, node);
                    self.bump();
                    self.parse_operand(right_bp, restrictions, op_text);
                    self.finish_node();
                    Some(node)
                }
            };
        }

        self.exit_recursion();
        lhs
    }

    fn parse_operand(&mut self, min_bp: u8, restrictions: Restrictions, op_text: &str) {
        if self.at_any(EXPR_FIRST) {
            self.parse_expr_bp(min_bp, restrictions);
        } else {
            self.error_expected_expression(&format!("after `{}`", op_text));
        }
    }

    /// `callee(args)` with an optional trailing block on the same line.
    fn parse_call(&mut self, checkpoint: Checkpoint, restrictions: Restrictions) {
        self.start_node_at(checkpoint, SyntaxKind::Call);
        self.parse_args();
        if !restrictions.no_call_body
            && self.at(SyntaxKind::BraceOpen)
            && !self.at_line_break()
        {
            self.parse_block(SyntaxKind::Body);
        }
        self.finish_node();
    }

    pub(super) fn parse_args(&mut self) {
        self.start_node(SyntaxKind::Args);
        let open = self.open_delimiter(SyntaxKind::ParenOpen);
        self.parse_separated(
            SyntaxKind::Comma,
            Some(SyntaxKind::ParenClose),
            EXPR_FIRST,
            "an argument",
            Self::parse_list_expr,
        );
        self.close_delimiter(SyntaxKind::ParenOpen, open, "arguments started here");
        self.finish_node();
    }

    fn parse_list_expr(&mut self) {
        self.parse_expr();
    }

    fn parse_list_asn_expr(&mut self) {
        self.parse_asn_expr_or_error("in the array");
    }

    fn parse_primary(&mut self, restrictions: Restrictions) -> Option<SyntaxKind> {
        let kind = match self.current() {
            SyntaxKind::ParenOpen => {
                self.parse_group();
                SyntaxKind::Group
            }
            SyntaxKind::BracketOpen => {
                self.parse_array();
                SyntaxKind::Array
            }
            SyntaxKind::BraceOpen => {
                self.parse_obj();
                SyntaxKind::Obj
            }
            SyntaxKind::Ident | SyntaxKind::Dot => {
                if self.at_name_key() {
                    self.parse_pair(restrictions);
                    SyntaxKind::Pair
                } else {
                    self.parse_name();
                    SyntaxKind::Name
                }
            }
            SyntaxKind::StrLit => {
                if self.peek_is(SyntaxKind::Colon) {
                    self.parse_pair(restrictions);
                    SyntaxKind::Pair
                } else {
                    self.parse_literal(SyntaxKind::Str)
                }
            }
            SyntaxKind::IntLit => self.parse_literal(SyntaxKind::Int),
            SyntaxKind::BinLit => self.parse_literal(SyntaxKind::Bin),
            SyntaxKind::HexLit => self.parse_literal(SyntaxKind::Hex),
            SyntaxKind::FloatLit => self.parse_literal(SyntaxKind::Float),
            SyntaxKind::KwNull => self.parse_literal(SyntaxKind::Null),
            SyntaxKind::KwTrue => self.parse_literal(SyntaxKind::True),
            SyntaxKind::KwFalse => self.parse_literal(SyntaxKind::False),
            SyntaxKind::FStrOpen | SyntaxKind::FStrTripleOpen | SyntaxKind::FTickOpen => {
                let checkpoint = self.checkpoint();
                self.parse_fstr();
                if self.at(SyntaxKind::Colon) {
                    self.start_node_at(checkpoint, SyntaxKind::Pair);
                    self.bump();
                    self.parse_asn_expr_with_or_error(restrictions, "after `:`");
                    self.finish_node();
                    SyntaxKind::Pair
                } else {
                    SyntaxKind::FStr
                }
            }
            SyntaxKind::MStrFence => {
                self.parse_mstr();
                SyntaxKind::MStr
            }
            SyntaxKind::Bang | SyntaxKind::Minus | SyntaxKind::Plus => {
                self.start_node(SyntaxKind::Una);
                let op_text = self.current_text();
                self.bump();
                self.parse_operand(PREC_UNA * 2, restrictions, op_text);
                self.finish_node();
                SyntaxKind::Una
            }
            _ => {
                self.error(DiagnosticKind::ExpectedExpression);
                return None;
            }
        };
        Some(kind)
    }

    fn parse_literal(&mut self, node: SyntaxKind) -> SyntaxKind {
        self.start_node(node);
        self.bump();
        self.finish_node();
        node
    }

    /// `name`, `.name`, `a.b.c`
    pub(super) fn parse_name(&mut self) {
        self.start_node(SyntaxKind::Name);
        self.bump_name_tokens();
        self.finish_node();
    }

    fn bump_name_tokens(&mut self) {
        self.eat(SyntaxKind::Dot);
        if !self.eat(SyntaxKind::Ident) {
            self.error_with(DiagnosticKind::ExpectedName, "after `.`");
            return;
        }
        while self.at(SyntaxKind::Dot)
            && !self.at_line_break()
            && self.peek_is(SyntaxKind::Ident)
        {
            self.bump();
            self.expect(SyntaxKind::Ident, "a name after `.`");
        }
    }

    /// LL(k): a (dotted) name directly followed by `:`.
    fn at_name_key(&mut self) -> bool {
        let mut n = 0;
        if self.nth(n) == SyntaxKind::Dot {
            n += 1;
        }
        if self.nth(n) != SyntaxKind::Ident {
            return false;
        }
        n += 1;
        while self.nth(n) == SyntaxKind::Dot && self.nth(n + 1) == SyntaxKind::Ident {
            n += 2;
        }
        self.nth(n) == SyntaxKind::Colon
    }

    /// `key: value` where the key is a name or a plain string.
    fn parse_pair(&mut self, restrictions: Restrictions) {
        self.start_node(SyntaxKind::Pair);

        self.start_node(SyntaxKind::Key);
        if !self.eat(SyntaxKind::StrLit) {
            self.bump_name_tokens();
        }
        self.finish_node();

        self.expect(SyntaxKind::Colon, "`:` after the key");
        self.parse_asn_expr_with_or_error(restrictions, "after `:`");

        self.finish_node();
    }

    /// `( expr )`
    fn parse_group(&mut self) {
        self.start_node(SyntaxKind::Group);
        let open = self.open_delimiter(SyntaxKind::ParenOpen);
        self.parse_expr_or_error("inside `( )`");
        if !self.at_any(CLOSERS) && !self.should_stop() {
            self.error_recover(DiagnosticKind::UnexpectedToken, "expected `)`", CLOSERS);
        }
        self.close_delimiter(SyntaxKind::ParenOpen, open, "group started here");
        self.finish_node();
    }

    /// `[ value, ... ]`
    fn parse_array(&mut self) {
        self.start_node(SyntaxKind::Array);
        let open = self.open_delimiter(SyntaxKind::BracketOpen);
        self.parse_separated(
            SyntaxKind::Comma,
            Some(SyntaxKind::BracketClose),
            ASN_EXPR_FIRST,
            "an element",
            Self::parse_list_asn_expr,
        );
        self.close_delimiter(SyntaxKind::BracketOpen, open, "array started here");
        self.finish_node();
    }

    /// `{ stmt, ... }`
    fn parse_obj(&mut self) {
        self.start_node(SyntaxKind::Obj);
        let open = self.open_delimiter(SyntaxKind::BraceOpen);
        self.parse_separated(
            SyntaxKind::Comma,
            Some(SyntaxKind::BraceClose),
            STMT_FIRST,
            "an entry",
            Self::parse_stmt,
        );
        self.close_delimiter(SyntaxKind::BraceOpen, open, "object started here");
        self.finish_node();
    }
}
