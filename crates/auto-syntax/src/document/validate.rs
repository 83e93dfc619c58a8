//! Semantic checks that the grammar accepts but the language rejects.
//!
//! - `if`/`for` conditions must be something that can evaluate to a boolean.
//! - `when` matches an expression; `if`/`when` values are not allowed there.
//! - A `when` without arms is suspicious but legal.

use super::Document;
use super::visitor::{Visitor, walk_for, walk_if, walk_when};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::SyntaxNode;
use crate::parser::ast::{Code, Expr, For, If, Value, When};

impl Document<'_> {
    pub(super) fn validate(&mut self) {
        self.semantic_errors = validate_code(&self.root);
        tracing::debug!(
            errors = self.semantic_errors.error_count(),
            warnings = self.semantic_errors.warning_count(),
            "validation finished"
        );
    }
}

pub fn validate_code(code: &Code) -> Diagnostics {
    let mut validator = Validator {
        diag: Diagnostics::new(),
    };
    validator.visit_code(code);
    validator.diag
}

struct Validator {
    diag: Diagnostics,
}

impl Visitor for Validator {
    fn visit_if(&mut self, node: &If) {
        for cond in node.conds() {
            self.check_condition(&cond);
        }
        walk_if(self, node);
    }

    fn visit_for(&mut self, node: &For) {
        if let Some(cond) = node.cond() {
            self.check_condition(&cond);
        }
        walk_for(self, node);
    }

    fn visit_when(&mut self, node: &When) {
        match node.check() {
            Some(Value::If(n)) => self.report_check(n.as_cst(), "`if`"),
            Some(Value::When(n)) => self.report_check(n.as_cst(), "`when`"),
            _ => {}
        }

        if node.body().is_some() && node.cases().is_empty() && node.else_arm().is_none() {
            let range = node
                .as_cst()
                .first_token()
                .map_or(node.as_cst().text_range(), |t| t.text_range());
            self.diag.report(DiagnosticKind::EmptyWhen, range).emit();
        }

        walk_when(self, node);
    }
}

impl Validator {
    fn check_condition(&mut self, cond: &Expr) {
        let Some(what) = non_condition(cond) else {
            return;
        };
        self.diag
            .report(DiagnosticKind::InvalidCondition, cond.as_cst().text_range())
            .message(what)
            .emit();
    }

    fn report_check(&mut self, node: &SyntaxNode, what: &str) {
        self.diag
            .report(DiagnosticKind::InvalidCheck, node.text_range())
            .message(what)
            .emit();
    }
}

/// Describes expressions that cannot stand as a condition; `None` for the ones that can.
fn non_condition(expr: &Expr) -> Option<&'static str> {
    match expr {
        Expr::Group(_)
        | Expr::Una(_)
        | Expr::Bina(_)
        | Expr::Comp(_)
        | Expr::Call(_)
        | Expr::True(_)
        | Expr::False(_)
        | Expr::Name(_) => None,
        Expr::Str(_) | Expr::FStr(_) | Expr::MStr(_) => Some("a string"),
        Expr::Int(_) | Expr::Bin(_) | Expr::Hex(_) | Expr::Float(_) => Some("a number"),
        Expr::Null(_) => Some("`null`"),
        Expr::Obj(_) => Some("an object"),
        Expr::Array(_) => Some("an array"),
        Expr::Pair(_) => Some("a pair"),
        Expr::Trans(_) => Some("a transition"),
    }
}
