//! AST Visitor pattern.
//!
//! Override `visit_*` methods to add logic. Call the matching `walk_*`
//! within the override to continue recursion, or omit it to stop.
//!
//! ```ignore
//! impl Visitor for MyPass {
//!     fn visit_if(&mut self, node: &If) {
//!         // pre-order
//!         walk_if(self, node);
//!     }
//! }
//! ```

use crate::parser::ast::{
    Code, Else, Expr, For, If, NodeDecl, Stmt, TemplatePart, Value, When,
};

pub trait Visitor: Sized {
    fn visit_code(&mut self, code: &Code) {
        walk_code(self, code);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_value(&mut self, value: &Value) {
        walk_value(self, value);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_if(&mut self, node: &If) {
        walk_if(self, node);
    }

    fn visit_for(&mut self, node: &For) {
        walk_for(self, node);
    }

    fn visit_when(&mut self, node: &When) {
        walk_when(self, node);
    }

    fn visit_node_decl(&mut self, node: &NodeDecl) {
        walk_node_decl(self, node);
    }
}

fn visit_stmts<V: Visitor>(visitor: &mut V, stmts: impl Iterator<Item = Stmt>) {
    for stmt in stmts {
        visitor.visit_stmt(&stmt);
    }
}

pub fn walk_code<V: Visitor>(visitor: &mut V, code: &Code) {
    visit_stmts(visitor, code.stmts());
}

pub fn walk_stmt<V: Visitor>(visitor: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Mod(n) => {
            if let Some(body) = n.body() {
                visit_stmts(visitor, body.stmts());
            }
        }
        Stmt::Use(_) => {}
        Stmt::Import(n) => {
            if let Some(args) = n.args() {
                for expr in args.exprs() {
                    visitor.visit_expr(&expr);
                }
            }
        }
        Stmt::Var(n) => {
            if let Some(value) = n.value() {
                visitor.visit_value(&value);
            }
        }
        Stmt::Fn(n) => {
            if let Some(body) = n.body() {
                visit_stmts(visitor, body.stmts());
            }
        }
        Stmt::Node(n) => visitor.visit_node_decl(n),
        Stmt::Asn(n) => {
            if let Some(value) = n.value() {
                visitor.visit_value(&value);
            }
        }
        Stmt::If(n) => visitor.visit_if(n),
        Stmt::For(n) => visitor.visit_for(n),
        Stmt::When(n) => visitor.visit_when(n),
        Stmt::Ui(n) => {
            if let Some(body) = n.body() {
                visit_stmts(visitor, body.stmts());
            }
        }
        Stmt::Style(n) => visit_stmts(visitor, n.stmts()),
        Stmt::Expr(e) => visitor.visit_expr(e),
    }
}

pub fn walk_value<V: Visitor>(visitor: &mut V, value: &Value) {
    match value {
        Value::Expr(e) => visitor.visit_expr(e),
        Value::If(n) => visitor.visit_if(n),
        Value::When(n) => visitor.visit_when(n),
    }
}

pub fn walk_expr<V: Visitor>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Group(n) => {
            if let Some(inner) = n.expr() {
                visitor.visit_expr(&inner);
            }
        }
        Expr::Una(n) => {
            if let Some(operand) = n.operand() {
                visitor.visit_expr(&operand);
            }
        }
        Expr::Bina(n) => {
            for side in [n.lhs(), n.rhs()].into_iter().flatten() {
                visitor.visit_expr(&side);
            }
        }
        Expr::Comp(n) => {
            for side in [n.lhs(), n.rhs()].into_iter().flatten() {
                visitor.visit_expr(&side);
            }
        }
        Expr::Call(n) => {
            if let Some(callee) = n.callee() {
                visitor.visit_expr(&callee);
            }
            if let Some(args) = n.args() {
                for arg in args.exprs() {
                    visitor.visit_expr(&arg);
                }
            }
            if let Some(body) = n.body() {
                visit_stmts(visitor, body.stmts());
            }
        }
        Expr::Pair(n) => {
            if let Some(value) = n.value() {
                visitor.visit_value(&value);
            }
        }
        Expr::Obj(n) => visit_stmts(visitor, n.stmts()),
        Expr::Array(n) => {
            for value in n.values() {
                visitor.visit_value(&value);
            }
        }
        Expr::FStr(n) => walk_template(visitor, n.parts()),
        Expr::MStr(n) => walk_template(visitor, n.parts()),
        Expr::Name(_)
        | Expr::Trans(_)
        | Expr::Int(_)
        | Expr::Bin(_)
        | Expr::Hex(_)
        | Expr::Float(_)
        | Expr::Str(_)
        | Expr::Null(_)
        | Expr::True(_)
        | Expr::False(_) => {}
    }
}

fn walk_template<V: Visitor>(visitor: &mut V, parts: Vec<TemplatePart>) {
    for part in parts {
        if let TemplatePart::Interpol(interpol) = part
            && let Some(value) = interpol.value()
        {
            visitor.visit_value(&value);
        }
    }
}

pub fn walk_if<V: Visitor>(visitor: &mut V, node: &If) {
    for cond in node.conds() {
        visitor.visit_expr(&cond);
    }
    for then in node.thens() {
        visit_stmts(visitor, then.stmts());
    }
    if let Some(else_branch) = node.else_branch() {
        visit_stmts(visitor, else_branch.stmts());
    }
}

pub fn walk_for<V: Visitor>(visitor: &mut V, node: &For) {
    for init in node.inits() {
        visitor.visit_stmt(&Stmt::Var(init));
    }
    if let Some(cond) = node.cond() {
        visitor.visit_expr(&cond);
    }
    if let Some(iterable) = node.in_clause().and_then(|c| c.iterable()) {
        visitor.visit_value(&iterable);
    }
    if let Some(body) = node.body() {
        visit_stmts(visitor, body.stmts());
    }
}

pub fn walk_when<V: Visitor>(visitor: &mut V, node: &When) {
    for init in node.inits() {
        visitor.visit_stmt(&Stmt::Var(init));
    }
    if let Some(check) = node.check() {
        visitor.visit_value(&check);
    }
    for case in node.cases() {
        if let Some(pattern) = case.pattern() {
            visitor.visit_expr(&pattern);
        }
        if let Some(body) = case.body() {
            visit_stmts(visitor, body.stmts());
        }
        if let Some(target) = case.target() {
            visitor.visit_stmt(&target);
        }
    }
    if let Some(arm) = node.else_arm() {
        walk_else_arm(visitor, &arm);
    }
}

fn walk_else_arm<V: Visitor>(visitor: &mut V, arm: &Else) {
    if let Some(body) = arm.body() {
        visit_stmts(visitor, body.stmts());
    }
    if let Some(target) = arm.target() {
        visitor.visit_stmt(&target);
    }
}

pub fn walk_node_decl<V: Visitor>(visitor: &mut V, node: &NodeDecl) {
    if let Some(body) = node.body() {
        visit_stmts(visitor, body.stmts());
    }
}
