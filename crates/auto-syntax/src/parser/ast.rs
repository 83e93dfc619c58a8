//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Code, Code);
ast_node!(Mod, Mod);
ast_node!(Use, Use);
ast_node!(Subs, Subs);
ast_node!(Import, Import);
ast_node!(Var, Var);
ast_node!(Fn, Fn);
ast_node!(Params, Params);
ast_node!(Body, Body);
ast_node!(Asn, Asn);
ast_node!(If, If);
ast_node!(Then, Then);
ast_node!(Else, Else);
ast_node!(For, For);
ast_node!(In, In);
ast_node!(When, When);
ast_node!(Case, Case);
ast_node!(Ui, Ui);
ast_node!(Style, Style);
ast_node!(NodeDecl, NodeDecl);
ast_node!(Prop, Prop);
ast_node!(Group, Group);
ast_node!(Una, Una);
ast_node!(Bina, Bina);
ast_node!(Comp, Comp);
ast_node!(Call, Call);
ast_node!(Args, Args);
ast_node!(Obj, Obj);
ast_node!(Pair, Pair);
ast_node!(Key, Key);
ast_node!(Trans, Trans);
ast_node!(Name, Name);
ast_node!(Array, Array);
ast_node!(Int, Int);
ast_node!(Bin, Bin);
ast_node!(Hex, Hex);
ast_node!(Float, Float);
ast_node!(Str, Str);
ast_node!(FStr, FStr);
ast_node!(MStr, MStr);
ast_node!(Interpol, Interpol);
ast_node!(Null, Null);
ast_node!(True, True);
ast_node!(False, False);

/// Statement: anything that can appear in `code`, a block or an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    Mod(Mod),
    Use(Use),
    Import(Import),
    Var(Var),
    Fn(Fn),
    Node(NodeDecl),
    Asn(Asn),
    If(If),
    For(For),
    When(When),
    Ui(Ui),
    Style(Style),
    Expr(Expr),
}

/// Expression: the `expr` supertype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Group(Group),
    Name(Name),
    Una(Una),
    Bina(Bina),
    Comp(Comp),
    Call(Call),
    Pair(Pair),
    Obj(Obj),
    Array(Array),
    Trans(Trans),
    Int(Int),
    Bin(Bin),
    Hex(Hex),
    Float(Float),
    FStr(FStr),
    Str(Str),
    MStr(MStr),
    Null(Null),
    True(True),
    False(False),
}

/// Right-hand side of `=`, `:` and `in`: an expression or an `if`/`when` used as a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Expr(Expr),
    If(If),
    When(When),
}

/// Key of a pair: `key` aliases names and plain strings, f-strings stay as they are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PairKey {
    Key(Key),
    FStr(FStr),
}

/// One piece of a template string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplatePart {
    Text(SyntaxToken),
    Interpol(Interpol),
}

impl Stmt {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Mod => Mod::cast(node).map(Stmt::Mod),
            SyntaxKind::Use => Use::cast(node).map(Stmt::Use),
            SyntaxKind::Import => Import::cast(node).map(Stmt::Import),
            SyntaxKind::Var => Var::cast(node).map(Stmt::Var),
            SyntaxKind::Fn => Fn::cast(node).map(Stmt::Fn),
            SyntaxKind::NodeDecl => NodeDecl::cast(node).map(Stmt::Node),
            SyntaxKind::Asn => Asn::cast(node).map(Stmt::Asn),
            SyntaxKind::If => If::cast(node).map(Stmt::If),
            SyntaxKind::For => For::cast(node).map(Stmt::For),
            SyntaxKind::When => When::cast(node).map(Stmt::When),
            SyntaxKind::Ui => Ui::cast(node).map(Stmt::Ui),
            SyntaxKind::Style => Style::cast(node).map(Stmt::Style),
            _ => Expr::cast(node).map(Stmt::Expr),
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Stmt::Mod(n) => n.as_cst(),
            Stmt::Use(n) => n.as_cst(),
            Stmt::Import(n) => n.as_cst(),
            Stmt::Var(n) => n.as_cst(),
            Stmt::Fn(n) => n.as_cst(),
            Stmt::Node(n) => n.as_cst(),
            Stmt::Asn(n) => n.as_cst(),
            Stmt::If(n) => n.as_cst(),
            Stmt::For(n) => n.as_cst(),
            Stmt::When(n) => n.as_cst(),
            Stmt::Ui(n) => n.as_cst(),
            Stmt::Style(n) => n.as_cst(),
            Stmt::Expr(n) => n.as_cst(),
        }
    }
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Group => Group::cast(node).map(Expr::Group),
            SyntaxKind::Name => Name::cast(node).map(Expr::Name),
            SyntaxKind::Una => Una::cast(node).map(Expr::Una),
            SyntaxKind::Bina => Bina::cast(node).map(Expr::Bina),
            SyntaxKind::Comp => Comp::cast(node).map(Expr::Comp),
            SyntaxKind::Call => Call::cast(node).map(Expr::Call),
            SyntaxKind::Pair => Pair::cast(node).map(Expr::Pair),
            SyntaxKind::Obj => Obj::cast(node).map(Expr::Obj),
            SyntaxKind::Array => Array::cast(node).map(Expr::Array),
            SyntaxKind::Trans => Trans::cast(node).map(Expr::Trans),
            SyntaxKind::Int => Int::cast(node).map(Expr::Int),
            SyntaxKind::Bin => Bin::cast(node).map(Expr::Bin),
            SyntaxKind::Hex => Hex::cast(node).map(Expr::Hex),
            SyntaxKind::Float => Float::cast(node).map(Expr::Float),
            SyntaxKind::FStr => FStr::cast(node).map(Expr::FStr),
            SyntaxKind::Str => Str::cast(node).map(Expr::Str),
            SyntaxKind::MStr => MStr::cast(node).map(Expr::MStr),
            SyntaxKind::Null => Null::cast(node).map(Expr::Null),
            SyntaxKind::True => True::cast(node).map(Expr::True),
            SyntaxKind::False => False::cast(node).map(Expr::False),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Group(n) => n.as_cst(),
            Expr::Name(n) => n.as_cst(),
            Expr::Una(n) => n.as_cst(),
            Expr::Bina(n) => n.as_cst(),
            Expr::Comp(n) => n.as_cst(),
            Expr::Call(n) => n.as_cst(),
            Expr::Pair(n) => n.as_cst(),
            Expr::Obj(n) => n.as_cst(),
            Expr::Array(n) => n.as_cst(),
            Expr::Trans(n) => n.as_cst(),
            Expr::Int(n) => n.as_cst(),
            Expr::Bin(n) => n.as_cst(),
            Expr::Hex(n) => n.as_cst(),
            Expr::Float(n) => n.as_cst(),
            Expr::FStr(n) => n.as_cst(),
            Expr::Str(n) => n.as_cst(),
            Expr::MStr(n) => n.as_cst(),
            Expr::Null(n) => n.as_cst(),
            Expr::True(n) => n.as_cst(),
            Expr::False(n) => n.as_cst(),
        }
    }

    /// Whether this is a number (`num` supertype).
    pub fn is_num(&self) -> bool {
        matches!(
            self,
            Expr::Int(_) | Expr::Bin(_) | Expr::Hex(_) | Expr::Float(_)
        )
    }
}

impl Value {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::If => If::cast(node).map(Value::If),
            SyntaxKind::When => When::cast(node).map(Value::When),
            _ => Expr::cast(node).map(Value::Expr),
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Value::Expr(n) => n.as_cst(),
            Value::If(n) => n.as_cst(),
            Value::When(n) => n.as_cst(),
        }
    }
}

fn child<N>(node: &SyntaxNode, cast: fn(SyntaxNode) -> Option<N>) -> Option<N> {
    node.children().find_map(cast)
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

/// First node after the first token of `kind`, e.g. the statement after `->`.
fn node_after(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    node.children_with_tokens()
        .skip_while(|it| it.as_token().is_none_or(|t| t.kind() != kind))
        .find_map(|it| it.into_node())
}

fn template_parts(node: &SyntaxNode) -> Vec<TemplatePart> {
    let mut parts = Vec::new();
    for element in node.children_with_tokens() {
        match element {
            rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::StrPart => {
                parts.push(TemplatePart::Text(t));
            }
            rowan::NodeOrToken::Node(n) => match n.kind() {
                SyntaxKind::SPart => {
                    if let Some(t) = token(&n, SyntaxKind::StrPart) {
                        parts.push(TemplatePart::Text(t));
                    }
                }
                SyntaxKind::Interpol => {
                    if let Some(i) = Interpol::cast(n) {
                        parts.push(TemplatePart::Interpol(i));
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }
    parts
}

impl Code {
    pub fn stmts(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }
}

impl Mod {
    pub fn name(&self) -> Option<Name> {
        child(&self.0, Name::cast)
    }

    pub fn body(&self) -> Option<Body> {
        child(&self.0, Body::cast)
    }
}

impl Use {
    pub fn name(&self) -> Option<Name> {
        child(&self.0, Name::cast)
    }

    pub fn subs(&self) -> Option<Subs> {
        child(&self.0, Subs::cast)
    }
}

impl Subs {
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.0.children().filter_map(Name::cast)
    }
}

impl Import {
    pub fn name(&self) -> Option<Name> {
        child(&self.0, Name::cast)
    }

    pub fn args(&self) -> Option<Args> {
        child(&self.0, Args::cast)
    }
}

impl Var {
    pub fn name(&self) -> Option<Name> {
        child(&self.0, Name::cast)
    }

    pub fn value(&self) -> Option<Value> {
        node_after(&self.0, SyntaxKind::Equals).and_then(Value::cast)
    }
}

impl Fn {
    pub fn name(&self) -> Option<Name> {
        child(&self.0, Name::cast)
    }

    pub fn params(&self) -> Option<Params> {
        child(&self.0, Params::cast)
    }

    pub fn body(&self) -> Option<Body> {
        child(&self.0, Body::cast)
    }

    /// `fn f(x) = expr`
    pub fn is_expr_bodied(&self) -> bool {
        token(&self.0, SyntaxKind::Equals).is_some()
    }
}

impl Params {
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.0.children().filter_map(Name::cast)
    }
}

impl Body {
    pub fn stmts(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }

    /// Arms of a `when` body.
    pub fn cases(&self) -> impl Iterator<Item = Case> + '_ {
        self.0.children().filter_map(Case::cast)
    }
}

impl Then {
    pub fn stmts(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }
}

impl Else {
    pub fn stmts(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }

    pub fn body(&self) -> Option<Body> {
        child(&self.0, Body::cast)
    }

    /// `else -> stmt` inside a `when`.
    pub fn target(&self) -> Option<Stmt> {
        node_after(&self.0, SyntaxKind::Arrow).and_then(Stmt::cast)
    }
}

impl Asn {
    pub fn name(&self) -> Option<Name> {
        child(&self.0, Name::cast)
    }

    pub fn value(&self) -> Option<Value> {
        node_after(&self.0, SyntaxKind::Equals).and_then(Value::cast)
    }
}

impl If {
    /// Conditions of the `if` and every `else if`, in source order.
    pub fn conds(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }

    pub fn thens(&self) -> impl Iterator<Item = Then> + '_ {
        self.0.children().filter_map(Then::cast)
    }

    pub fn else_branch(&self) -> Option<Else> {
        child(&self.0, Else::cast)
    }
}

impl For {
    pub fn inits(&self) -> impl Iterator<Item = Var> + '_ {
        self.0.children().filter_map(Var::cast)
    }

    pub fn cond(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn in_clause(&self) -> Option<In> {
        child(&self.0, In::cast)
    }

    pub fn body(&self) -> Option<Body> {
        child(&self.0, Body::cast)
    }
}

impl In {
    pub fn idx(&self) -> Option<SyntaxToken> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::Idx)
            .and_then(|n| token(&n, SyntaxKind::Ident))
    }

    pub fn name(&self) -> Option<Name> {
        child(&self.0, Name::cast)
    }

    pub fn iterable(&self) -> Option<Value> {
        node_after(&self.0, SyntaxKind::KwIn).and_then(Value::cast)
    }
}

impl When {
    pub fn inits(&self) -> impl Iterator<Item = Var> + '_ {
        self.0.children().filter_map(Var::cast)
    }

    pub fn check(&self) -> Option<Value> {
        self.0
            .children()
            .filter(|n| n.kind() != SyntaxKind::Var)
            .find_map(Value::cast)
    }

    pub fn body(&self) -> Option<Body> {
        child(&self.0, Body::cast)
    }

    pub fn cases(&self) -> Vec<Case> {
        self.body().map(|b| b.cases().collect()).unwrap_or_default()
    }

    pub fn else_arm(&self) -> Option<Else> {
        self.body().and_then(|b| child(b.as_cst(), Else::cast))
    }
}

impl Case {
    pub fn pattern(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn body(&self) -> Option<Body> {
        child(&self.0, Body::cast)
    }

    /// `is pattern -> stmt`
    pub fn target(&self) -> Option<Stmt> {
        node_after(&self.0, SyntaxKind::Arrow).and_then(Stmt::cast)
    }
}

impl Ui {
    pub fn body(&self) -> Option<Body> {
        child(&self.0, Body::cast)
    }
}

impl Style {
    pub fn stmts(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }
}

impl NodeDecl {
    pub fn name(&self) -> Option<Name> {
        child(&self.0, Name::cast)
    }

    pub fn props(&self) -> impl Iterator<Item = Prop> + '_ {
        self.0.children().filter_map(Prop::cast)
    }

    pub fn body(&self) -> Option<Body> {
        child(&self.0, Body::cast)
    }
}

impl Prop {
    pub fn name(&self) -> Option<Name> {
        child(&self.0, Name::cast)
    }

    pub fn type_name(&self) -> Option<Name> {
        self.0.children().filter_map(Name::cast).nth(1)
    }
}

impl Group {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

impl Una {
    pub fn op(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| matches!(t.kind(), SyntaxKind::Bang | SyntaxKind::Minus | SyntaxKind::Plus))
    }

    pub fn operand(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }
}

macro_rules! binary_accessors {
    ($name:ident) => {
        impl $name {
            pub fn lhs(&self) -> Option<Expr> {
                self.0.children().filter_map(Expr::cast).next()
            }

            pub fn rhs(&self) -> Option<Expr> {
                self.0.children().filter_map(Expr::cast).nth(1)
            }

            pub fn op(&self) -> Option<SyntaxToken> {
                self.0
                    .children_with_tokens()
                    .filter_map(|it| it.into_token())
                    .find(|t| !t.kind().is_trivia() && !t.kind().is_error())
            }
        }
    };
}

binary_accessors!(Bina);
binary_accessors!(Comp);

impl Call {
    pub fn callee(&self) -> Option<Expr> {
        child(&self.0, Expr::cast)
    }

    pub fn args(&self) -> Option<Args> {
        child(&self.0, Args::cast)
    }

    /// Trailing block: `button("ok") { ... }`
    pub fn body(&self) -> Option<Body> {
        child(&self.0, Body::cast)
    }
}

impl Args {
    pub fn exprs(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl Obj {
    pub fn stmts(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }
}

impl Pair {
    pub fn key(&self) -> Option<PairKey> {
        self.0.children().find_map(|n| match n.kind() {
            SyntaxKind::Key => Key::cast(n).map(PairKey::Key),
            SyntaxKind::FStr => FStr::cast(n).map(PairKey::FStr),
            _ => None,
        })
    }

    pub fn value(&self) -> Option<Value> {
        node_after(&self.0, SyntaxKind::Colon).and_then(Value::cast)
    }
}

impl Key {
    /// Key text; quotes of a string key are stripped.
    pub fn text(&self) -> String {
        if let Some(t) = token(&self.0, SyntaxKind::StrLit) {
            let s = t.text();
            return s[1..s.len() - 1].to_string();
        }
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| matches!(t.kind(), SyntaxKind::Ident | SyntaxKind::Dot))
            .map(|t| t.text().to_string())
            .collect()
    }
}

impl Trans {
    pub fn src(&self) -> Option<Name> {
        self.0.children().filter_map(Name::cast).next()
    }

    pub fn dst(&self) -> Option<Name> {
        self.0.children().filter_map(Name::cast).nth(1)
    }
}

impl Name {
    /// Identifier segments: `.a.b` yields `a`, `b`.
    pub fn segments(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind() == SyntaxKind::Ident)
    }

    /// Leading `.` marks a name relative to the enclosing scope.
    pub fn is_relative(&self) -> bool {
        self.0
            .first_token()
            .is_some_and(|t| t.kind() == SyntaxKind::Dot)
    }

    pub fn text(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| matches!(t.kind(), SyntaxKind::Ident | SyntaxKind::Dot))
            .map(|t| t.text().to_string())
            .collect()
    }
}

impl Array {
    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.0.children().filter_map(Value::cast)
    }
}

fn literal_digits(node: &SyntaxNode, kind: SyntaxKind, prefix: usize) -> Option<String> {
    let t = token(node, kind)?;
    Some(t.text()[prefix..].replace('_', ""))
}

impl Int {
    pub fn value(&self) -> Option<u64> {
        literal_digits(&self.0, SyntaxKind::IntLit, 0)?.parse().ok()
    }
}

impl Bin {
    pub fn value(&self) -> Option<u64> {
        u64::from_str_radix(&literal_digits(&self.0, SyntaxKind::BinLit, 2)?, 2).ok()
    }
}

impl Hex {
    pub fn value(&self) -> Option<u64> {
        u64::from_str_radix(&literal_digits(&self.0, SyntaxKind::HexLit, 2)?, 16).ok()
    }
}

impl Float {
    pub fn value(&self) -> Option<f64> {
        token(&self.0, SyntaxKind::FloatLit)?.text().parse().ok()
    }
}

impl Str {
    /// Contents between the quotes, escapes left as written.
    pub fn raw_value(&self) -> Option<String> {
        let t = token(&self.0, SyntaxKind::StrLit)?;
        let s = t.text();
        Some(s[1..s.len() - 1].to_string())
    }
}

impl FStr {
    pub fn parts(&self) -> Vec<TemplatePart> {
        template_parts(&self.0)
    }
}

impl MStr {
    pub fn parts(&self) -> Vec<TemplatePart> {
        template_parts(&self.0)
    }
}

impl Interpol {
    /// `$name`
    pub fn name(&self) -> Option<Name> {
        if token(&self.0, SyntaxKind::BraceOpen).is_some() {
            return None;
        }
        child(&self.0, Name::cast)
    }

    /// `${ value }`
    pub fn value(&self) -> Option<Value> {
        token(&self.0, SyntaxKind::BraceOpen)?;
        child(&self.0, Value::cast)
    }
}
