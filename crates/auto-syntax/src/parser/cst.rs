//! Kinds of every token and node in an Auto syntax tree.
//!
//! The token half carries the logos patterns. Template-string pieces and all
//! node kinds have no pattern: the string scanner in `lexer` and the parser
//! produce them.

use logos::Logos;
use rowan::Language;

/// Tokens, then `Error`, then nodes, then the `__LAST` bound.
/// Discriminants are contiguous from zero.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token(".")]
    Dot,

    /// Transition `a -> b` and `when` case arrow.
    #[token("->")]
    Arrow,

    #[token("==")]
    EqEq,

    #[token("!=")]
    NotEq,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("=")]
    Equals,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("!")]
    Bang,

    /// Interpolation marker. Outside templates a lone `$` is a syntax error.
    /// `$x` is longer and lexes as `Ident`.
    #[token("$", priority = 5)]
    Dollar,

    #[token("mod")]
    KwMod,

    #[token("use")]
    KwUse,

    #[token("import")]
    KwImport,

    #[token("var")]
    KwVar,

    #[token("fn")]
    KwFn,

    #[token("node")]
    KwNode,

    #[token("if")]
    KwIf,

    #[token("else")]
    KwElse,

    #[token("for")]
    KwFor,

    #[token("in")]
    KwIn,

    #[token("when")]
    KwWhen,

    #[token("is")]
    KwIs,

    #[token("ui")]
    KwUi,

    #[token("style")]
    KwStyle,

    #[token("null")]
    KwNull,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    /// Identifier. Defined after keywords so they take precedence on exact match.
    #[regex(r"[$_a-zA-Z][$_a-zA-Z0-9]*")]
    Ident,

    /// Leading underscores would collide with identifiers, so a digit comes first.
    #[regex(r"[0-9][0-9_]*")]
    IntLit,

    #[regex(r"0b[01_]+")]
    BinLit,

    #[regex(r"0x[0-9a-fA-F_]+")]
    HexLit,

    #[regex(r"(0|[1-9][0-9]*)\.[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"(0|[1-9][0-9]*)[eE][+-]?[0-9]+")]
    FloatLit,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    StrLit,

    #[token("f\"")]
    FStrOpen,

    #[token("f\"\"\"")]
    FStrTripleOpen,

    #[token("f`")]
    FTickOpen,

    /// Opens and closes a multi-line string.
    #[token("```")]
    MStrFence,

    /// Closes `f"`
    DoubleQuote,
    /// Closes `f"""`
    TripleQuote,
    /// Closes ``f` ``
    Backtick,
    /// Literal run inside a template string
    StrPart,

    #[regex(r"[ \t\f\r]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    /// `/* ... */`, not nested. Any run of `*` may precede the closing `/`.
    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // nodes
    Code,
    Mod,
    Use,
    Subs,
    Import,
    Var,
    Fn,
    Params,
    Body,
    Asn,
    If,
    Then,
    Else,
    For,
    In,
    Idx,
    When,
    Case,
    Ui,
    Style,
    NodeDecl,
    Prop,
    Group,
    Una,
    Bina,
    Comp,
    Call,
    Args,
    Obj,
    Pair,
    Key,
    Trans,
    Name,
    Array,
    Int,
    Bin,
    Hex,
    Float,
    Str,
    FStr,
    MStr,
    SPart,
    Interpol,
    Null,
    True,
    False,

    // keep last
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwMod as u16..=KwFalse as u16).contains(&(self as u16))
    }

    /// Token kinds are everything before `Code`; `Error` doubles as a node kind.
    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < Code as u16
    }

    /// Named kinds show up in s-expressions; anonymous tokens only in raw dumps.
    #[inline]
    pub fn is_named(self) -> bool {
        self == Error || ((self as u16) >= Code as u16 && self != __LAST)
    }

    pub fn from_u16(raw: u16) -> Option<SyntaxKind> {
        if raw >= __LAST as u16 {
            return None;
        }
        // SAFETY: bounds checked above, SyntaxKind is repr(u16) with contiguous discriminants
        Some(unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) })
    }

    /// Kind name as exposed by the grammar descriptor, `None` for hidden kinds.
    ///
    /// Hidden kinds are trivia, raw literal tokens wrapped by a named node
    /// (`IntLit` lives inside `int`), and identifier tokens.
    pub fn grammar_name(self) -> Option<&'static str> {
        let name = match self {
            ParenOpen => "(",
            ParenClose => ")",
            BracketOpen => "[",
            BracketClose => "]",
            BraceOpen => "{",
            BraceClose => "}",
            Comma => ",",
            Semicolon => ";",
            Colon => ":",
            Dot => ".",
            Arrow => "->",
            EqEq => "==",
            NotEq => "!=",
            LtEq => "<=",
            GtEq => ">=",
            Lt => "<",
            Gt => ">",
            Equals => "=",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Bang => "!",
            Dollar => "$",
            KwMod => "mod",
            KwUse => "use",
            KwImport => "import",
            KwVar => "var",
            KwFn => "fn",
            KwNode => "node",
            KwIf => "if",
            KwElse => "else",
            KwFor => "for",
            KwIn => "in",
            KwWhen => "when",
            KwIs => "is",
            KwUi => "ui",
            KwStyle => "style",
            FStrOpen => "f\"",
            FStrTripleOpen => "f\"\"\"",
            FTickOpen => "f`",
            MStrFence => "```",
            DoubleQuote => "\"",
            TripleQuote => "\"\"\"",
            Backtick => "`",
            Error => "ERROR",
            Code => "code",
            Mod => "mod",
            Use => "use",
            Subs => "subs",
            Import => "import",
            Var => "var",
            Fn => "fn",
            Params => "params",
            Body => "body",
            Asn => "asn",
            If => "if",
            Then => "then",
            Else => "else",
            For => "for",
            In => "in",
            Idx => "idx",
            When => "when",
            Case => "case",
            Ui => "ui",
            Style => "style",
            NodeDecl => "node",
            Prop => "prop",
            Group => "group",
            Una => "una",
            Bina => "bina",
            Comp => "comp",
            Call => "call",
            Args => "args",
            Obj => "obj",
            Pair => "pair",
            Key => "key",
            Trans => "trans",
            Name => "name",
            Array => "array",
            Int => "int",
            Bin => "bin",
            Hex => "hex",
            Float => "float",
            Str => "str",
            FStr => "fstr",
            MStr => "mstr",
            SPart => "spart",
            Interpol => "interpol",
            Null => "null",
            True => "true",
            False => "false",
            KwNull | KwTrue | KwFalse | Ident | IntLit | BinLit | HexLit | FloatLit | StrLit
            | StrPart | Whitespace | Newline | LineComment | BlockComment | Garbage | __LAST => {
                return None;
            }
        };
        Some(name)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}

/// Rowan language marker for Auto trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AutoLang {}

impl Language for AutoLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
        // Trees are only ever built from `SyntaxKind`s.
        SyntaxKind::from_u16(raw.0).unwrap_or(Error)
    }

    fn kind_to_raw(kind: SyntaxKind) -> rowan::SyntaxKind {
        rowan::SyntaxKind::from(kind)
    }
}

pub type SyntaxNode = rowan::SyntaxNode<AutoLang>;
pub type SyntaxToken = rowan::SyntaxToken<AutoLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// Set of token kinds, one bit per discriminant. Every token kind fits below 64.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

const fn bit(kind: SyntaxKind) -> u64 {
    let id = kind as u16;
    assert!(id < u64::BITS as u16, "only token kinds fit in a TokenSet");
    1 << id
}

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut set = Self::EMPTY;
        let mut rest = kinds;
        while let [first, tail @ ..] = rest {
            set.0 |= bit(*first);
            rest = tail;
        }
        set
    }

    pub const fn single(kind: SyntaxKind) -> Self {
        TokenSet(bit(kind))
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let id = kind as u16;
        id < u64::BITS as u16 && self.0 >> id & 1 == 1
    }

    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    fn kinds(self) -> impl Iterator<Item = SyntaxKind> {
        (0..u64::BITS as u16)
            .filter(move |id| self.0 >> id & 1 == 1)
            .filter_map(SyntaxKind::from_u16)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens that start a primary expression.
    pub const EXPR_FIRST: TokenSet = TokenSet::new(&[
        ParenOpen,
        BracketOpen,
        BraceOpen,
        Dot,
        Ident,
        IntLit,
        BinLit,
        HexLit,
        FloatLit,
        StrLit,
        FStrOpen,
        FStrTripleOpen,
        FTickOpen,
        MStrFence,
        KwNull,
        KwTrue,
        KwFalse,
        Bang,
        Minus,
        Plus,
    ]);

    /// Tokens that start a statement-only construct.
    pub const STMT_KEYWORDS: TokenSet = TokenSet::new(&[
        KwMod, KwUse, KwImport, KwVar, KwFn, KwNode, KwIf, KwFor, KwWhen, KwUi, KwStyle,
    ]);

    pub const STMT_FIRST: TokenSet = EXPR_FIRST.union(STMT_KEYWORDS);

    pub const SEPARATORS: TokenSet = TokenSet::new(&[Comma, Semicolon]);

    pub const CLOSERS: TokenSet = TokenSet::new(&[ParenClose, BracketClose, BraceClose]);

    pub const NAME_FIRST: TokenSet = TokenSet::new(&[Ident, Dot]);

    /// Right-hand side of `=`, `:` and `in`, where `if`/`when` are values.
    pub const ASN_EXPR_FIRST: TokenSet = EXPR_FIRST.union(TokenSet::new(&[KwIf, KwWhen]));

    pub const NODE_ITEM_FIRST: TokenSet = EXPR_FIRST.union(TokenSet::single(KwIf));

    pub const CASE_FIRST: TokenSet = TokenSet::new(&[KwIs, KwElse]);

    pub const TEMPLATE_CLOSERS: TokenSet =
        TokenSet::new(&[DoubleQuote, TripleQuote, Backtick, MStrFence]);

    /// Operators that also start a statement: after a line break they begin a new one.
    pub const LINE_START_OPS: TokenSet = TokenSet::new(&[ParenOpen, BraceOpen, Minus, Plus]);
}
