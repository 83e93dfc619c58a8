//! Grammar fields: named roles of child nodes (`var name: (name) value: (int)`).
//!
//! The CST stores no field ids. A child's field is derived from its parent
//! kind and position, the same way the grammar assigns them.

use std::num::NonZeroU16;

use rowan::NodeOrToken;

use crate::parser::{SyntaxKind, SyntaxNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Field {
    Name = 1,
    Value,
    Cond,
    Then,
    Else,
    Init,
    Loop,
    Body,
    Check,
    Key,
    Src,
    Dst,
    Prop,
    Type,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::Name,
        Field::Value,
        Field::Cond,
        Field::Then,
        Field::Else,
        Field::Init,
        Field::Loop,
        Field::Body,
        Field::Check,
        Field::Key,
        Field::Src,
        Field::Dst,
        Field::Prop,
        Field::Type,
    ];

    pub fn id(self) -> NonZeroU16 {
        NonZeroU16::new(self as u16).expect("field ids start at 1")
    }

    pub fn from_id(id: NonZeroU16) -> Option<Field> {
        Self::ALL.get(usize::from(id.get()) - 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Value => "value",
            Field::Cond => "cond",
            Field::Then => "then",
            Field::Else => "else",
            Field::Init => "init",
            Field::Loop => "loop",
            Field::Body => "body",
            Field::Check => "check",
            Field::Key => "key",
            Field::Src => "src",
            Field::Dst => "dst",
            Field::Prop => "prop",
            Field::Type => "type",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

/// Field declaration of one node kind, as listed in the node types summary.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub multiple: bool,
    pub required: bool,
    /// Named kinds (or supertypes) the field may hold.
    pub types: &'static [&'static str],
}

const VALUE_TYPES: &[&str] = &["expr", "if", "when"];
const COND_TYPES: &[&str] = &[
    "bina", "call", "comp", "false", "group", "name", "true", "una",
];

const fn decl(
    field: Field,
    multiple: bool,
    required: bool,
    types: &'static [&'static str],
) -> FieldSpec {
    FieldSpec {
        field,
        multiple,
        required,
        types,
    }
}

/// Fields each node kind declares. Kinds not listed have none.
pub const FIELD_SPECS: &[(SyntaxKind, &[FieldSpec])] = &[
    (
        SyntaxKind::Var,
        &[
            decl(Field::Name, false, true, &["name"]),
            decl(Field::Value, false, true, VALUE_TYPES),
        ],
    ),
    (
        SyntaxKind::Asn,
        &[
            decl(Field::Name, false, true, &["name"]),
            decl(Field::Value, false, true, VALUE_TYPES),
        ],
    ),
    (SyntaxKind::Fn, &[decl(Field::Name, false, true, &["name"])]),
    (
        SyntaxKind::NodeDecl,
        &[decl(Field::Name, false, true, &["name"])],
    ),
    (
        SyntaxKind::If,
        &[
            decl(Field::Cond, true, true, COND_TYPES),
            decl(Field::Then, true, true, &["then"]),
            decl(Field::Else, false, false, &["else"]),
        ],
    ),
    (
        SyntaxKind::For,
        &[
            decl(Field::Init, true, false, &["var"]),
            decl(Field::Cond, false, false, COND_TYPES),
            decl(Field::Loop, false, false, &["body"]),
            decl(Field::Body, false, false, &["body"]),
        ],
    ),
    (
        SyntaxKind::When,
        &[
            decl(Field::Init, true, false, &["var"]),
            decl(Field::Check, false, true, &["expr"]),
        ],
    ),
    (
        SyntaxKind::Pair,
        &[
            decl(Field::Key, false, true, &["fstr", "key"]),
            decl(Field::Value, false, true, VALUE_TYPES),
        ],
    ),
    (
        SyntaxKind::Trans,
        &[
            decl(Field::Src, false, true, &["name"]),
            decl(Field::Dst, false, true, &["name"]),
        ],
    ),
    (
        SyntaxKind::Prop,
        &[
            decl(Field::Prop, false, true, &["name"]),
            decl(Field::Type, false, false, &["name"]),
        ],
    ),
];

pub fn field_specs(kind: SyntaxKind) -> &'static [FieldSpec] {
    FIELD_SPECS
        .iter()
        .find(|(k, _)| *k == kind)
        .map_or(&[], |(_, specs)| specs)
}

/// Child nodes of `node` paired with the field each one fills.
pub fn field_children(node: &SyntaxNode) -> Vec<(Option<Field>, SyntaxNode)> {
    let parent = node.kind();
    let has_in = node.children().any(|c| c.kind() == SyntaxKind::In);
    let mut after_separator = false;
    let mut names_seen = 0usize;
    let mut out = Vec::new();

    for element in node.children_with_tokens() {
        let child = match element {
            NodeOrToken::Token(t) => {
                if matches!(
                    t.kind(),
                    SyntaxKind::Equals | SyntaxKind::Colon | SyntaxKind::Arrow
                ) {
                    after_separator = true;
                }
                continue;
            }
            NodeOrToken::Node(n) => n,
        };

        let kind = child.kind();
        let field = if kind == SyntaxKind::Error {
            None
        } else {
            match parent {
                SyntaxKind::Var | SyntaxKind::Asn if after_separator => Some(Field::Value),
                SyntaxKind::Var | SyntaxKind::Asn | SyntaxKind::Fn | SyntaxKind::NodeDecl
                    if kind == SyntaxKind::Name =>
                {
                    Some(Field::Name)
                }
                SyntaxKind::If => match kind {
                    SyntaxKind::Then => Some(Field::Then),
                    SyntaxKind::Else => Some(Field::Else),
                    _ => Some(Field::Cond),
                },
                SyntaxKind::For => match kind {
                    SyntaxKind::Var => Some(Field::Init),
                    SyntaxKind::In => None,
                    SyntaxKind::Body if has_in => Some(Field::Body),
                    SyntaxKind::Body => Some(Field::Loop),
                    _ => Some(Field::Cond),
                },
                SyntaxKind::When => match kind {
                    SyntaxKind::Var => Some(Field::Init),
                    SyntaxKind::Body => None,
                    _ => Some(Field::Check),
                },
                SyntaxKind::Pair if after_separator => Some(Field::Value),
                SyntaxKind::Pair => Some(Field::Key),
                SyntaxKind::Trans | SyntaxKind::Prop if kind == SyntaxKind::Name => {
                    names_seen += 1;
                    match (parent, names_seen) {
                        (SyntaxKind::Trans, 1) => Some(Field::Src),
                        (SyntaxKind::Trans, _) => Some(Field::Dst),
                        (_, 1) => Some(Field::Prop),
                        _ => Some(Field::Type),
                    }
                }
                _ => None,
            }
        };
        out.push((field, child));
    }

    out
}
