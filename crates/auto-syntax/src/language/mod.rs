//! Static grammar descriptor for the Auto language.
//!
//! One immutable [`Language`] value lives for the whole program. It is what
//! the C accessor `tree_sitter_auto` hands out and what [`language`] returns.
//!
//! ```
//! let lang = auto_syntax::language();
//! assert_eq!(lang.name(), "auto");
//! let id = lang.id_for_node_kind("var", true).unwrap();
//! assert_eq!(lang.node_kind_for_id(id), Some("var"));
//! ```

pub mod fields;
mod node_types;


use std::num::NonZeroU16;

pub use fields::{Field, FieldSpec};
pub use node_types::{FieldInfo, NodeInfo, TypeRef};

use crate::Result;
use crate::document::Document;
use crate::parser::SyntaxKind;

/// The syntax highlighting query for this language.
pub const HIGHLIGHTS_QUERY: &str = include_str!("../../queries/highlights.scm");

/// Reserved words. Identifiers spelled like these lex as keywords.
pub const KEYWORDS: &[&str] = &[
    "mod", "use", "import", "var", "fn", "node", "if", "else", "for", "in", "when", "is", "ui",
    "style", "null", "true", "false",
];

/// Hidden supertypes and the kinds they stand for. `stmt` includes `expr`.
pub(crate) const SUPERTYPES: &[(&str, &[&str])] = &[
    (
        "stmt",
        &[
            "mod", "use", "import", "var", "fn", "node", "asn", "if", "for", "when", "expr",
            "ui", "style",
        ],
    ),
    (
        "expr",
        &[
            "group", "name", "una", "bina", "comp", "call", "pair", "obj", "array", "trans",
            "num", "fstr", "str", "mstr", "null", "true", "false",
        ],
    ),
    ("num", &["int", "bin", "hex", "float"]),
];

/// Grammar descriptor. Opaque behind the C accessor.
#[derive(Debug)]
pub struct Language {
    name: &'static str,
    file_types: &'static [&'static str],
}

static LANGUAGE: Language = Language {
    name: "auto",
    file_types: &["at"],
};

/// The descriptor. Always the same object.
pub fn language() -> &'static Language {
    &LANGUAGE
}

impl Language {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file_types(&self) -> &'static [&'static str] {
        self.file_types
    }

    /// Number of kind ids, hidden ones included.
    pub fn node_kind_count(&self) -> usize {
        SyntaxKind::__LAST as usize
    }

    /// Grammar name of a kind id. Hidden kinds (trivia, raw literal tokens) have none.
    pub fn node_kind_for_id(&self, id: u16) -> Option<&'static str> {
        SyntaxKind::from_u16(id)?.grammar_name()
    }

    /// Looks up a kind by grammar name. `named` picks between `mod` the
    /// statement and `mod` the keyword.
    pub fn id_for_node_kind(&self, kind: &str, named: bool) -> Option<u16> {
        (0..SyntaxKind::__LAST as u16).find(|&id| {
            SyntaxKind::from_u16(id)
                .is_some_and(|k| k.is_named() == named && k.grammar_name() == Some(kind))
        })
    }

    pub fn node_kind_is_named(&self, id: u16) -> bool {
        SyntaxKind::from_u16(id).is_some_and(|k| k.is_named())
    }

    pub fn node_kind_is_visible(&self, id: u16) -> bool {
        self.node_kind_for_id(id).is_some()
    }

    pub fn field_count(&self) -> usize {
        Field::ALL.len()
    }

    pub fn field_name_for_id(&self, id: NonZeroU16) -> Option<&'static str> {
        Field::from_id(id).map(Field::as_str)
    }

    pub fn field_id_for_name(&self, name: &str) -> Option<NonZeroU16> {
        Field::from_name(name).map(Field::id)
    }

    pub fn supertypes(&self) -> impl Iterator<Item = &'static str> {
        SUPERTYPES.iter().map(|(name, _)| *name)
    }

    pub fn subtypes(&self, supertype: &str) -> Option<&'static [&'static str]> {
        SUPERTYPES
            .iter()
            .find(|(name, _)| *name == supertype)
            .map(|(_, subtypes)| *subtypes)
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        KEYWORDS
    }

    pub fn highlights_query(&self) -> &'static str {
        HIGHLIGHTS_QUERY
    }

    /// Parse and validate `source` with default fuel.
    pub fn parse<'a>(&self, source: &'a str) -> Result<Document<'a>> {
        Document::new(source).exec()
    }
}
