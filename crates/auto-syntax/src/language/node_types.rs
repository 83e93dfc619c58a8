//! JSON summary of the node kinds, in the shape of tree-sitter's `node-types.json`.

use indexmap::IndexMap;
use serde::Serialize;

use super::fields::field_specs;
use super::{Language, SUPERTYPES};
use crate::parser::SyntaxKind;

#[derive(Debug, Serialize)]
pub struct NodeInfo {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub named: bool,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<&'static str, FieldInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtypes: Vec<TypeRef>,
}

#[derive(Debug, Serialize)]
pub struct FieldInfo {
    pub multiple: bool,
    pub required: bool,
    pub types: Vec<TypeRef>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TypeRef {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub named: bool,
}

impl TypeRef {
    fn named(kind: &'static str) -> Self {
        Self { kind, named: true }
    }
}

impl Language {
    /// Every supertype and visible kind with its fields, supertypes first.
    pub fn node_types(&self) -> Vec<NodeInfo> {
        let mut out: Vec<NodeInfo> = SUPERTYPES
            .iter()
            .map(|(supertype, subtypes)| NodeInfo {
                kind: supertype,
                named: true,
                fields: IndexMap::new(),
                subtypes: subtypes.iter().copied().map(TypeRef::named).collect(),
            })
            .collect();

        for id in 0..self.node_kind_count() as u16 {
            let Some(kind) = SyntaxKind::from_u16(id) else {
                continue;
            };
            let Some(name) = kind.grammar_name() else {
                continue;
            };
            let fields = field_specs(kind)
                .iter()
                .map(|decl| {
                    let info = FieldInfo {
                        multiple: decl.multiple,
                        required: decl.required,
                        types: decl.types.iter().copied().map(TypeRef::named).collect(),
                    };
                    (decl.field.as_str(), info)
                })
                .collect();
            out.push(NodeInfo {
                kind: name,
                named: kind.is_named(),
                fields,
                subtypes: Vec::new(),
            });
        }

        out
    }

    /// `node_types()` as a JSON array, in the `node-types.json` layout.
    pub fn node_types_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.node_types())
    }
}
