//! Flat tree model.
//!
//! A tree is stored as a `Vec<serde_json::Value>` where each element is a node
//! object carrying an `id` and optionally a `parentId`. Every other field is
//! payload and is never inspected. A node whose `parentId` is missing, or does
//! not resolve to an `id` of the same list, is a root.
//!
//! Submodules implement the two passes the grower needs: [`remap`] clones a
//! block under fresh identifiers and [`leaves`] finds attachment points.
use serde_json::{Number, Value};
use std::collections::HashSet;
use std::fmt;

pub mod leaves;
pub mod remap;

pub const ID_FIELD: &str = "id";
pub const PARENT_FIELD: &str = "parentId";

/// Identifier of a node: the value of an `id` or `parentId` field.
///
/// Only strings and numbers are identifiers; `"1"` and `1` are distinct,
/// while `1` and `1.0` are the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeId {
    Str(String),
    Num(Number),
}

impl NodeId {
    /// Interpret a JSON value as an identifier.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(NodeId::Str(s.clone())),
            Value::Number(n) => Some(NodeId::Num(integral(n))),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            NodeId::Str(s) => Value::String(s.clone()),
            NodeId::Num(n) => Value::Number(n.clone()),
        }
    }
}

// Largest magnitude below which every integral f64 is exact.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// `1.0` -> `1`, so that numerically equal ids compare equal.
#[allow(clippy::cast_possible_truncation)]
fn integral(n: &Number) -> Number {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_F64 => {
            Number::from(f as i64)
        }
        _ => n.clone(),
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Str(s) => f.write_str(s),
            NodeId::Num(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Str(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Str(s)
    }
}

/// The node's `id`, if it is an object with a usable identifier.
#[must_use]
pub fn node_id(node: &Value) -> Option<NodeId> {
    node.as_object()?.get(ID_FIELD).and_then(NodeId::from_value)
}

/// The node's `parentId`, if present and usable as an identifier.
#[must_use]
pub fn parent_id(node: &Value) -> Option<NodeId> {
    node.as_object()?.get(PARENT_FIELD).and_then(NodeId::from_value)
}

/// All identifiers present in `nodes`.
#[must_use]
pub fn id_set(nodes: &[Value]) -> HashSet<NodeId> {
    nodes.iter().filter_map(node_id).collect()
}

/// Identifiers of the root nodes of `nodes`: no `parentId`, or a `parentId`
/// that does not resolve to any `id` of the same list.
#[must_use]
pub fn template_roots(nodes: &[Value]) -> HashSet<NodeId> {
    let ids = id_set(nodes);
    nodes
        .iter()
        .filter_map(|node| {
            let id = node_id(node)?;
            match parent_id(node) {
                Some(parent) if ids.contains(&parent) => None,
                _ => Some(id),
            }
        })
        .collect()
}
