//! Leaf detection over a node list.
use serde_json::Value;
use std::collections::HashSet;

use super::{node_id, parent_id, NodeId};

/// Attachment candidates found by [`find_leaves`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaves {
    ids: Vec<NodeId>,
    fallback: bool,
}

impl Leaves {
    /// Candidate ids, in order of first appearance in the scanned list.
    #[must_use]
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// True when no real leaf existed and every id was returned instead.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Ids of `nodes` that are never used as a `parentId` within `nodes`.
///
/// When nodes exist but none of them is a leaf (a parent cycle, a node that
/// is its own parent) every id is returned so that callers still have an
/// attachment point. An empty list yields an empty result.
///
/// This is a full scan; callers that grow a list and query it repeatedly pay
/// O(n) per call.
#[must_use]
pub fn find_leaves(nodes: &[Value]) -> Leaves {
    let mut all_ids: Vec<NodeId> = Vec::new();
    let mut seen: HashSet<NodeId> = HashSet::with_capacity(nodes.len());
    let mut parents: HashSet<NodeId> = HashSet::new();

    for node in nodes {
        if let Some(id) = node_id(node) {
            if seen.insert(id.clone()) {
                all_ids.push(id);
            }
        }
        if let Some(parent) = parent_id(node) {
            parents.insert(parent);
        }
    }

    let leaves: Vec<NodeId> = all_ids.iter().filter(|id| !parents.contains(*id)).cloned().collect();
    if leaves.is_empty() && !all_ids.is_empty() {
        log::warn!(
            "No clear leaf nodes found among {} node(s) (cycle or self-referencing node?). Using all available nodes as potential parents.",
            all_ids.len()
        );
        return Leaves { ids: all_ids, fallback: true };
    }
    Leaves { ids: leaves, fallback: false }
}
