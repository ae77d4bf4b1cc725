//! Identifier remapping: clone a block of nodes under fresh identifiers.
use rand::RngCore;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

use super::{NodeId, ID_FIELD, PARENT_FIELD};
use crate::errors::TreeError;

/// What to do with a `parentId` that does not point inside the block being cloned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedParentPolicy {
    /// Leave the reference as it is.
    #[default]
    Keep,
    /// Drop the `parentId` field.
    Clear,
    /// Fail the remap.
    Reject,
}

/// Result of one cloning operation.
#[derive(Debug, Clone, Default)]
pub struct RemappedBlock {
    /// The cloned nodes, in input order.
    pub nodes: Vec<Value>,
    /// Original id -> fresh id. Only meaningful for this block.
    pub id_map: HashMap<NodeId, String>,
    /// Positions in `nodes` of the clones whose original id was one of the
    /// requested graft ids.
    pub grafts: Vec<usize>,
}

/// Generate a fresh identifier: 128 random bits formatted as a UUID v4.
pub fn fresh_id<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
}

/// Deep-copy `nodes`, giving every node a fresh `id` and rewriting each
/// `parentId` that pointed inside the block.
///
/// # Errors
/// `TreeError::UnresolvedParent` under [`UnresolvedParentPolicy::Reject`].
pub fn remap_ids<R: RngCore + ?Sized>(
    nodes: &[Value],
    rng: &mut R,
    policy: UnresolvedParentPolicy,
) -> Result<RemappedBlock, TreeError> {
    remap_with_grafts(nodes, &HashSet::new(), rng, policy)
}

/// Like [`remap_ids`], and also record which clones stem from an original id
/// in `graft_ids`.
///
/// # Errors
/// `TreeError::UnresolvedParent` under [`UnresolvedParentPolicy::Reject`].
pub fn remap_with_grafts<R: RngCore + ?Sized>(
    nodes: &[Value],
    graft_ids: &HashSet<NodeId>,
    rng: &mut R,
    policy: UnresolvedParentPolicy,
) -> Result<RemappedBlock, TreeError> {
    let mut cloned: Vec<Value> = nodes.to_vec();
    let mut id_map: HashMap<NodeId, String> = HashMap::with_capacity(nodes.len());
    let mut originals: Vec<Option<NodeId>> = Vec::with_capacity(nodes.len());
    let mut grafts = Vec::new();

    for (pos, node) in cloned.iter_mut().enumerate() {
        let old = node
            .as_object_mut()
            .and_then(|obj| Some((NodeId::from_value(obj.get(ID_FIELD)?)?, obj)));
        let Some((old, obj)) = old else {
            originals.push(None);
            continue;
        };
        let fresh = fresh_id(rng);
        obj.insert(ID_FIELD.to_string(), Value::String(fresh.clone()));
        if graft_ids.contains(&old) {
            grafts.push(pos);
        }
        // duplicate ids: the last occurrence owns the mapping
        id_map.insert(old.clone(), fresh);
        originals.push(Some(old));
    }

    for (pos, node) in cloned.iter_mut().enumerate() {
        let Some(obj) = node.as_object_mut() else { continue };
        let Some(parent) = obj.get(PARENT_FIELD).and_then(NodeId::from_value) else { continue };
        if let Some(fresh) = id_map.get(&parent) {
            obj.insert(PARENT_FIELD.to_string(), Value::String(fresh.clone()));
            continue;
        }
        match policy {
            UnresolvedParentPolicy::Keep => {}
            UnresolvedParentPolicy::Clear => {
                obj.shift_remove(PARENT_FIELD);
            }
            UnresolvedParentPolicy::Reject => {
                let node = originals[pos]
                    .as_ref()
                    .map_or_else(|| format!("#{pos}"), ToString::to_string);
                return Err(TreeError::UnresolvedParent { node, parent: parent.to_string() });
            }
        }
    }

    Ok(RemappedBlock { nodes: cloned, id_map, grafts })
}
