use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use tree_grower::grow::Grower;
use tree_grower::tree::remap::{remap_ids, UnresolvedParentPolicy};
use tree_grower::tree::{id_set, node_id, parent_id, NodeId};

// A forest of `parents.len()` nodes; each entry names an earlier node as parent or none.
fn forest() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(any::<Option<prop::sample::Index>>(), 1..12).prop_map(|parents| {
        parents
            .iter()
            .enumerate()
            .map(|(i, p)| match p {
                Some(idx) if i > 0 => json!({"id": format!("n{i}"), "parentId": format!("n{}", idx.index(i))}),
                _ => json!({"id": format!("n{i}")}),
            })
            .collect()
    })
}

proptest! {
    // Every id in the grown tree is unique and every parent reference resolves
    #[test]
    fn grown_tree_ids_unique_and_parents_resolve(template in forest(), iterations in 1usize..8, seed in any::<u64>()) {
        let size = template.len();
        let mut grower = Grower::new(template, StdRng::seed_from_u64(seed));
        let (nodes, report) = grower.run(NonZeroUsize::new(iterations).unwrap(), |_| {});

        prop_assert_eq!(report.completed, iterations);
        prop_assert_eq!(nodes.len(), size * (iterations + 1));
        let ids = id_set(&nodes);
        prop_assert_eq!(ids.len(), nodes.len());
        for node in &nodes {
            if let Some(parent) = parent_id(node) {
                prop_assert!(ids.contains(&parent));
            }
        }
    }

    // Repeated clones of one template never share an id, and the internal
    // structure of each clone mirrors the template
    #[test]
    fn repeated_remaps_are_globally_unique(template in forest(), clones in 1usize..20, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut seen: HashSet<NodeId> = HashSet::new();
        for _ in 0..clones {
            let block = remap_ids(&template, &mut rng, UnresolvedParentPolicy::Keep).unwrap();
            let reverse: HashMap<NodeId, NodeId> = block
                .id_map
                .iter()
                .map(|(old, new)| (NodeId::from(new.as_str()), old.clone()))
                .collect();
            for (orig, clone) in template.iter().zip(&block.nodes) {
                let new_id = node_id(clone).unwrap();
                prop_assert!(seen.insert(new_id.clone()));
                let orig_id = node_id(orig);
                prop_assert_eq!(reverse.get(&new_id), orig_id.as_ref());
                let mapped_parent = parent_id(clone).and_then(|p| reverse.get(&p).cloned());
                prop_assert_eq!(mapped_parent, parent_id(orig));
            }
        }
    }
}
