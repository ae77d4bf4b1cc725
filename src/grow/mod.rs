//! Growth driver.
//!
//! A [`Grower`] holds a pristine template tree and repeatedly grafts fresh
//! clones of it onto random leaves of an accumulated node list:
//!
//! 1. find the leaves of the whole accumulated list;
//! 2. pick one uniformly at random;
//! 3. clone the template under fresh ids;
//! 4. point every template root of the clone at the chosen leaf;
//! 5. append the clone.
//!
//! The template roots are computed once, when the grower is built. The
//! accumulated list is only ever appended to.
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use std::collections::HashSet;
use std::num::NonZeroUsize;

use crate::errors::TreeError;
use crate::tree::leaves::find_leaves;
use crate::tree::remap::{remap_with_grafts, UnresolvedParentPolicy};
use crate::tree::{template_roots, NodeId, PARENT_FIELD};

/// Lifecycle of a grow-and-save run.
///
/// Growth that stops early still moves on to `Saving`, since whatever was
/// accumulated is written out. `Aborted` is for failures that leave nothing
/// to save (bad input, bad config, a failed write).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Initialized,
    Growing,
    Saving,
    Done,
    Aborted,
}

impl Phase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Done | Phase::Aborted)
    }

    #[must_use]
    pub fn can_advance_to(self, next: Phase) -> bool {
        use Phase::{Aborted, Done, Growing, Initialized, Loading, Saving};
        match (self, next) {
            (Loading, Initialized) | (Initialized, Growing) | (Growing, Saving) | (Saving, Done) => {
                true
            }
            (from, Aborted) => !from.is_terminal(),
            _ => false,
        }
    }

    /// Move to `next` if the transition is legal. Returns whether it moved.
    pub fn advance(&mut self, next: Phase) -> bool {
        if !self.can_advance_to(next) {
            log::warn!("ignoring phase change {self:?} -> {next:?}");
            return false;
        }
        log::debug!("phase {self:?} -> {next:?}");
        *self = next;
        true
    }

    /// Process exit code for a run that ended in this phase.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Phase::Done => 0,
            _ => 1,
        }
    }
}

/// Progress of one completed iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationReport {
    /// 1-based iteration number.
    pub iteration: usize,
    pub total: usize,
    /// Leaf the clone was grafted onto.
    pub leaf: NodeId,
    /// Number of candidates the leaf was drawn from.
    pub candidates: usize,
    /// Clone roots re-parented onto `leaf`.
    pub attached: usize,
    pub clone_size: usize,
    /// Size of the accumulated list after the append.
    pub total_nodes: usize,
}

#[derive(Debug)]
pub enum Outcome {
    Completed,
    /// Growth stopped before `iteration` could run.
    Aborted { iteration: usize, reason: TreeError },
}

#[derive(Debug)]
pub struct GrowthReport {
    pub completed: usize,
    pub outcome: Outcome,
}

impl GrowthReport {
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self.outcome, Outcome::Aborted { .. })
    }
}

pub struct Grower<R> {
    template: Vec<Value>,
    roots: HashSet<NodeId>,
    rng: R,
    policy: UnresolvedParentPolicy,
}

impl<R: Rng> Grower<R> {
    /// Take ownership of the template and compute its roots.
    pub fn new(template: Vec<Value>, rng: R) -> Self {
        let roots = template_roots(&template);
        if roots.is_empty() && !template.is_empty() {
            log::warn!(
                "Could not identify any root nodes in the template. Attachment might not work as expected."
            );
        }
        Self { template, roots, rng, policy: UnresolvedParentPolicy::default() }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: UnresolvedParentPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn template(&self) -> &[Value] {
        &self.template
    }

    /// Template ids classified as roots.
    #[must_use]
    pub fn roots(&self) -> &HashSet<NodeId> {
        &self.roots
    }

    /// Grow a fresh copy of the template. The returned list starts with the
    /// template nodes, followed by the clones.
    pub fn run<F>(&mut self, iterations: NonZeroUsize, on_iteration: F) -> (Vec<Value>, GrowthReport)
    where
        F: FnMut(&IterationReport),
    {
        let mut nodes = self.template.clone();
        let report = self.grow(&mut nodes, iterations, on_iteration);
        (nodes, report)
    }

    /// Append `iterations` grafted clones of the template to `accumulated`.
    ///
    /// Stops early, keeping everything appended so far, when no leaf is left
    /// to attach to or when the template cannot be remapped under the
    /// configured policy.
    pub fn grow<F>(
        &mut self,
        accumulated: &mut Vec<Value>,
        iterations: NonZeroUsize,
        mut on_iteration: F,
    ) -> GrowthReport
    where
        F: FnMut(&IterationReport),
    {
        let total = iterations.get();

        for iteration in 1..=total {
            let leaves = find_leaves(accumulated);
            let Some(leaf) = leaves.ids().choose(&mut self.rng).cloned() else {
                return abort(iteration, TreeError::NoLeaves { iteration });
            };

            let block =
                match remap_with_grafts(&self.template, &self.roots, &mut self.rng, self.policy) {
                    Ok(block) => block,
                    Err(e) => return abort(iteration, e),
                };

            let mut clone = block.nodes;
            let leaf_value = leaf.to_value();
            for &pos in &block.grafts {
                if let Some(obj) = clone[pos].as_object_mut() {
                    obj.insert(PARENT_FIELD.to_string(), leaf_value.clone());
                }
            }
            let clone_size = clone.len();
            accumulated.extend(clone);

            let report = IterationReport {
                iteration,
                total,
                leaf,
                candidates: leaves.len(),
                attached: block.grafts.len(),
                clone_size,
                total_nodes: accumulated.len(),
            };
            log::debug!("{report:?}");
            on_iteration(&report);
        }

        GrowthReport { completed: total, outcome: Outcome::Completed }
    }
}

fn abort(iteration: usize, reason: TreeError) -> GrowthReport {
    log::warn!("growth stopped at iteration {iteration}: {reason}");
    GrowthReport { completed: iteration - 1, outcome: Outcome::Aborted { iteration, reason } }
}
