//! [`Branch`]: an ordered node sequence plus the incremental bookkeeping a
//! rule needs to decide what to do next (spec §3).

use std::collections::{BTreeSet, HashSet};

use rustc_hash::FxHashMap;

use crate::lexicon::Constant;

use super::ids::{BranchId, NodeId};
use super::node::Node;

/// Per-(branch, node) attributes. Node *content* (sentence, world, flag…)
/// lives once in the tableau's node arena; these stats live once per branch
/// the node appears on, since the same node id can be inherited by several
/// branches after a clone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeStats {
    pub ticked: bool,
    pub step_added: u32,
    pub step_ticked: Option<u32>,
}

/// One path from the tableau root to a leaf.
#[derive(Debug, Clone)]
pub struct Branch {
    id: BranchId,
    node_ids: Vec<NodeId>,
    stats: FxHashMap<NodeId, NodeStats>,
    closed: bool,
    closed_step: Option<u32>,
    origin: Option<BranchId>,
    constants: BTreeSet<Constant>,
    worlds: BTreeSet<i32>,
    /// `(node, constant)` pairs the Universal rule has already fired on —
    /// inherited in full by clones (spec §9's open question, resolved in
    /// favor of exact inheritance).
    universal_fired: HashSet<(NodeId, Constant)>,
    /// Quantified nodes the Existential rule has already instantiated —
    /// the rule is non-ticking (spec §4.3), so this is what prevents it
    /// from firing on the same sentence twice on one branch. Shared with
    /// the Possibility/Necessity rules' fresh-world case, which has the
    /// same fire-once shape.
    existential_fired: HashSet<NodeId>,
    /// `(node, world)` pairs the Necessity rule has already instantiated —
    /// the modal counterpart of `universal_fired`.
    modal_fired: HashSet<(NodeId, i32)>,
}

impl Branch {
    pub(super) fn new(id: BranchId) -> Self {
        Self {
            id,
            node_ids: Vec::new(),
            stats: FxHashMap::default(),
            closed: false,
            closed_step: None,
            origin: None,
            constants: BTreeSet::new(),
            worlds: BTreeSet::new(),
            universal_fired: HashSet::new(),
            existential_fired: HashSet::new(),
            modal_fired: HashSet::new(),
        }
    }

    /// Clone this branch's entire state under a fresh id, recording
    /// `self.id` as the new branch's origin. Used by branching rule
    /// applications, which fan one branch out into several siblings sharing
    /// everything up to the branch point.
    pub(super) fn fork(&self, new_id: BranchId) -> Self {
        Self {
            id: new_id,
            node_ids: self.node_ids.clone(),
            stats: self.stats.clone(),
            closed: false,
            closed_step: None,
            origin: Some(self.id),
            constants: self.constants.clone(),
            worlds: self.worlds.clone(),
            universal_fired: self.universal_fired.clone(),
            existential_fired: self.existential_fired.clone(),
            modal_fired: self.modal_fired.clone(),
        }
    }

    pub fn id(&self) -> BranchId {
        self.id
    }

    pub fn origin(&self) -> Option<BranchId> {
        self.origin
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.node_ids
    }

    pub fn leaf(&self) -> Option<NodeId> {
        self.node_ids.last().copied()
    }

    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn closed_step(&self) -> Option<u32> {
        self.closed_step
    }

    pub fn constants(&self) -> &BTreeSet<Constant> {
        &self.constants
    }

    pub fn worlds(&self) -> &BTreeSet<i32> {
        &self.worlds
    }

    /// A constant with an index one past the highest seen on this branch,
    /// subscript 0 — "new `Constant` with index beyond any on the branch"
    /// (spec §4.2).
    pub fn new_constant(&self) -> Constant {
        let next = self.constants.iter().map(|c| c.index).max().map_or(0, |m| m + 1);
        Constant::new(next, 0)
    }

    /// A world one past the highest seen on this branch — "successor of
    /// `max(worlds)+1`" (spec §4.2). Returns 0 if the branch has no worlds
    /// yet.
    pub fn new_world(&self) -> i32 {
        self.worlds.iter().max().map_or(0, |m| m + 1)
    }

    pub fn stats(&self, node: NodeId) -> NodeStats {
        self.stats.get(&node).copied().unwrap_or_default()
    }

    pub fn is_ticked(&self, node: NodeId) -> bool {
        self.stats(node).ticked
    }

    pub fn has_universal_fired(&self, node: NodeId, constant: Constant) -> bool {
        self.universal_fired.contains(&(node, constant))
    }

    pub fn mark_universal_fired(&mut self, node: NodeId, constant: Constant) {
        self.universal_fired.insert((node, constant));
    }

    pub fn has_existential_fired(&self, node: NodeId) -> bool {
        self.existential_fired.contains(&node)
    }

    pub fn mark_existential_fired(&mut self, node: NodeId) {
        self.existential_fired.insert(node);
    }

    pub fn has_modal_fired(&self, node: NodeId, world: i32) -> bool {
        self.modal_fired.contains(&(node, world))
    }

    pub fn mark_modal_fired(&mut self, node: NodeId, world: i32) {
        self.modal_fired.insert((node, world));
    }

    pub(super) fn push(&mut self, id: NodeId, node: &Node, step: u32) {
        self.node_ids.push(id);
        self.stats.insert(
            id,
            NodeStats {
                ticked: false,
                step_added: step,
                step_ticked: None,
            },
        );
        if let Some(sentence) = &node.sentence {
            self.constants.extend(sentence.constants());
        }
        self.worlds.extend(node.world);
        self.worlds.extend(node.world1);
        self.worlds.extend(node.world2);
    }

    pub(super) fn tick(&mut self, id: NodeId, step: u32) {
        let entry = self.stats.entry(id).or_default();
        entry.ticked = true;
        entry.step_ticked = Some(step);
    }

    pub(super) fn close(&mut self, step: u32) {
        self.closed = true;
        self.closed_step = Some(step);
    }
}
