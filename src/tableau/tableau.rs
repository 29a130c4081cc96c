//! [`Tableau`]: the arena owning every branch and node of one proof attempt
//! (spec §3, §4.2).

use crate::predicates::Argument;

use super::branch::Branch;
use super::error::TableauError;
use super::history::HistoryEntry;
use super::ids::{BranchId, NodeId};
use super::model::Model;
use super::node::{Node, NodeBuilder, NodeFlag};

/// Owns every [`Branch`] and [`Node`] built while attempting to refute one
/// [`Argument`] under one logic.
///
/// Branches are created by [`Tableau::fork_branch`] (never destroyed, only
/// closed); nodes are appended by [`Tableau::append`] and never removed —
/// the arena-and-index discipline spec §9 calls for, mirrored from the
/// teacher's symbol-table layout.
#[derive(Debug)]
pub struct Tableau {
    logic: &'static str,
    argument: Argument,
    nodes: Vec<Node>,
    branches: Vec<Branch>,
    step: u32,
    history: Vec<HistoryEntry>,
    pub finished: bool,
    pub valid: bool,
    pub invalid: bool,
    pub completed: bool,
    pub premature: bool,
    pub models: Vec<Model>,
}

impl Tableau {
    /// A fresh tableau with a single empty root branch. Trunk-building is
    /// the caller's job (`logics::Logic::build_trunk`) — this constructor
    /// only allocates the scaffolding.
    pub fn new(logic: &'static str, argument: Argument) -> Self {
        let root = Branch::new(BranchId(0));
        Self {
            logic,
            argument,
            nodes: Vec::new(),
            branches: vec![root],
            step: 0,
            history: Vec::new(),
            finished: false,
            valid: false,
            invalid: false,
            completed: false,
            premature: false,
            models: Vec::new(),
        }
    }

    pub fn logic(&self) -> &'static str {
        self.logic
    }

    pub fn argument(&self) -> &Argument {
        &self.argument
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn root(&self) -> BranchId {
        BranchId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    /// Total distinct nodes ever appended to this tableau (the arena's
    /// size, not the sum of each branch's node list — branches inherit
    /// nodes from their fork point, so that sum double-counts).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn branch(&self, id: BranchId) -> &Branch {
        &self.branches[id.0 as usize]
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn open_branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter().filter(|b| !b.closed())
    }

    pub fn closed_branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter().filter(|b| b.closed())
    }

    /// A branch is "exhausted" in the spec's sense once every node on it is
    /// ticked; combined with closure this is what the engine checks for
    /// completion (spec §4.2).
    pub fn is_exhausted(&self, id: BranchId) -> bool {
        let branch = self.branch(id);
        branch.nodes().iter().all(|&n| branch.is_ticked(n))
    }

    pub fn all_branches_closed(&self) -> bool {
        self.branches.iter().all(|b| b.closed())
    }

    pub fn has_existential_fired(&self, branch: BranchId, node: NodeId) -> bool {
        self.branch(branch).has_existential_fired(node)
    }

    pub fn mark_existential_fired(&mut self, branch: BranchId, node: NodeId) -> Result<(), TableauError> {
        self.branch_mut(branch)?.mark_existential_fired(node);
        Ok(())
    }

    pub fn has_universal_fired(&self, branch: BranchId, node: NodeId, constant: crate::lexicon::Constant) -> bool {
        self.branch(branch).has_universal_fired(node, constant)
    }

    pub fn mark_universal_fired(
        &mut self,
        branch: BranchId,
        node: NodeId,
        constant: crate::lexicon::Constant,
    ) -> Result<(), TableauError> {
        self.branch_mut(branch)?.mark_universal_fired(node, constant);
        Ok(())
    }

    pub fn new_constant(&self, branch: BranchId) -> crate::lexicon::Constant {
        self.branch(branch).new_constant()
    }

    pub fn new_world(&self, branch: BranchId) -> i32 {
        self.branch(branch).new_world()
    }

    pub fn has_modal_fired(&self, branch: BranchId, node: NodeId, world: i32) -> bool {
        self.branch(branch).has_modal_fired(node, world)
    }

    pub fn mark_modal_fired(&mut self, branch: BranchId, node: NodeId, world: i32) -> Result<(), TableauError> {
        self.branch_mut(branch)?.mark_modal_fired(node, world);
        Ok(())
    }

    /// Bump and return the new step counter. Trunk construction happens at
    /// step 0 (spec's Open Questions resolution); the first post-trunk rule
    /// application advances to step 1.
    pub fn advance_step(&mut self) -> u32 {
        self.step += 1;
        self.step
    }

    /// Append a node to `branch`, assigning it a fresh tableau-global id.
    pub fn append(&mut self, branch: BranchId, node: NodeBuilder) -> Result<NodeId, TableauError> {
        if self.branch_ref(branch)?.closed() {
            return Err(TableauError::BranchClosed(branch));
        }
        let id = NodeId(self.nodes.len() as u32);
        let built = node.build(id);
        self.nodes.push(built);
        let step = self.step;
        let node_ref = &self.nodes[id.0 as usize];
        self.branches[branch.0 as usize].push(id, node_ref, step);
        tracing::trace!(tableau.logic = self.logic, branch = branch.0, node = id.0, step, "node appended");
        Ok(id)
    }

    pub fn tick(&mut self, branch: BranchId, node: NodeId) -> Result<(), TableauError> {
        let step = self.step;
        self.branch_mut(branch)?.tick(node, step);
        tracing::trace!(tableau.logic = self.logic, branch = branch.0, node = node.0, step, "node ticked");
        Ok(())
    }

    /// Mark `branch` closed at the current step and record `rule` in
    /// history. The caller is expected to have just appended the `closure`
    /// flag node.
    pub fn close_branch(&mut self, branch: BranchId, rule: &'static str) -> Result<(), TableauError> {
        let step = self.step;
        self.branch_mut(branch)?.close(step);
        self.history.push(HistoryEntry::new(rule, branch, None, step));
        tracing::debug!(tableau.logic = self.logic, branch = branch.0, step, rule, "branch closed");
        Ok(())
    }

    /// Clone `source`'s full state into a new branch sharing its node
    /// prefix, for a rule whose `branching` is nonzero. Returns the new
    /// branch's id.
    pub fn fork_branch(&mut self, source: BranchId) -> Result<BranchId, TableauError> {
        let forked = self.branch_ref(source)?.fork(BranchId(self.branches.len() as u32));
        let new_id = forked.id();
        self.branches.push(forked);
        tracing::trace!(tableau.logic = self.logic, source = source.0, new_branch = new_id.0, "branch forked");
        Ok(new_id)
    }

    pub fn record(&mut self, rule: &'static str, branch: BranchId, target_node: Option<NodeId>) {
        self.history.push(HistoryEntry::new(rule, branch, target_node, self.step));
    }

    fn branch_ref(&self, id: BranchId) -> Result<&Branch, TableauError> {
        self.branches.get(id.0 as usize).ok_or(TableauError::UnknownBranch(id))
    }

    fn branch_mut(&mut self, id: BranchId) -> Result<&mut Branch, TableauError> {
        self.branches.get_mut(id.0 as usize).ok_or(TableauError::UnknownBranch(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Sentence;

    fn argument() -> Argument {
        Argument::new(Sentence::atomic(0, 0), vec![])
    }

    #[test]
    fn new_tableau_has_one_open_root_branch() {
        let tab = Tableau::new("CPL", argument());
        assert_eq!(tab.branches().len(), 1);
        assert_eq!(tab.open_branches().count(), 1);
        assert!(!tab.branch(tab.root()).closed());
    }

    #[test]
    fn append_tracks_constants_on_branch() {
        let mut tab = Tableau::new("CPL", argument());
        let root = tab.root();
        let p = crate::predicates::PredicateStore::new().declare(0, 0, 1).unwrap();
        let c = crate::lexicon::Constant::new(0, 0);
        let sentence = Sentence::predicated(p, vec![crate::lexicon::Parameter::Constant(c)]).unwrap();
        tab.append(root, NodeBuilder::new().sentence(sentence)).unwrap();
        assert!(tab.branch(root).constants().contains(&c));
    }

    #[test]
    fn appending_to_closed_branch_errors() {
        let mut tab = Tableau::new("CPL", argument());
        let root = tab.root();
        tab.append(root, NodeBuilder::new().flag(NodeFlag::Closure)).unwrap();
        tab.close_branch(root, "Closure").unwrap();
        let err = tab.append(root, NodeBuilder::new()).unwrap_err();
        assert_eq!(err, TableauError::BranchClosed(root));
    }

    #[test]
    fn fork_branch_inherits_nodes_and_is_independent() {
        let mut tab = Tableau::new("CPL", argument());
        let root = tab.root();
        let n = tab.append(root, NodeBuilder::new().sentence(Sentence::atomic(0, 0))).unwrap();
        let child = tab.fork_branch(root).unwrap();
        assert_eq!(tab.branch(child).nodes(), tab.branch(root).nodes());
        tab.tick(child, n).unwrap();
        assert!(tab.branch(child).is_ticked(n));
        assert!(!tab.branch(root).is_ticked(n));
    }
}
