//! Reusable rule helpers: node/sentence/designation filters, and the
//! memoizing helpers for accessible worlds, quit-flagging, and branch
//! constants (spec §2 "Rule helpers", §4.3).

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::lexicon::{Constant, Sentence};
use crate::tableau::{BranchId, Node, NodeFlag, NodeId, Tableau, TableauError};

/// Nodes on `branch` not yet ticked, in branch order — what most
/// non-quantifier rules scan for candidates.
pub fn unticked_nodes<'t>(tableau: &'t Tableau, branch: BranchId) -> impl Iterator<Item = NodeId> + 't {
    let b = tableau.branch(branch);
    b.nodes().iter().copied().filter(move |&n| !b.is_ticked(n))
}

/// Unticked nodes on `branch` whose sentence satisfies `pred`.
pub fn nodes_matching<'t>(
    tableau: &'t Tableau,
    branch: BranchId,
    pred: impl Fn(&Sentence) -> bool + 't,
) -> impl Iterator<Item = NodeId> + 't {
    unticked_nodes(tableau, branch).filter(move |&n| {
        tableau
            .node(n)
            .sentence
            .as_ref()
            .is_some_and(|s| pred(s))
    })
}

/// Unticked nodes on `branch` at the given designation — only meaningful
/// for many-valued logics (`designated.is_some()` on every such node).
pub fn nodes_with_designation<'t>(
    tableau: &'t Tableau,
    branch: BranchId,
    designated: bool,
) -> impl Iterator<Item = NodeId> + 't {
    unticked_nodes(tableau, branch).filter(move |&n| tableau.node(n).designated == Some(designated))
}

/// Unticked nodes stamped with world `w` — the modal-variant counterpart of
/// [`nodes_matching`]: wherever a base rule reads `N.sentence`, the modal
/// variant also requires `N.world == w` (spec §4.4).
pub fn nodes_at_world<'t>(tableau: &'t Tableau, branch: BranchId, w: i32) -> impl Iterator<Item = NodeId> + 't {
    unticked_nodes(tableau, branch).filter(move |&n| tableau.node(n).world == Some(w))
}

pub fn node_sentence<'t>(tableau: &'t Tableau, node: NodeId) -> Option<&'t Sentence> {
    tableau.node(node).sentence.as_ref()
}

/// An access node `⟨w1, w2⟩` on `branch`, if present.
pub fn has_access(tableau: &Tableau, branch: BranchId, w1: i32, w2: i32) -> bool {
    tableau
        .branch(branch)
        .nodes()
        .iter()
        .map(|&n| tableau.node(n))
        .any(|node: &Node| node.world1 == Some(w1) && node.world2 == Some(w2))
}

/// Memoizes `accessible_from` lookups for the lifetime of one candidate
/// scan (one pass over one rule group) — branch structure does not change
/// mid-scan, so results computed for one rule are reusable by the next
/// without rescanning the branch's access nodes (spec §2 "memoizing
/// helpers for accessible worlds").
#[derive(Default)]
pub struct AccessMemo {
    cache: RefCell<FxHashMap<(BranchId, i32), Rc<BTreeSet<i32>>>>,
}

impl AccessMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `w'` such that `wRw'` is present as an access node on `branch`.
    pub fn accessible_from(&self, tableau: &Tableau, branch: BranchId, w: i32) -> Rc<BTreeSet<i32>> {
        if let Some(hit) = self.cache.borrow().get(&(branch, w)) {
            return hit.clone();
        }
        let worlds: BTreeSet<i32> = tableau
            .branch(branch)
            .nodes()
            .iter()
            .map(|&n| tableau.node(n))
            .filter(|node| node.world1 == Some(w))
            .filter_map(|node| node.world2)
            .collect();
        let worlds = Rc::new(worlds);
        self.cache.borrow_mut().insert((branch, w), worlds.clone());
        worlds
    }
}

/// The constants already present on `branch` — a thin passthrough, since
/// [`crate::tableau::Branch`] already maintains this set incrementally as
/// nodes are appended; no separate rule-level cache is needed on top.
pub fn branch_constants<'t>(tableau: &'t Tableau, branch: BranchId) -> &'t BTreeSet<Constant> {
    tableau.branch(branch).constants()
}

/// `true` once a `Quit` flag node has been appended to `branch` — a quit
/// flag marks a branch the engine should stop expanding without
/// considering it logically closed (e.g. a safety valve a logic-specific
/// rule trips when it detects it would loop forever).
pub fn has_quit_flag(tableau: &Tableau, branch: BranchId) -> bool {
    tableau
        .branch(branch)
        .nodes()
        .iter()
        .any(|&n| tableau.node(n).flag == Some(NodeFlag::Quit))
}

/// Append a `Quit` flag node to `branch`.
pub fn flag_quit(tableau: &mut Tableau, branch: BranchId) -> Result<NodeId, TableauError> {
    use crate::tableau::NodeBuilder;
    tableau.append(branch, NodeBuilder::new().flag(NodeFlag::Quit))
}
