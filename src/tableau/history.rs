use super::ids::{BranchId, NodeId};

/// One entry of a tableau's `(rule, target, step)` history (spec §3).
///
/// `rule` names the rule that fired, by its [`crate::rules::Rule::name`] —
/// stored as a string rather than a trait object so the tableau layer has
/// no dependency on the rule framework built on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub rule: &'static str,
    pub branch: BranchId,
    pub target_node: Option<NodeId>,
    pub step: u32,
}

impl HistoryEntry {
    pub fn new(rule: &'static str, branch: BranchId, target_node: Option<NodeId>, step: u32) -> Self {
        Self {
            rule,
            branch,
            target_node,
            step,
        }
    }
}
