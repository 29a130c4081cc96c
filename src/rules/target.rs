//! [`Target`]: what a rule found and what it proposes to do about it
//! (spec §4.3).

use crate::lexicon::Constant;
use crate::tableau::{BranchId, NodeFlag, NodeId};

/// A candidate rule application. Produced by [`super::Rule::search_targets`],
/// consumed by [`super::Rule::score_candidate`] and [`super::Rule::apply`].
///
/// `node`/`nodes` name the source node(s) the rule will read and (if
/// `ticking`) tick; `new_constant`/`new_world` are set when the rule would
/// introduce a fresh one; `designated`/`world` preview the attributes the
/// rule will stamp on the nodes it appends.
#[derive(Debug, Clone)]
pub struct Target {
    pub branch: BranchId,
    pub node: Option<NodeId>,
    pub nodes: Vec<NodeId>,
    pub new_constant: Option<Constant>,
    pub new_world: Option<i32>,
    pub designated: Option<bool>,
    pub world: Option<i32>,
    pub flag: Option<NodeFlag>,
}

impl Target {
    pub fn new(branch: BranchId) -> Self {
        Self {
            branch,
            node: None,
            nodes: Vec::new(),
            new_constant: None,
            new_world: None,
            designated: None,
            world: None,
            flag: None,
        }
    }

    pub fn node(mut self, node: NodeId) -> Self {
        self.node = Some(node);
        self.nodes.push(node);
        self
    }

    pub fn extra_node(mut self, node: NodeId) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn new_constant(mut self, c: Constant) -> Self {
        self.new_constant = Some(c);
        self
    }

    pub fn new_world(mut self, w: i32) -> Self {
        self.new_world = Some(w);
        self
    }

    pub fn designated(mut self, d: bool) -> Self {
        self.designated = Some(d);
        self
    }

    pub fn world(mut self, w: i32) -> Self {
        self.world = Some(w);
        self
    }

    pub fn flag(mut self, flag: NodeFlag) -> Self {
        self.flag = Some(flag);
        self
    }

    /// The source node tie-breaking compares on — the earliest node this
    /// target would consume.
    pub fn earliest_node(&self) -> Option<NodeId> {
        self.nodes.iter().min().copied()
    }
}
