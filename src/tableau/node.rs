//! [`Node`]: an associative record over a small fixed key set (spec §3).

use crate::lexicon::Sentence;

use super::ids::NodeId;

/// The two flags a node can carry. `Closure` marks the node a closure rule
/// appends when it flags a branch; `Quit` marks a branch abandoned by a
/// quit-flagging rule helper without being logically closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeFlag {
    Closure,
    Quit,
}

/// A single line of a tableau.
///
/// Every field beyond `id` is optional: which fields are populated depends
/// on both the logic (`designated` only appears in many-valued logics,
/// `world`/`world1`/`world2` only in modal ones) and the node's role (an
/// access-relation node carries `world1`/`world2` and no `sentence`).
///
/// Equality is identity-based on `id`, matching the "Node equality is
/// identity-based within a tableau" invariant — two nodes can carry
/// structurally identical sentences and still be distinct nodes.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    pub sentence: Option<Sentence>,
    pub designated: Option<bool>,
    pub world: Option<i32>,
    pub world1: Option<i32>,
    pub world2: Option<i32>,
    pub flag: Option<NodeFlag>,
    pub ellipsis: bool,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

/// Builds a [`Node`] field by field before it is appended to a branch. The
/// id is assigned by [`super::Tableau::append`], not by the builder, since
/// ids are tableau-global and the builder has no tableau handle.
#[derive(Debug, Clone, Default)]
pub struct NodeBuilder {
    sentence: Option<Sentence>,
    designated: Option<bool>,
    world: Option<i32>,
    world1: Option<i32>,
    world2: Option<i32>,
    flag: Option<NodeFlag>,
    ellipsis: bool,
}

impl NodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sentence(mut self, s: Sentence) -> Self {
        self.sentence = Some(s);
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

    pub fn access(mut self, w1: i32, w2: i32) -> Self {
        self.world1 = Some(w1);
        self.world2 = Some(w2);
        self
    }

    pub fn flag(mut self, flag: NodeFlag) -> Self {
        self.flag = Some(flag);
        self
    }

    pub fn ellipsis(mut self) -> Self {
        self.ellipsis = true;
        self
    }

    pub(super) fn build(self, id: NodeId) -> Node {
        Node {
            id,
            sentence: self.sentence,
            designated: self.designated,
            world: self.world,
            world1: self.world1,
            world2: self.world2,
            flag: self.flag,
            ellipsis: self.ellipsis,
        }
    }
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// `true` for an access-relation node (`world1`/`world2` pair, no
    /// sentence of its own).
    pub fn is_access(&self) -> bool {
        self.world1.is_some() && self.world2.is_some()
    }

    pub fn is_closure_flag(&self) -> bool {
        self.flag == Some(NodeFlag::Closure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_equality_ignores_payload() {
        let a = NodeBuilder::new().sentence(Sentence::atomic(0, 0)).build(NodeId(0));
        let b = NodeBuilder::new().sentence(Sentence::atomic(0, 0)).build(NodeId(0));
        let c = NodeBuilder::new().sentence(Sentence::atomic(0, 0)).build(NodeId(1));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn access_node_has_no_sentence_requirement() {
        let n = NodeBuilder::new().access(0, 1).build(NodeId(0));
        assert!(n.is_access());
        assert!(n.sentence.is_none());
    }
}
