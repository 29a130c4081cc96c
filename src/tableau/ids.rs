//! Small integer ids, arena-indexed (spec §9: "arena-and-index discipline").

/// Index into [`super::Tableau`]'s node arena. Unique for the lifetime of a
/// tableau — never reused, even after the node's branch closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Index into [`super::Tableau`]'s branch arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchId(pub u32);
