use super::ids::{BranchId, NodeId};

/// Errors raised by invalid operations on a [`super::Tableau`] (spec §7).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableauError {
    #[error("branch {0:?} is closed and cannot be extended")]
    BranchClosed(BranchId),
    #[error("branch {0:?} does not exist on this tableau")]
    UnknownBranch(BranchId),
    #[error("node {0:?} does not exist on this tableau")]
    UnknownNode(NodeId),
    #[error("tableau is already finished and cannot accept further rule applications")]
    AlreadyFinished,
}
