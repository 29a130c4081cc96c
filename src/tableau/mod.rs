//! The tableau data model: branches, nodes, and the arena that owns them
//! (spec §3, §4.2).
//!
//! Rules (built on top, in [`crate::rules`]) mutate a [`Tableau`] only
//! through its `append`/`tick`/`fork_branch`/`close_branch` API — the
//! invariants ("nodes are never removed", "once ticked, stays ticked", "a
//! closed branch is never extended") are enforced here, once, rather than
//! by every rule individually.

mod branch;
mod error;
mod history;
mod ids;
mod model;
mod node;
#[allow(clippy::module_inception)]
mod tableau;

pub use branch::{Branch, NodeStats};
pub use error::TableauError;
pub use history::HistoryEntry;
pub use ids::{BranchId, NodeId};
pub use model::{Model, Value, WorldModel};
pub use node::{Node, NodeBuilder, NodeFlag};
pub use tableau::Tableau;
