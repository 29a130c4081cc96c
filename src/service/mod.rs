//! The prove API's request/response types and dispatcher (spec §6).
//!
//! This is the crate's only JSON-facing surface, and the only module gated
//! behind the `service` feature; no HTTP transport lives here — wiring
//! [`prove`] to a server is left to the caller.

mod error;
mod prove;
mod tree;
mod types;

pub use error::ServiceError;
pub use prove::prove;
pub use types::{
    ArgumentRequest, ErrorResponse, ModelView, NodeView, OutputFormat, OutputRequest, ProveRequest, ProveResponse,
    ProveResult, Stats, TreeNode, WorldView, WriterOutput,
};
