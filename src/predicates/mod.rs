//! Predicate declarations and the argument data type built on top of them.

mod argument;
mod error;
mod presets;
mod store;

pub use argument::Argument;
pub use error::PredicateStoreError;
pub use presets::{preset, preset_names};
pub use store::PredicateStore;
