//! The build/step driver: turns a [`crate::logics::Logic`] and an
//! [`crate::predicates::Argument`] into a finished
//! [`crate::tableau::Tableau`] (spec §4.2).
//!
//! This module is the only place that ties the generic rule framework
//! ([`crate::rules`]) to a concrete logic's rule set and runs it to
//! termination; a [`crate::logics::Logic`] alone only knows how to build its
//! trunk, not how to drive itself.

mod driver;
mod options;

pub use driver::{build, step, StepIter, StepOutcome, StepResult};
pub use options::ProveOptions;
