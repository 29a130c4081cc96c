//! A multi-logic analytic-tableau prover for first-order modal and
//! many-valued logics (spec §0 "Overview").
//!
//! Module inventory, in dependency order (each only depends on the ones
//! above it):
//!
//! - [`lexicon`] — the object language: predicates, parameters, operators,
//!   quantifiers, and the [`lexicon::Sentence`] algebra built from them.
//! - [`predicates`] — predicate declarations and the [`predicates::Argument`]
//!   a tableau is built from.
//! - [`parser`] — sentence strings (Polish or Standard notation) into
//!   [`lexicon::Sentence`].
//! - [`writer`] — the inverse: [`lexicon::Sentence`] back out to text, in
//!   any of four charsets.
//! - [`tableau`] — the data model: branches, nodes, and the arena that owns
//!   them.
//! - [`rules`] — the generic rule framework ([`rules::Rule`],
//!   [`rules::ClosureRule`], scoring, targets) that every logic's rule kit
//!   is built from.
//! - [`logics`] — the 26 concrete logics: their rule kits, trunk builders,
//!   and counter-model extraction.
//! - [`engine`] — the build/step driver tying a [`logics::Logic`] to a
//!   finished [`tableau::Tableau`].
//! - [`service`] — JSON request/response types for the prove API (feature
//!   `service`).

pub mod engine;
pub mod lexicon;
pub mod logics;
pub mod parser;
pub mod predicates;
pub mod rules;
#[cfg(feature = "service")]
pub mod service;
pub mod tableau;
pub mod writer;

mod error;

pub use error::Error;
