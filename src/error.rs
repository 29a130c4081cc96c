//! The crate-root error type, aggregating every per-layer error (spec §7).
//!
//! Each layer keeps its own narrow error enum (`LexiconError`,
//! `PredicateStoreError`, `ParseError`, `TableauError`); this type only
//! exists for callers who want one `Result` to cover the whole pipeline
//! from sentence text to a finished tableau.

use thiserror::Error;

use crate::lexicon::LexiconError;
use crate::parser::ParseError;
use crate::predicates::PredicateStoreError;
use crate::tableau::TableauError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    PredicateStore(#[from] PredicateStoreError),
    #[error(transparent)]
    Tableau(#[from] TableauError),
}
