//! Predicate-store key conflicts.

use thiserror::Error;

use crate::lexicon::Predicate;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PredicateStoreError {
    #[error("predicate ({0}, {1}) is already declared with arity {2}")]
    DuplicatePredicate(i32, u32, usize),

    #[error("no predicate declared at index {0}, subscript {1}")]
    MissingPredicate(i32, u32),

    #[error("cannot redeclare system predicate {0}")]
    SystemPredicateConflict(Predicate),
}
