//! Lexical items of the object language: predicates, parameters, operators,
//! quantifiers, and the [`Sentence`] sum type built from them.
//!
//! This module has no dependency on parsing, tableaux, or any particular
//! logic — it is the shared vocabulary every logic and every notation
//! builds on.

mod error;
mod operator;
mod parameter;
mod predicate;
mod sentence;
mod sort;

pub use error::LexiconError;
pub use operator::{Operator, Quantifier};
pub use parameter::{Constant, Parameter, Variable};
pub use predicate::{Predicate, EXISTENCE_INDEX, IDENTITY_INDEX};
pub use sentence::Sentence;
pub use sort::{SortTuple, Sortable};
