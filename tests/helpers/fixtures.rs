//! Small sentence builders so each scenario reads as the argument it
//! encodes rather than a wall of `Sentence::` constructors.

use tableaux::lexicon::{Operator, Sentence};

pub fn atom(index: u32) -> Sentence {
    Sentence::atomic(index, 0)
}

pub fn conditional(a: Sentence, b: Sentence) -> Sentence {
    Sentence::operated(Operator::Conditional, vec![a, b])
}
