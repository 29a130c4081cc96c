//! Connectives of the object language.

use super::sort::{SortTuple, Sortable};

/// A logical connective, fixed in both identity and arity.
///
/// Arity is a property of the operator itself, not of any particular
/// sentence — `Operated` sentences are built with exactly
/// `operator.arity()` operands (see [`crate::lexicon::Sentence`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Assertion,
    Negation,
    Conjunction,
    Disjunction,
    MaterialConditional,
    MaterialBiconditional,
    Conditional,
    Biconditional,
    Possibility,
    Necessity,
}

impl Operator {
    pub const ALL: [Operator; 10] = [
        Operator::Assertion,
        Operator::Negation,
        Operator::Conjunction,
        Operator::Disjunction,
        Operator::MaterialConditional,
        Operator::MaterialBiconditional,
        Operator::Conditional,
        Operator::Biconditional,
        Operator::Possibility,
        Operator::Necessity,
    ];

    /// Number of operands an `Operated` sentence built with this operator
    /// must carry.
    pub const fn arity(self) -> usize {
        match self {
            Operator::Assertion
            | Operator::Negation
            | Operator::Possibility
            | Operator::Necessity => 1,
            Operator::Conjunction
            | Operator::Disjunction
            | Operator::MaterialConditional
            | Operator::MaterialBiconditional
            | Operator::Conditional
            | Operator::Biconditional => 2,
        }
    }

    pub const fn is_modal(self) -> bool {
        matches!(self, Operator::Possibility | Operator::Necessity)
    }

    pub const fn is_unary(self) -> bool {
        self.arity() == 1
    }

    pub const fn is_binary(self) -> bool {
        self.arity() == 2
    }

    /// Short name used in ordering / rule indexing contexts.
    pub const fn name(self) -> &'static str {
        match self {
            Operator::Assertion => "Assertion",
            Operator::Negation => "Negation",
            Operator::Conjunction => "Conjunction",
            Operator::Disjunction => "Disjunction",
            Operator::MaterialConditional => "MaterialConditional",
            Operator::MaterialBiconditional => "MaterialBiconditional",
            Operator::Conditional => "Conditional",
            Operator::Biconditional => "Biconditional",
            Operator::Possibility => "Possibility",
            Operator::Necessity => "Necessity",
        }
    }

    /// Rank used as the leading component of [`crate::lexicon::sort_tuple`].
    pub const fn rank(self) -> u32 {
        self as u32
    }
}

impl Sortable for Operator {
    fn type_rank(&self) -> i64 {
        3
    }

    fn sort_tuple(&self) -> SortTuple {
        vec![self.type_rank(), self.rank() as i64]
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A quantifier, binding exactly one variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quantifier {
    Existential,
    Universal,
}

impl Quantifier {
    pub const ALL: [Quantifier; 2] = [Quantifier::Existential, Quantifier::Universal];

    pub const fn name(self) -> &'static str {
        match self {
            Quantifier::Existential => "Existential",
            Quantifier::Universal => "Universal",
        }
    }

    pub const fn rank(self) -> u32 {
        self as u32
    }

    /// The dual quantifier under negation (`¬∀x.A` ~ `∃x.¬A`).
    pub const fn dual(self) -> Quantifier {
        match self {
            Quantifier::Existential => Quantifier::Universal,
            Quantifier::Universal => Quantifier::Existential,
        }
    }
}

impl Sortable for Quantifier {
    fn type_rank(&self) -> i64 {
        4
    }

    fn sort_tuple(&self) -> SortTuple {
        vec![self.type_rank(), self.rank() as i64]
    }
}

impl std::fmt::Display for Quantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arities_match_spec() {
        assert_eq!(Operator::Negation.arity(), 1);
        assert_eq!(Operator::Conjunction.arity(), 2);
        assert_eq!(Operator::Possibility.arity(), 1);
    }

    #[test]
    fn quantifier_dual_is_involutive() {
        for q in Quantifier::ALL {
            assert_eq!(q.dual().dual(), q);
        }
    }
}
