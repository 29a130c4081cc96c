//! The sentence algebra: a closed sum type with derived sets, substitution,
//! and a total order — the shared vocabulary of every logic the engine
//! supports.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::rc::Rc;

use super::error::LexiconError;
use super::operator::{Operator, Quantifier};
use super::parameter::{Parameter, Variable};
use super::predicate::Predicate;
use super::sort::{SortTuple, Sortable};

/// A sentence of the object language.
///
/// Cheap to clone: the payload lives behind an [`Rc`], so `Sentence` is a
/// thin handle — cloning a deeply nested `Operated` sentence is a refcount
/// bump, not a tree copy. Equality and hashing are structural (delegated to
/// the boxed [`SentenceData`]), so two independently parsed occurrences of
/// the same sentence compare equal even without sharing an allocation.
#[derive(Debug, Clone)]
pub struct Sentence(Rc<SentenceData>);

#[derive(Debug, PartialEq, Eq, Hash)]
enum SentenceData {
    Atomic {
        index: u32,
        subscript: u32,
    },
    Predicated {
        predicate: Predicate,
        params: Vec<Parameter>,
    },
    Quantified {
        quantifier: Quantifier,
        variable: Variable,
        body: Sentence,
    },
    Operated {
        operator: Operator,
        operands: Vec<Sentence>,
    },
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}
impl Eq for Sentence {}

impl std::hash::Hash for Sentence {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl Sentence {
    pub fn atomic(index: u32, subscript: u32) -> Self {
        Sentence(Rc::new(SentenceData::Atomic { index, subscript }))
    }

    pub fn predicated(predicate: Predicate, params: Vec<Parameter>) -> Result<Self, LexiconError> {
        if params.len() != predicate.arity {
            return Err(LexiconError::PredicateArityMismatch {
                predicate,
                expected: predicate.arity,
                actual: params.len(),
            });
        }
        Ok(Sentence(Rc::new(SentenceData::Predicated {
            predicate,
            params,
        })))
    }

    pub fn quantified(
        quantifier: Quantifier,
        variable: Variable,
        body: Sentence,
    ) -> Result<Self, LexiconError> {
        if !body.free_variables().contains(&variable) {
            return Err(LexiconError::UnboundVariable { variable });
        }
        if body.rebinds(variable) {
            return Err(LexiconError::BoundVariable { variable });
        }
        Ok(Sentence(Rc::new(SentenceData::Quantified {
            quantifier,
            variable,
            body,
        })))
    }

    pub fn operated(operator: Operator, operands: Vec<Sentence>) -> Self {
        debug_assert_eq!(
            operands.len(),
            operator.arity(),
            "operand count must match operator arity"
        );
        Sentence(Rc::new(SentenceData::Operated { operator, operands }))
    }

    pub fn negation(operand: Sentence) -> Self {
        Self::operated(Operator::Negation, vec![operand])
    }

    // -- variant accessors ---------------------------------------------

    pub fn is_atomic(&self) -> bool {
        matches!(*self.0, SentenceData::Atomic { .. })
    }

    pub fn is_predicated(&self) -> bool {
        matches!(*self.0, SentenceData::Predicated { .. })
    }

    pub fn is_quantified(&self) -> bool {
        matches!(*self.0, SentenceData::Quantified { .. })
    }

    pub fn is_operated(&self) -> bool {
        matches!(*self.0, SentenceData::Operated { .. })
    }

    pub fn operator(&self) -> Option<Operator> {
        match &*self.0 {
            SentenceData::Operated { operator, .. } => Some(*operator),
            _ => None,
        }
    }

    pub fn operands(&self) -> &[Sentence] {
        match &*self.0 {
            SentenceData::Operated { operands, .. } => operands,
            _ => &[],
        }
    }

    pub fn quantifier(&self) -> Option<Quantifier> {
        match &*self.0 {
            SentenceData::Quantified { quantifier, .. } => Some(*quantifier),
            _ => None,
        }
    }

    pub fn bound_variable(&self) -> Option<Variable> {
        match &*self.0 {
            SentenceData::Quantified { variable, .. } => Some(*variable),
            _ => None,
        }
    }

    pub fn quantified_body(&self) -> Option<&Sentence> {
        match &*self.0 {
            SentenceData::Quantified { body, .. } => Some(body),
            _ => None,
        }
    }

    /// `(index, subscript)` if this is `Atomic`.
    pub fn atomic_coords(&self) -> Option<(u32, u32)> {
        match &*self.0 {
            SentenceData::Atomic { index, subscript } => Some((*index, *subscript)),
            _ => None,
        }
    }

    pub fn predicate(&self) -> Option<Predicate> {
        match &*self.0 {
            SentenceData::Predicated { predicate, .. } => Some(*predicate),
            _ => None,
        }
    }

    pub fn params(&self) -> &[Parameter] {
        match &*self.0 {
            SentenceData::Predicated { params, .. } => params,
            _ => &[],
        }
    }

    /// `true` if this is `Operated(Negation, [_])`.
    pub fn is_negated(&self) -> bool {
        self.operator() == Some(Operator::Negation)
    }

    /// The operand of a negation, if this sentence is one.
    pub fn negatum(&self) -> Option<&Sentence> {
        match &*self.0 {
            SentenceData::Operated {
                operator: Operator::Negation,
                operands,
            } => operands.first(),
            _ => None,
        }
    }

    /// Wrap in a negation. Unlike [`Sentence::negatum`], this never
    /// cancels a pre-existing negation — `a.negate().negate() != a`
    /// structurally, matching how the tableau rules expect to see
    /// `¬¬A` as a distinct sentence that the double-negation rule consumes.
    pub fn negate(&self) -> Sentence {
        Sentence::negation(self.clone())
    }

    /// `true` for atomic and predicated sentences, and their negations —
    /// the sentences a classical closure rule compares directly.
    pub fn is_literal(&self) -> bool {
        if self.is_atomic() || self.is_predicated() {
            return true;
        }
        matches!(self.negatum(), Some(inner) if inner.is_atomic() || inner.is_predicated())
    }

    // -- derived sets (spec §3: "derived sets ... computed from its structure") --

    pub fn predicates(&self) -> BTreeSet<Predicate> {
        let mut out = BTreeSet::new();
        self.collect_predicates(&mut out);
        out
    }

    fn collect_predicates(&self, out: &mut BTreeSet<Predicate>) {
        match &*self.0 {
            SentenceData::Atomic { .. } => {}
            SentenceData::Predicated { predicate, .. } => {
                out.insert(*predicate);
            }
            SentenceData::Quantified { body, .. } => body.collect_predicates(out),
            SentenceData::Operated { operands, .. } => {
                for o in operands {
                    o.collect_predicates(out);
                }
            }
        }
    }

    pub fn constants(&self) -> BTreeSet<super::parameter::Constant> {
        let mut out = BTreeSet::new();
        self.collect_constants(&mut out);
        out
    }

    fn collect_constants(&self, out: &mut BTreeSet<super::parameter::Constant>) {
        match &*self.0 {
            SentenceData::Atomic { .. } => {}
            SentenceData::Predicated { params, .. } => {
                for p in params {
                    if let Some(c) = p.as_constant() {
                        out.insert(c);
                    }
                }
            }
            SentenceData::Quantified { body, .. } => body.collect_constants(out),
            SentenceData::Operated { operands, .. } => {
                for o in operands {
                    o.collect_constants(out);
                }
            }
        }
    }

    /// All variable occurrences, bound or free.
    pub fn variables(&self) -> BTreeSet<Variable> {
        let mut out = BTreeSet::new();
        self.collect_variables(&mut out);
        out
    }

    fn collect_variables(&self, out: &mut BTreeSet<Variable>) {
        match &*self.0 {
            SentenceData::Atomic { .. } => {}
            SentenceData::Predicated { params, .. } => {
                for p in params {
                    if let Some(v) = p.as_variable() {
                        out.insert(v);
                    }
                }
            }
            SentenceData::Quantified { variable, body, .. } => {
                out.insert(*variable);
                body.collect_variables(out);
            }
            SentenceData::Operated { operands, .. } => {
                for o in operands {
                    o.collect_variables(out);
                }
            }
        }
    }

    /// Variables occurring free (not under a binding quantifier for that
    /// variable).
    pub fn free_variables(&self) -> BTreeSet<Variable> {
        let mut out = BTreeSet::new();
        self.collect_free_variables(&mut out);
        out
    }

    fn collect_free_variables(&self, out: &mut BTreeSet<Variable>) {
        match &*self.0 {
            SentenceData::Atomic { .. } => {}
            SentenceData::Predicated { params, .. } => {
                for p in params {
                    if let Some(v) = p.as_variable() {
                        out.insert(v);
                    }
                }
            }
            SentenceData::Quantified { variable, body, .. } => {
                let mut inner = BTreeSet::new();
                body.collect_free_variables(&mut inner);
                inner.remove(variable);
                out.extend(inner);
            }
            SentenceData::Operated { operands, .. } => {
                for o in operands {
                    o.collect_free_variables(out);
                }
            }
        }
    }

    /// `true` if some nested `Quantified` node rebinds `variable` — used to
    /// reject shadowing at construction time.
    fn rebinds(&self, variable: Variable) -> bool {
        match &*self.0 {
            SentenceData::Atomic { .. } | SentenceData::Predicated { .. } => false,
            SentenceData::Quantified {
                variable: v, body, ..
            } => *v == variable || body.rebinds(variable),
            SentenceData::Operated { operands, .. } => {
                operands.iter().any(|o| o.rebinds(variable))
            }
        }
    }

    /// All atomic subsentences appearing anywhere in `self`.
    pub fn atomics(&self) -> BTreeSet<Sentence> {
        let mut out = BTreeSet::new();
        self.collect_atomics(&mut out);
        out
    }

    fn collect_atomics(&self, out: &mut BTreeSet<Sentence>) {
        match &*self.0 {
            SentenceData::Atomic { .. } => {
                out.insert(self.clone());
            }
            SentenceData::Predicated { .. } => {}
            SentenceData::Quantified { body, .. } => body.collect_atomics(out),
            SentenceData::Operated { operands, .. } => {
                for o in operands {
                    o.collect_atomics(out);
                }
            }
        }
    }

    /// The sequence of quantifiers encountered in a pre-order traversal.
    pub fn quantifiers(&self) -> Vec<Quantifier> {
        let mut out = Vec::new();
        self.collect_quantifiers(&mut out);
        out
    }

    fn collect_quantifiers(&self, out: &mut Vec<Quantifier>) {
        match &*self.0 {
            SentenceData::Atomic { .. } | SentenceData::Predicated { .. } => {}
            SentenceData::Quantified {
                quantifier, body, ..
            } => {
                out.push(*quantifier);
                body.collect_quantifiers(out);
            }
            SentenceData::Operated { operands, .. } => {
                for o in operands {
                    o.collect_quantifiers(out);
                }
            }
        }
    }

    /// The sequence of operators encountered in a pre-order traversal.
    pub fn operators_seq(&self) -> Vec<Operator> {
        let mut out = Vec::new();
        self.collect_operators(&mut out);
        out
    }

    fn collect_operators(&self, out: &mut Vec<Operator>) {
        match &*self.0 {
            SentenceData::Atomic { .. } | SentenceData::Predicated { .. } => {}
            SentenceData::Quantified { body, .. } => body.collect_operators(out),
            SentenceData::Operated { operator, operands } => {
                out.push(*operator);
                for o in operands {
                    o.collect_operators(out);
                }
            }
        }
    }

    // -- substitution -----------------------------------------------------

    /// Replace every free occurrence of `variable` with `param` throughout
    /// `self`. Used by quantifier rules to instantiate a bound variable
    /// with a constant drawn from the branch.
    pub fn substitute(&self, variable: Variable, param: Parameter) -> Sentence {
        match &*self.0 {
            SentenceData::Atomic { .. } => self.clone(),
            SentenceData::Predicated { predicate, params } => {
                let new_params: Vec<Parameter> = params
                    .iter()
                    .map(|p| match p {
                        Parameter::Variable(v) if *v == variable => param,
                        other => *other,
                    })
                    .collect();
                Sentence(Rc::new(SentenceData::Predicated {
                    predicate: *predicate,
                    params: new_params,
                }))
            }
            SentenceData::Quantified {
                quantifier,
                variable: bound,
                body,
            } => {
                if *bound == variable {
                    // shadowed — the outer substitution doesn't reach in
                    self.clone()
                } else {
                    Sentence(Rc::new(SentenceData::Quantified {
                        quantifier: *quantifier,
                        variable: *bound,
                        body: body.substitute(variable, param),
                    }))
                }
            }
            SentenceData::Operated { operator, operands } => {
                let new_operands = operands
                    .iter()
                    .map(|o| o.substitute(variable, param))
                    .collect();
                Sentence(Rc::new(SentenceData::Operated {
                    operator: *operator,
                    operands: new_operands,
                }))
            }
        }
    }

    /// Instantiate a quantified sentence's body with `param` in place of
    /// its bound variable. Returns `None` if `self` is not `Quantified`.
    pub fn unquantify(&self, param: Parameter) -> Option<Sentence> {
        match &*self.0 {
            SentenceData::Quantified { variable, body, .. } => {
                Some(body.substitute(*variable, param))
            }
            _ => None,
        }
    }
}

impl Sortable for Sentence {
    fn type_rank(&self) -> i64 {
        match &*self.0 {
            SentenceData::Atomic { .. } => 10,
            SentenceData::Predicated { .. } => 11,
            SentenceData::Quantified { .. } => 12,
            SentenceData::Operated { .. } => 13,
        }
    }

    fn sort_tuple(&self) -> SortTuple {
        let mut out = vec![self.type_rank()];
        match &*self.0 {
            SentenceData::Atomic { index, subscript } => {
                out.push(*index as i64);
                out.push(*subscript as i64);
            }
            SentenceData::Predicated { predicate, params } => {
                out.extend(predicate.sort_tuple());
                out.push(params.len() as i64);
                for p in params {
                    out.extend(p.sort_tuple());
                }
            }
            SentenceData::Quantified {
                quantifier,
                variable,
                body,
            } => {
                out.extend(quantifier.sort_tuple());
                out.push(variable.index as i64);
                out.push(variable.subscript as i64);
                out.extend(body.sort_tuple());
            }
            SentenceData::Operated { operator, operands } => {
                out.extend(operator.sort_tuple());
                for o in operands {
                    out.extend(o.sort_tuple());
                }
            }
        }
        out
    }
}

impl PartialOrd for Sentence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sentence {
    fn cmp(&self, other: &Self) -> Ordering {
        super::sort::compare_tuples(&self.sort_tuple(), &other.sort_tuple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::parameter::Constant;

    fn pred(arity: usize) -> Predicate {
        Predicate::new(0, 0, arity)
    }

    #[test]
    fn predicated_rejects_arity_mismatch() {
        let p = pred(2);
        let err = Sentence::predicated(p, vec![Parameter::Constant(Constant::new(0, 0))])
            .unwrap_err();
        assert!(matches!(err, LexiconError::PredicateArityMismatch { .. }));
    }

    #[test]
    fn quantified_rejects_unbound_variable() {
        let v = Variable::new(0, 0);
        let body = Sentence::atomic(0, 0);
        let err = Sentence::quantified(Quantifier::Existential, v, body).unwrap_err();
        assert!(matches!(err, LexiconError::UnboundVariable { .. }));
    }

    #[test]
    fn quantified_rejects_shadowing() {
        let x = Variable::new(0, 0);
        let f = pred(1);
        let g = Predicate::new(1, 0, 1);
        let fx = Sentence::predicated(f, vec![Parameter::Variable(x)]).unwrap();
        let gx = Sentence::predicated(g, vec![Parameter::Variable(x)]).unwrap();
        let exists_x_gx = Sentence::quantified(Quantifier::Existential, x, gx).unwrap();
        // fx has x free; exists_x_gx rebinds x internally — the outer
        // quantifier below would shadow it.
        let body = Sentence::operated(Operator::Conjunction, vec![fx, exists_x_gx]);
        let err = Sentence::quantified(Quantifier::Universal, x, body).unwrap_err();
        assert!(matches!(err, LexiconError::BoundVariable { .. }));
    }

    #[test]
    fn substitute_replaces_free_occurrences_only() {
        let x = Variable::new(0, 0);
        let y = Variable::new(1, 0);
        let p = pred(1);
        let fx = Sentence::predicated(p, vec![Parameter::Variable(x)]).unwrap();
        let exists_x_fx = Sentence::quantified(Quantifier::Existential, x, fx.clone()).unwrap();
        // substituting x in ∃x.Fx should do nothing (x is bound there)
        let c = Parameter::Constant(Constant::new(5, 0));
        let result = exists_x_fx.substitute(x, c);
        assert_eq!(result, exists_x_fx);
        // but in a bare Fx it should.
        let fy = fx.substitute(x, Parameter::Variable(y));
        assert_eq!(fy.params(), &[Parameter::Variable(y)]);
    }

    #[test]
    fn atomics_subset_of_negation_atomics() {
        let a = Sentence::atomic(0, 0);
        let b = Sentence::atomic(1, 0);
        let conj = Sentence::operated(Operator::Conjunction, vec![a.clone(), b.clone()]);
        let negated = conj.negate();
        assert!(conj.atomics().is_subset(&negated.atomics()));
    }

    #[test]
    fn ordering_is_total_and_consistent_with_sort_tuple() {
        let a = Sentence::atomic(0, 0);
        let b = Sentence::atomic(1, 0);
        assert_eq!(
            a.cmp(&b),
            super::super::sort::compare_tuples(&a.sort_tuple(), &b.sort_tuple())
        );
        assert!(a < b);
    }

    #[test]
    fn negate_does_not_cancel() {
        let a = Sentence::atomic(0, 0);
        let nn = a.negate().negate();
        assert_ne!(nn, a);
        assert_eq!(nn.negatum().unwrap().negatum().unwrap(), &a);
    }
}
