//! Branching-complexity estimation and the default rank-optimization score
//! (spec §4.2 "Branching-complexity estimate", §4.3 "Target scoring").

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use crate::lexicon::{Operator, Sentence};
use crate::tableau::Tableau;

use super::target::Target;

/// Operators whose designated-side rule branches the tableau (disjunction,
/// the conditionals, the biconditionals) vs. those that don't (conjunction,
/// negation, assertion, the modal operators). Quantifier-free per spec
/// §4.2; quantified sentences score 0 like atoms, since their branching
/// behavior depends on the branch's constants, not on sentence shape alone.
fn is_disjunction_like(op: Operator) -> bool {
    matches!(
        op,
        Operator::Disjunction
            | Operator::MaterialConditional
            | Operator::Conditional
            | Operator::Biconditional
            | Operator::MaterialBiconditional
    )
}

fn compute_branching_complexity(sentence: &Sentence) -> i64 {
    match sentence.operator() {
        Some(op) if is_disjunction_like(op) => {
            1 + sentence
                .operands()
                .iter()
                .map(compute_branching_complexity)
                .sum::<i64>()
        }
        Some(_) => sentence
            .operands()
            .iter()
            .map(compute_branching_complexity)
            .sum(),
        None => 0,
    }
}

thread_local! {
    static COMPLEXITY_CACHE: RefCell<FxHashMap<Sentence, i64>> = RefCell::new(FxHashMap::default());
}

/// Memoized branching-complexity, keyed by sentence identity (spec's
/// supplemented "branching-complexity precomputation cache", grounded in
/// the teacher's interner/arena-id discipline — here a plain process-local
/// cache since `Sentence` is already an interned, cheaply-hashed handle).
pub fn branching_complexity(sentence: &Sentence) -> i64 {
    COMPLEXITY_CACHE.with(|cache| {
        if let Some(&v) = cache.borrow().get(sentence) {
            return v;
        }
        let v = compute_branching_complexity(sentence);
        cache.borrow_mut().insert(sentence.clone(), v);
        v
    })
}

/// The default target score used when `is_rank_optim` is set (spec §4.3):
/// prefer targets that introduce fewer fresh constants/worlds and consume
/// earlier, unticked nodes. Closing targets are scored far higher by the
/// closure pass itself, which runs before rank optimization ever sees a
/// branch (spec §4.2 step 1), so this function need not special-case
/// closure.
pub fn rank_score(tableau: &Tableau, target: &Target) -> i64 {
    let mut score: i64 = 0;

    if let Some(node) = target.node {
        let sentence = tableau.node(node).sentence.clone();
        if let Some(sentence) = sentence {
            // Decreasing branching complexity the most scores highest, so
            // we score by how much complexity this target resolves.
            score += branching_complexity(&sentence) * 10;
        }
    }

    if target.new_constant.is_some() {
        score -= 1;
    }
    if target.new_world.is_some() {
        score -= 1;
    }

    // Earlier (lower-id) nodes score slightly higher, enforcing "apply to
    // the earliest unticked node" as a tie-break rather than a hard filter.
    if let Some(earliest) = target.earliest_node() {
        score -= earliest.0 as i64 / 1_000_000;
    }

    score
}
