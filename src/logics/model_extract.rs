//! Counter-model extraction from a completed open branch (spec §4.5).
//!
//! Atomic truth values are read off which `±sentence`/`±¬sentence` nodes
//! are actually present on the branch — [`crate::tableau::Node`] never
//! stores a full truth value itself, only the optional designation marker
//! (spec §9's "no per-node truth value" simplification), so a value is
//! reconstructed here, once, at the end of a branch's life rather than
//! carried incrementally.

use crate::lexicon::{Operator, Sentence};
use crate::tableau::{BranchId, Model, Tableau, Value, WorldModel};

use super::meta::Meta;

/// Belnap/Dunn truth-order negation: swaps `T`/`F`, leaves the gap/glut
/// values fixed.
fn negate_value(v: Value) -> Value {
    match v {
        Value::T => Value::F,
        Value::F => Value::T,
        Value::N => Value::N,
        Value::B => Value::B,
    }
}

/// Truth-order meet (conjunction): `F` absorbs, `T` is identity, and the
/// two incomparable middle values meet at `F`.
fn meet(a: Value, b: Value) -> Value {
    use Value::*;
    match (a, b) {
        (F, _) | (_, F) => F,
        (T, x) | (x, T) => x,
        (N, N) => N,
        (B, B) => B,
        (N, B) | (B, N) => F,
    }
}

/// Truth-order join (disjunction): dual of [`meet`].
fn join(a: Value, b: Value) -> Value {
    use Value::*;
    match (a, b) {
        (T, _) | (_, T) => T,
        (F, x) | (x, F) => x,
        (N, N) => N,
        (B, B) => B,
        (N, B) | (B, N) => T,
    }
}

/// Recursively evaluate a truth-functional sentence against the atomic
/// valuations already in `wm`. Quantified and modal subformulas bottom out
/// in a direct lookup rather than genuine evaluation — a branch only ever
/// carries ground, world-stamped instances of those, never a formula whose
/// modal/quantificational structure this evaluator would need to unwind.
fn evaluate(sentence: &Sentence, wm: &WorldModel) -> Option<Value> {
    if let Some(v) = wm.value_of(sentence) {
        return Some(v);
    }
    if sentence.is_negated() {
        return evaluate(sentence.negatum()?, wm).map(negate_value);
    }
    let operands = sentence.operands();
    match sentence.operator()? {
        Operator::Conjunction => Some(meet(evaluate(&operands[0], wm)?, evaluate(&operands[1], wm)?)),
        Operator::Disjunction => Some(join(evaluate(&operands[0], wm)?, evaluate(&operands[1], wm)?)),
        Operator::MaterialConditional | Operator::Conditional => {
            Some(join(negate_value(evaluate(&operands[0], wm)?), evaluate(&operands[1], wm)?))
        }
        Operator::MaterialBiconditional | Operator::Biconditional => {
            let (a, b) = (evaluate(&operands[0], wm)?, evaluate(&operands[1], wm)?);
            let forward = join(negate_value(a), b);
            let backward = join(negate_value(b), a);
            Some(meet(forward, backward))
        }
        Operator::Assertion => evaluate(&operands[0], wm),
        Operator::Possibility | Operator::Necessity => None,
        Operator::Negation => unreachable!("is_negated() already handled above"),
    }
}

/// `true` if `node`'s sentence is `sentence` at the given designation
/// (bivalent logics treat "present, undesignated" as simply absent since
/// `designated` is always `None` there).
fn present(tableau: &Tableau, branch: BranchId, sentence: &Sentence, designated: Option<bool>, world: Option<i32>) -> bool {
    tableau.branch(branch).nodes().iter().any(|&n| {
        let node = tableau.node(n);
        node.sentence.as_ref() == Some(sentence) && node.designated == designated && node.world == world
    })
}

/// The value of one atomic (or literal) sentence at `world`, read off the
/// branch's `+A`/`-A`/`¬A` nodes.
fn atomic_value(tableau: &Tableau, branch: BranchId, meta: &Meta, atom: &Sentence, world: Option<i32>) -> Value {
    if meta.designation {
        let pos = present(tableau, branch, atom, Some(true), world);
        let neg = present(tableau, branch, &atom.negate(), Some(true), world);
        match (pos, neg) {
            (true, true) => Value::B,
            (true, false) => Value::T,
            (false, true) => Value::F,
            (false, false) => Value::N,
        }
    } else {
        let pos = present(tableau, branch, atom, None, world);
        if pos {
            Value::T
        } else {
            Value::F
        }
    }
}

fn worlds_on(tableau: &Tableau, branch: BranchId, meta: &Meta) -> Vec<i32> {
    if meta.modal {
        tableau.branch(branch).worlds().iter().copied().collect()
    } else {
        vec![0]
    }
}

fn world_or_default(w: Option<i32>, meta: &Meta) -> Option<i32> {
    if meta.modal {
        w
    } else {
        None
    }
}

/// Build one [`WorldModel`] from every literal (atomic/predicated,
/// optionally negated) sentence on the branch at `world`. `atomics()`
/// alone would miss ground predications (`Fa`), which never appear
/// wrapped in an atomic subformula of themselves, so this walks the
/// branch's own literal nodes instead of a sentence's derived atomics.
fn extract_world(tableau: &Tableau, branch: BranchId, meta: &Meta, world: i32) -> WorldModel {
    let mut model = WorldModel::new(world);
    let lookup_world = world_or_default(Some(world), meta);
    for &n in tableau.branch(branch).nodes() {
        let node = tableau.node(n);
        if node.world != lookup_world {
            continue;
        }
        let Some(sentence) = &node.sentence else { continue };
        if !sentence.is_literal() {
            continue;
        }
        let atom = if sentence.is_negated() { sentence.negatum().unwrap().clone() } else { sentence.clone() };
        if model.values.contains_key(&atom) {
            continue;
        }
        let value = atomic_value(tableau, branch, meta, &atom, lookup_world);
        model.values.insert(atom.clone(), value);
        if let Some(predicate) = atom.predicate() {
            let params = atom.params().to_vec();
            if matches!(value, Value::T | Value::B) {
                model.extensions.entry(predicate).or_default().insert(params.clone());
            }
            if matches!(value, Value::F | Value::B) {
                model.anti_extensions.entry(predicate).or_default().insert(params);
            }
        }
    }
    model
}

/// Extract a [`Model`] from an open branch, determining `is_countermodel`
/// by re-checking that every premise is designated and the conclusion is
/// not, at world 0 (spec §4.5's definition).
pub fn extract(tableau: &Tableau, branch: BranchId, meta: &Meta) -> Model {
    let worlds: Vec<WorldModel> = worlds_on(tableau, branch, meta)
        .into_iter()
        .map(|w| extract_world(tableau, branch, meta, w))
        .collect();

    let access = tableau
        .branch(branch)
        .nodes()
        .iter()
        .filter_map(|&n| {
            let node = tableau.node(n);
            Some((node.world1?, node.world2?))
        })
        .collect();

    let w0 = worlds.iter().find(|w| w.world == 0);
    let argument = tableau.argument();
    let premises_hold = argument.premises.iter().all(|p| {
        w0.and_then(|wm| evaluate(p, wm)).map(|v| meta.is_designated(v)).unwrap_or(false)
    });
    let conclusion_fails = w0
        .and_then(|wm| evaluate(&argument.conclusion, wm))
        .map(|v| !meta.is_designated(v))
        .unwrap_or(false);

    Model {
        worlds,
        access,
        is_countermodel: premises_hold && conclusion_fails,
    }
}
