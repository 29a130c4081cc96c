//! Concrete end-to-end scenarios, one per logic family.

use crate::helpers::fixtures::{atom, conditional};
use tableaux::engine::{build, ProveOptions};
use tableaux::lexicon::{Operator, Sentence};
use tableaux::logics::lookup;
use tableaux::predicates::Argument;
use tableaux::tableau::Value;

/// 1. CPL, Modus Ponens: `[a>b, a] |- b` is valid.
#[test]
fn cpl_modus_ponens_is_valid() {
    let logic = lookup("CPL").unwrap();
    let a = atom(0);
    let b = atom(1);
    let cond = conditional(a.clone(), b.clone());
    let argument = Argument::new(b, vec![a, cond]);

    let tableau = build(logic, argument, &ProveOptions::default()).unwrap();

    assert!(tableau.valid);
    assert!(tableau.completed);
    assert!(tableau.all_branches_closed());
}

/// 2. FDE, Law of Excluded Middle: `|- a v ~a` is invalid; the countermodel
/// assigns `a=N`.
#[test]
fn fde_law_of_excluded_middle_is_invalid() {
    let logic = lookup("FDE").unwrap();
    let a = atom(0);
    let lem = Sentence::operated(Operator::Disjunction, vec![a.clone(), a.negate()]);
    let argument = Argument::new(lem, vec![]);

    let tableau = build(logic, argument, &ProveOptions::default()).unwrap();

    assert!(tableau.invalid);
    let countermodel = tableau.models.iter().find(|m| m.is_countermodel).expect("no countermodel extracted");
    assert_eq!(countermodel.value_at(&a, 0), Some(Value::N));
}

/// 3. LP, Modus Ponens: `[a>b, a] |- b` is invalid; the countermodel
/// assigns `a=B, b=F`.
#[test]
fn lp_modus_ponens_is_invalid() {
    let logic = lookup("LP").unwrap();
    let a = atom(0);
    let b = atom(1);
    let cond = conditional(a.clone(), b.clone());
    let argument = Argument::new(b.clone(), vec![a.clone(), cond]);

    let tableau = build(logic, argument, &ProveOptions::default()).unwrap();

    assert!(tableau.invalid);
    let countermodel = tableau.models.iter().find(|m| m.is_countermodel).expect("no countermodel extracted");
    assert_eq!(countermodel.value_at(&a, 0), Some(Value::B));
    assert_eq!(countermodel.value_at(&b, 0), Some(Value::F));
}

/// 4. K, `[L(a>b), La] |- Lb` is valid.
#[test]
fn k_necessitated_modus_ponens_is_valid() {
    let logic = lookup("K").unwrap();
    let a = atom(0);
    let b = atom(1);
    let cond = conditional(a.clone(), b.clone());
    let box_a = Sentence::operated(Operator::Necessity, vec![a]);
    let box_cond = Sentence::operated(Operator::Necessity, vec![cond]);
    let box_b = Sentence::operated(Operator::Necessity, vec![b]);
    let argument = Argument::new(box_b, vec![box_a, box_cond]);

    let tableau = build(logic, argument, &ProveOptions::default()).unwrap();

    assert!(tableau.valid);
}

/// 5. D (serial), `[La] |- Ma` is valid; the Serial rule must introduce a
/// successor for the trunk's `w0` before `Ma`'s negation can be refuted.
#[test]
fn d_serial_necessity_entails_possibility() {
    let logic = lookup("D").unwrap();
    let a = atom(0);
    let box_a = Sentence::operated(Operator::Necessity, vec![a.clone()]);
    let diamond_a = Sentence::operated(Operator::Possibility, vec![a]);
    let argument = Argument::new(diamond_a, vec![box_a]);

    let tableau = build(logic, argument, &ProveOptions::default()).unwrap();

    assert!(tableau.valid);
}

/// 6. S5, `[MLa] |- a` is valid — universal-access collapse (every world
/// sees every world) lets the possibly-necessary premise reach `w0`
/// directly.
#[test]
fn s5_universal_access_collapses_modal_premise() {
    let logic = lookup("S5").unwrap();
    let a = atom(0);
    let box_a = Sentence::operated(Operator::Necessity, vec![a.clone()]);
    let diamond_box_a = Sentence::operated(Operator::Possibility, vec![box_a]);
    let argument = Argument::new(a, vec![diamond_box_a]);

    let tableau = build(logic, argument, &ProveOptions::default()).unwrap();

    assert!(tableau.valid);
}

/// 7. `StepIter` driven to completion reaches the same verdict as `build`,
/// exercising the step/ply inspection API end to end.
#[test]
fn step_iter_reaches_the_same_verdict_as_build() {
    let logic = lookup("CPL").unwrap();
    let a = atom(0);
    let b = atom(1);
    let cond = conditional(a.clone(), b.clone());
    let argument = Argument::new(b, vec![a, cond]);

    let mut tableau = logic.start(argument).unwrap();
    let opts = ProveOptions::default();
    let mut plies = 0;
    for result in tableaux::engine::StepIter::new(logic, &mut tableau, opts) {
        result.unwrap();
        plies += 1;
    }

    assert!(plies > 0);
    assert!(tableau.valid);
}
