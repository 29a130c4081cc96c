//! Cross-logic fixture table: every registered logic validates the
//! trivial reflexive argument `[a] |- a`, regardless of its designation
//! scheme, modal frame, or closure rule set.

use rstest::rstest;

use tableaux::engine::{build, ProveOptions};
use tableaux::lexicon::Sentence;
use tableaux::logics::lookup;
use tableaux::predicates::Argument;

#[rstest]
#[case("CPL")]
#[case("CFOL")]
#[case("FDE")]
#[case("K3")]
#[case("LP")]
#[case("K3W")]
#[case("K3WQ")]
#[case("B3E")]
#[case("L3")]
#[case("G3")]
#[case("GO")]
#[case("P3")]
#[case("RM3")]
#[case("MH")]
#[case("NH")]
#[case("K")]
#[case("D")]
#[case("T")]
#[case("S4")]
#[case("S5")]
#[case("KFDE")]
#[case("TFDE")]
#[case("S4FDE")]
#[case("S5FDE")]
#[case("KK3")]
#[case("TK3")]
fn reflexive_entailment_is_valid(#[case] name: &str) {
    let logic = lookup(name).unwrap_or_else(|| panic!("logic {name} not registered"));
    let a = Sentence::atomic(0, 0);
    let argument = Argument::new(a.clone(), vec![a]);

    let tableau = build(logic, argument, &ProveOptions::default()).unwrap();

    assert!(tableau.valid, "{name}: [a] |- a should be valid");
    assert!(tableau.completed);
    assert!(!tableau.premature);
}
