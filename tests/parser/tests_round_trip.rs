//! Write-then-parse is a no-op for every ascii sentence, including the
//! cases the plain 5-letter tables don't cover on their own: identifier
//! indices beyond the letter count, and the two system predicates.

use tableaux::lexicon::{Constant, Operator, Parameter, Predicate, Quantifier, Sentence, Variable};
use tableaux::parser::{parse, Notation};
use tableaux::predicates::PredicateStore;
use tableaux::writer::{write, Charset, RenderSet};

fn round_trip(sentence: &Sentence, render_set: RenderSet, store: &PredicateStore) {
    let text = write(sentence, render_set);
    let parsed = parse(&text, render_set.notation, store).unwrap_or_else(|e| {
        panic!("failed to re-parse {text:?} (from {sentence:?}): {e:?}");
    });
    assert_eq!(&parsed, sentence, "round trip changed the sentence: {text:?}");
}

#[test]
fn polish_and_standard_ascii_round_trip_a_conditional() {
    let mut store = PredicateStore::new();
    store.declare(0, 0, 1).unwrap();
    let a = Sentence::atomic(0, 0);
    let b = Sentence::atomic(1, 0);
    let cond = Sentence::operated(Operator::Conditional, vec![a, b]);

    round_trip(&cond, RenderSet::polish_ascii(), &store);
    round_trip(&cond, RenderSet::standard_ascii(), &store);
}

#[test]
fn indices_past_the_letter_table_round_trip() {
    let store = PredicateStore::new();
    // ATOMIC_LETTERS has 5 entries; these indices each wrap at least once.
    for index in [5, 6, 9, 12, 25] {
        round_trip(&Sentence::atomic(index, 0), RenderSet::polish_ascii(), &store);
        round_trip(&Sentence::atomic(index, 3), RenderSet::polish_ascii(), &store);
    }
}

#[test]
fn wrapped_and_unwrapped_indices_never_render_the_same_text() {
    let store = PredicateStore::new();
    let low = Sentence::atomic(0, 0);
    let wrapped = Sentence::atomic(5, 0);
    assert_ne!(
        write(&low, RenderSet::polish_ascii()),
        write(&wrapped, RenderSet::polish_ascii()),
    );
    round_trip(&low, RenderSet::polish_ascii(), &store);
    round_trip(&wrapped, RenderSet::polish_ascii(), &store);
}

#[test]
fn existence_predicate_round_trips_under_standard_notation() {
    let store = PredicateStore::new();
    let x = Variable::new(0, 0);
    let body = Sentence::predicated(Predicate::existence(), vec![Parameter::Variable(x)]).unwrap();
    let sentence = Sentence::quantified(Quantifier::Existential, x, body).unwrap();

    round_trip(&sentence, RenderSet::standard_ascii(), &store);
}

#[test]
fn identity_predicate_round_trips_under_standard_notation() {
    let store = PredicateStore::new();
    let a = Constant::new(0, 0);
    let b = Constant::new(1, 0);
    let sentence = Sentence::predicated(
        Predicate::identity(),
        vec![Parameter::Constant(a), Parameter::Constant(b)],
    )
    .unwrap();

    round_trip(&sentence, RenderSet::standard_ascii(), &store);
}

#[test]
fn unicode_charset_rendering_does_not_change_the_letter() {
    let a = Sentence::atomic(0, 0);
    let ascii = write(&a, RenderSet::polish_ascii());
    let unicode = write(&a, RenderSet::new(Notation::Polish, Charset::Unicode));
    assert_eq!(ascii, unicode, "atomic index 0 has no subscript to render differently");
}
