//! A small read-only library of named example arguments, one or two per
//! logic family (spec's supplemented "argument preset library" — grounded
//! in the teacher's "process-wide immutable registries populated at init"
//! design note, the same pattern `logics::registry` uses for the logic
//! table).

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::lexicon::{Operator, Sentence};

use super::Argument;

fn atom(index: u32) -> Sentence {
    Sentence::atomic(index, 0)
}

fn conditional(a: Sentence, b: Sentence) -> Sentence {
    Sentence::operated(Operator::Conditional, vec![a, b])
}

fn necessity(a: Sentence) -> Sentence {
    Sentence::operated(Operator::Necessity, vec![a])
}

fn possibility(a: Sentence) -> Sentence {
    Sentence::operated(Operator::Possibility, vec![a])
}

static PRESETS: Lazy<HashMap<&'static str, Argument>> = Lazy::new(|| {
    let a = atom(0);
    let b = atom(1);

    let modus_ponens = Argument::new(b.clone(), vec![a.clone(), conditional(a.clone(), b.clone())])
        .with_title("Modus Ponens");

    let excluded_middle =
        Argument::new(Sentence::operated(Operator::Disjunction, vec![a.clone(), a.negate()]), vec![])
            .with_title("Law of Excluded Middle");

    let explosion = Argument::new(b.clone(), vec![a.clone(), a.negate()]).with_title("Explosion");

    let necessitated_modus_ponens = Argument::new(
        necessity(b.clone()),
        vec![necessity(a.clone()), necessity(conditional(a.clone(), b.clone()))],
    )
    .with_title("Necessitated Modus Ponens");

    let serial_necessity_to_possibility =
        Argument::new(possibility(a.clone()), vec![necessity(a.clone())]).with_title("Necessity Implies Possibility");

    let s5_possibly_necessary =
        Argument::new(a.clone(), vec![possibility(necessity(a.clone()))]).with_title("Possibly Necessary");

    HashMap::from([
        ("modus-ponens", modus_ponens),
        ("excluded-middle", excluded_middle),
        ("explosion", explosion),
        ("necessitated-modus-ponens", necessitated_modus_ponens),
        ("serial-necessity-to-possibility", serial_necessity_to_possibility),
        ("s5-possibly-necessary", s5_possibly_necessary),
    ])
});

/// Look up a named preset argument. Names are stable identifiers, not
/// display titles — see [`Argument::title`] for the human-readable label.
pub fn preset(name: &str) -> Option<Argument> {
    PRESETS.get(name).cloned()
}

/// Every registered preset's stable name.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_presets_resolve() {
        for name in preset_names() {
            assert!(preset(name).is_some());
        }
        assert!(preset("modus-ponens").is_some());
        assert!(preset("nonexistent").is_none());
    }

    #[test]
    fn presets_carry_titles() {
        let argument = preset("modus-ponens").unwrap();
        assert_eq!(argument.title.as_deref(), Some("Modus Ponens"));
    }
}
