//! Printers: the inverse of the parser. Given a [`Sentence`] and a
//! [`RenderSet`], produce a string. Round-trip exact for every
//! `(notation, charset = ascii)` pair (spec §4.1, §8).

mod charset;
mod renderset;

pub use charset::{render_coords, render_subscript, Charset};
pub use renderset::RenderSet;

use crate::lexicon::{Parameter, Sentence};
use crate::parser::tables;
use crate::parser::Notation;

/// Render `sentence` under `render_set`.
pub fn write(sentence: &Sentence, render_set: RenderSet) -> String {
    let mut out = String::new();
    write_into(sentence, render_set, &mut out);
    out
}

fn write_letter(letters: &[char; 5], index: u32, subscript: u32, charset: Charset, out: &mut String) {
    out.push(tables::letter_of(letters, index));
    out.push_str(&render_coords(charset, tables::LETTER_COUNT, index, subscript));
}

fn write_param(param: &Parameter, charset: Charset, out: &mut String) {
    match param {
        Parameter::Constant(c) => write_letter(&tables::CONSTANT_LETTERS, c.index, c.subscript, charset, out),
        Parameter::Variable(v) => write_letter(&tables::VARIABLE_LETTERS, v.index, v.subscript, charset, out),
    }
}

fn write_into(sentence: &Sentence, rs: RenderSet, out: &mut String) {
    if let Some(predicate) = sentence.predicate() {
        if predicate.is_existence() || predicate.is_identity() {
            // System predicates print with their own symbol rather than a
            // letter from the user table.
            out.push_str(if predicate.is_existence() { "∃!" } else { "=" });
        } else {
            write_letter(
                &tables::PREDICATE_LETTERS,
                predicate.index as u32,
                predicate.subscript,
                rs.charset,
                out,
            );
        }
        for p in sentence.params() {
            write_param(p, rs.charset, out);
        }
        return;
    }

    if sentence.is_atomic() {
        // Atomic(index, subscript) — reuse the `Predicated` accessors'
        // sibling fields via the dedicated index accessor below.
        let (index, subscript) = atomic_coords(sentence);
        write_letter(&tables::ATOMIC_LETTERS, index, subscript, rs.charset, out);
        return;
    }

    if let Some(q) = sentence.quantifier() {
        out.push_str(tables::quantifier_glyph(rs.notation, rs.charset, q));
        match rs.notation {
            Notation::Polish => {}
            Notation::Standard => out.push(' '),
        }
        let variable = sentence.bound_variable().unwrap();
        write_letter(&tables::VARIABLE_LETTERS, variable.index, variable.subscript, rs.charset, out);
        if matches!(rs.notation, Notation::Standard) {
            out.push(' ');
        }
        write_into(sentence.quantified_body().unwrap(), rs, out);
        return;
    }

    if let Some(op) = sentence.operator() {
        let glyph = tables::operator_glyph(rs.notation, rs.charset, op);
        match rs.notation {
            Notation::Polish => {
                out.push_str(glyph);
                for operand in sentence.operands() {
                    write_into(operand, rs, out);
                }
            }
            Notation::Standard => {
                if op.is_unary() {
                    out.push_str(glyph);
                    write_into(&sentence.operands()[0], rs, out);
                } else {
                    out.push('(');
                    write_into(&sentence.operands()[0], rs, out);
                    out.push_str(glyph);
                    write_into(&sentence.operands()[1], rs, out);
                    out.push(')');
                }
            }
        }
    }
}

fn atomic_coords(sentence: &Sentence) -> (u32, u32) {
    sentence
        .atomic_coords()
        .expect("caller already checked sentence.is_atomic()")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Operator, Quantifier, Variable};
    use crate::predicates::PredicateStore;

    #[test]
    fn writes_polish_negation() {
        let a = Sentence::atomic(0, 0);
        let n = a.negate();
        assert_eq!(write(&n, RenderSet::polish_ascii()), "Np");
    }

    #[test]
    fn writes_standard_conjunction_with_parens() {
        let a = Sentence::atomic(0, 0);
        let b = Sentence::atomic(1, 0);
        let conj = Sentence::operated(Operator::Conjunction, vec![a, b]);
        assert_eq!(write(&conj, RenderSet::standard_ascii()), "(p&q)");
    }

    #[test]
    fn round_trips_through_standard_ascii() {
        let mut store = PredicateStore::new();
        let f = store.declare(0, 0, 1).unwrap();
        let x = Variable::new(0, 0);
        let fx = Sentence::predicated(f, vec![crate::lexicon::Parameter::Variable(x)]).unwrap();
        let exists = Sentence::quantified(Quantifier::Existential, x, fx).unwrap();
        let text = write(&exists, RenderSet::standard_ascii());
        let parsed = crate::parser::parse(&text, Notation::Standard, &store).unwrap();
        assert_eq!(parsed, exists);
    }

    #[test]
    fn round_trips_through_polish_ascii() {
        let mut store = PredicateStore::new();
        store.declare(0, 0, 2).unwrap();
        let a = Sentence::atomic(0, 0);
        let b = Sentence::atomic(1, 0);
        let cond = Sentence::operated(Operator::MaterialConditional, vec![a, b]);
        let text = write(&cond, RenderSet::polish_ascii());
        let parsed = crate::parser::parse(&text, Notation::Polish, &store).unwrap();
        assert_eq!(parsed, cond);
    }

    #[test]
    fn wrapped_atomic_index_does_not_collide_with_rank_zero() {
        let low = Sentence::atomic(0, 0);
        let wrapped = Sentence::atomic(5, 0);
        assert_ne!(write(&low, RenderSet::polish_ascii()), write(&wrapped, RenderSet::polish_ascii()));
    }

    #[test]
    fn round_trips_wrapped_atomic_index() {
        let store = PredicateStore::new();
        let wrapped = Sentence::atomic(5, 0);
        let text = write(&wrapped, RenderSet::polish_ascii());
        let parsed = crate::parser::parse(&text, Notation::Polish, &store).unwrap();
        assert_eq!(parsed, wrapped);
    }

    #[test]
    fn round_trips_wrapped_atomic_index_with_subscript() {
        let store = PredicateStore::new();
        let wrapped = Sentence::atomic(12, 3);
        let text = write(&wrapped, RenderSet::polish_ascii());
        let parsed = crate::parser::parse(&text, Notation::Polish, &store).unwrap();
        assert_eq!(parsed, wrapped);
    }

    #[test]
    fn round_trips_existence_predicate() {
        let store = PredicateStore::new();
        let x = Variable::new(0, 0);
        let sentence = Sentence::predicated(
            crate::lexicon::Predicate::existence(),
            vec![crate::lexicon::Parameter::Variable(x)],
        )
        .unwrap();
        let quantified =
            Sentence::quantified(Quantifier::Existential, x, sentence.clone()).unwrap();
        let text = write(&quantified, RenderSet::standard_ascii());
        let parsed = crate::parser::parse(&text, Notation::Standard, &store).unwrap();
        assert_eq!(parsed, quantified);
    }
}
