//! Fixed glyph tables: which characters denote atomics, predicates,
//! constants, and variables (shared by every notation and charset), and
//! which glyphs denote operators/quantifiers for a given (notation,
//! charset) pair.
//!
//! Identifier glyphs (atomic/predicate/constant/variable letters) don't
//! change across charsets — `p`, `q`, `F`, `a`, `x` read the same whether
//! the surrounding connectives are rendered ascii, unicode, or LaTeX. Only
//! the operator and quantifier glyphs vary.

use crate::lexicon::{Operator, Quantifier};

use super::notation::Notation;
use crate::writer::Charset;

pub const ATOMIC_LETTERS: [char; 5] = ['p', 'q', 'r', 's', 't'];
pub const PREDICATE_LETTERS: [char; 5] = ['F', 'G', 'H', 'I', 'J'];
pub const CONSTANT_LETTERS: [char; 5] = ['a', 'b', 'c', 'd', 'e'];
pub const VARIABLE_LETTERS: [char; 5] = ['x', 'y', 'z', 'v', 'w'];

/// Every identifier table above has this many letters. `index` is
/// unbounded (see `Sentence::atomic`'s `index: u32`); the letter only
/// encodes `index % LETTER_COUNT`, so the wrap count `index / LETTER_COUNT`
/// has to be carried separately (`writer::render_coords`) for the glyph to
/// determine `index` uniquely rather than just its residue.
pub const LETTER_COUNT: u32 = 5;

pub fn rank_of(letters: &[char; 5], c: char) -> Option<u32> {
    letters.iter().position(|&l| l == c).map(|i| i as u32)
}

pub fn letter_of(letters: &[char; 5], index: u32) -> char {
    letters[(index as usize) % letters.len()]
}

/// The 10 operator glyphs for a given (notation, charset) pair, indexed by
/// [`Operator::rank`].
pub fn operator_glyphs(notation: Notation, charset: Charset) -> [&'static str; 10] {
    match (notation, charset) {
        (Notation::Polish, _) => [
            "T", "N", "K", "A", "C", "E", "U", "B", "M", "L",
        ],
        (Notation::Standard, Charset::Ascii) => [
            "*", "~", "&", "V", ">", "<", "$", "%", "P", "N",
        ],
        (Notation::Standard, Charset::Unicode) => [
            "\u{2022}", "\u{00ac}", "\u{2227}", "\u{2228}", "\u{2283}", "\u{2261}", "\u{2192}",
            "\u{2194}", "\u{25c7}", "\u{25fb}",
        ],
        (Notation::Standard, Charset::Html) => [
            "&deg;", "&not;", "&and;", "&or;", "&sup;", "&equiv;", "&rarr;", "&harr;", "&loz;",
            "&#9723;",
        ],
        (Notation::Standard, Charset::Latex) => [
            "\\checkmark", "\\neg", "\\land", "\\lor", "\\supset", "\\equiv", "\\rightarrow",
            "\\leftrightarrow", "\\Diamond", "\\Box",
        ],
    }
}

pub fn operator_glyph(notation: Notation, charset: Charset, op: Operator) -> &'static str {
    operator_glyphs(notation, charset)[op.rank() as usize]
}

/// The 2 quantifier glyphs, indexed by [`Quantifier::rank`].
pub fn quantifier_glyphs(notation: Notation, charset: Charset) -> [&'static str; 2] {
    match (notation, charset) {
        (Notation::Polish, _) => ["S", "V"],
        (Notation::Standard, Charset::Ascii) => ["X", "A"],
        (Notation::Standard, Charset::Unicode) => ["\u{2203}", "\u{2200}"],
        (Notation::Standard, Charset::Html) => ["&exist;", "&forall;"],
        (Notation::Standard, Charset::Latex) => ["\\exists", "\\forall"],
    }
}

pub fn quantifier_glyph(notation: Notation, charset: Charset, q: Quantifier) -> &'static str {
    quantifier_glyphs(notation, charset)[q.rank() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_letters_are_disjoint() {
        let mut all: Vec<char> = ATOMIC_LETTERS
            .iter()
            .chain(PREDICATE_LETTERS.iter())
            .chain(CONSTANT_LETTERS.iter())
            .chain(VARIABLE_LETTERS.iter())
            .copied()
            .collect();
        all.sort();
        let before = all.len();
        all.dedup();
        assert_eq!(all.len(), before, "identifier letters must not collide");
    }

    #[test]
    fn polish_operator_glyphs_do_not_collide_with_identifier_letters() {
        for glyph in operator_glyphs(Notation::Polish, Charset::Ascii) {
            let c = glyph.chars().next().unwrap();
            assert!(rank_of(&PREDICATE_LETTERS, c).is_none());
            assert!(rank_of(&ATOMIC_LETTERS, c).is_none());
        }
    }
}
