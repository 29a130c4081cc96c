//! Table-driven tokenizer.
//!
//! One token per lexical item: an operator glyph, a quantifier glyph, a
//! parenthesis, or an identifier (atomic/predicate/constant/variable
//! letter followed by an optional digit-run subscript). Whitespace
//! separates tokens but carries no meaning of its own — this matters for
//! Standard notation, where `Xx Fx` needs the space to tell the quantifier
//! variable apart from the following sentence.

use crate::lexicon::{Operator, Quantifier, EXISTENCE_INDEX, IDENTITY_INDEX};

use super::error::ParseError;
use super::notation::Notation;
use super::tables;
use crate::writer::Charset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Operator(Operator),
    Quantifier(Quantifier),
    Atomic(u32),
    Predicate(u32),
    /// One of the two fixed system predicates (`Existence`/`Identity`),
    /// lexed from their own glyphs (`"∃!"`/`"="`) rather than a letter from
    /// [`tables::PREDICATE_LETTERS`] — the payload is the predicate's
    /// negative index (`lexicon::EXISTENCE_INDEX`/`IDENTITY_INDEX`).
    SystemPredicate(i32),
    Constant(u32),
    Variable(u32),
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Subscript digits following an identifier letter; 0 for everything
    /// else.
    pub subscript: u32,
    pub offset: u32,
}

pub struct Lexer<'a> {
    notation: Notation,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, notation: Notation) -> Self {
        Self {
            notation,
            chars: input.char_indices().peekable(),
        }
    }

    fn classify(&self, c: char) -> Option<TokenKind> {
        if c == '(' {
            return Some(TokenKind::LParen);
        }
        if c == ')' {
            return Some(TokenKind::RParen);
        }
        if let Some(rank) = tables::rank_of(&tables::ATOMIC_LETTERS, c) {
            return Some(TokenKind::Atomic(rank));
        }
        if let Some(rank) = tables::rank_of(&tables::PREDICATE_LETTERS, c) {
            return Some(TokenKind::Predicate(rank));
        }
        if let Some(rank) = tables::rank_of(&tables::CONSTANT_LETTERS, c) {
            return Some(TokenKind::Constant(rank));
        }
        if let Some(rank) = tables::rank_of(&tables::VARIABLE_LETTERS, c) {
            return Some(TokenKind::Variable(rank));
        }
        for op in Operator::ALL {
            if tables::operator_glyph(self.notation, Charset::Ascii, op) == c.to_string() {
                return Some(TokenKind::Operator(op));
            }
        }
        for q in Quantifier::ALL {
            if tables::quantifier_glyph(self.notation, Charset::Ascii, q) == c.to_string() {
                return Some(TokenKind::Quantifier(q));
            }
        }
        None
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn read_digits(&mut self) -> u32 {
        let mut value: u32 = 0;
        let mut any = false;
        while let Some(&(_, c)) = self.chars.peek() {
            if let Some(d) = c.to_digit(10) {
                value = value.saturating_mul(10).saturating_add(d);
                any = true;
                self.chars.next();
            } else {
                break;
            }
        }
        let _ = any;
        value
    }

    fn consume_underscore(&mut self) -> bool {
        if let Some(&(_, '_')) = self.chars.peek() {
            self.chars.next();
            true
        } else {
            false
        }
    }

    /// Reads an identifier's trailing coordinates: `(tier, subscript)`.
    /// Legacy text has no tier — a bare digit run is the subscript, tier 0.
    /// Text with a wrapped index carries `_<tier>` or `_<tier>_<subscript>`
    /// (see `writer::render_coords`).
    fn read_coords(&mut self) -> (u32, u32) {
        if self.consume_underscore() {
            let tier = self.read_digits();
            let subscript = if self.consume_underscore() { self.read_digits() } else { 0 };
            (tier, subscript)
        } else {
            (0, self.read_digits())
        }
    }

    fn rebuild_identifier(kind: TokenKind, tier: u32, rank: u32) -> TokenKind {
        let index = rank + tier * tables::LETTER_COUNT;
        match kind {
            TokenKind::Atomic(_) => TokenKind::Atomic(index),
            TokenKind::Predicate(_) => TokenKind::Predicate(index),
            TokenKind::Constant(_) => TokenKind::Constant(index),
            TokenKind::Variable(_) => TokenKind::Variable(index),
            other => other,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        self.skip_whitespace();
        let Some(&(offset, c)) = self.chars.peek() else {
            return Ok(None);
        };

        if c == '∃' {
            let mut lookahead = self.chars.clone();
            lookahead.next();
            if matches!(lookahead.next(), Some((_, '!'))) {
                self.chars.next();
                self.chars.next();
                return Ok(Some(Token {
                    kind: TokenKind::SystemPredicate(EXISTENCE_INDEX),
                    subscript: 0,
                    offset: offset as u32,
                }));
            }
        }
        if c == '=' {
            self.chars.next();
            return Ok(Some(Token {
                kind: TokenKind::SystemPredicate(IDENTITY_INDEX),
                subscript: 0,
                offset: offset as u32,
            }));
        }

        let Some(kind) = self.classify(c) else {
            return Err(ParseError::unexpected_char(c, offset as u32));
        };
        self.chars.next();
        let (kind, subscript) = match kind {
            TokenKind::Atomic(rank)
            | TokenKind::Predicate(rank)
            | TokenKind::Constant(rank)
            | TokenKind::Variable(rank) => {
                let (tier, subscript) = self.read_coords();
                (Self::rebuild_identifier(kind, tier, rank), subscript)
            }
            _ => (kind, 0),
        };
        Ok(Some(Token {
            kind,
            subscript,
            offset: offset as u32,
        }))
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        while let Some(tok) = self.next_token()? {
            tokens.push(tok);
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_polish_atomic() {
        let tokens = Lexer::new("p1", Notation::Polish).tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Atomic(0));
        assert_eq!(tokens[0].subscript, 1);
    }

    #[test]
    fn tokenizes_polish_negation() {
        let tokens = Lexer::new("Np", Notation::Polish).tokenize().unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Operator(Operator::Negation));
        assert_eq!(tokens[1].kind, TokenKind::Atomic(0));
    }

    #[test]
    fn rejects_unknown_character() {
        let err = Lexer::new("p1 # q", Notation::Standard).tokenize().unwrap_err();
        assert_eq!(err.offset, 3);
    }

    #[test]
    fn tokenizes_wrapped_atomic_index() {
        let tokens = Lexer::new("p_1", Notation::Polish).tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Atomic(5));
        assert_eq!(tokens[0].subscript, 0);
    }

    #[test]
    fn tokenizes_wrapped_atomic_index_with_subscript() {
        let tokens = Lexer::new("p_1_3", Notation::Polish).tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Atomic(5));
        assert_eq!(tokens[0].subscript, 3);
    }

    #[test]
    fn tokenizes_existence_predicate() {
        let tokens = Lexer::new("∃!x", Notation::Standard).tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::SystemPredicate(EXISTENCE_INDEX));
    }

    #[test]
    fn lone_existential_glyph_without_bang_is_not_an_existence_predicate() {
        let err = Lexer::new("∃x", Notation::Standard).tokenize().unwrap_err();
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn tokenizes_identity_predicate() {
        let tokens = Lexer::new("=ab", Notation::Standard).tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::SystemPredicate(IDENTITY_INDEX));
    }
}
