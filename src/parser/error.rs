//! Positioned parse errors.

use thiserror::Error;

/// Coarse category of a [`ParseError`], following the teacher's `E0xxx`
/// code-range convention (lexical / structural / semantic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Character not recognized by the notation's glyph table.
    E0101,
    /// Input ended mid-expression.
    E0102,
    /// A binary operator's parenthesization was missing or mismatched.
    E0201,
    /// A token appeared where the grammar didn't expect one.
    E0202,
    /// A predicate symbol was used with no declared arity.
    E0301,
    /// A quantifier body did not bind its variable, or shadowed one.
    E0302,
    /// Unknown notation name.
    E0901,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0101 => "E0101",
            ErrorCode::E0102 => "E0102",
            ErrorCode::E0201 => "E0201",
            ErrorCode::E0202 => "E0202",
            ErrorCode::E0301 => "E0301",
            ErrorCode::E0302 => "E0302",
            ErrorCode::E0901 => "E0901",
        }
    }
}

/// A parse failure, positioned at the byte offset where it was detected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{code:?} at offset {offset}: {message}")]
pub struct ParseError {
    pub message: String,
    pub offset: u32,
    pub code: ErrorCode,
}

impl ParseError {
    pub fn new(message: impl Into<String>, offset: u32, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            offset,
            code,
        }
    }

    pub fn unexpected_char(c: char, offset: u32) -> Self {
        Self::new(format!("unexpected character {c:?}"), offset, ErrorCode::E0101)
    }

    pub fn unexpected_end(offset: u32) -> Self {
        Self::new("unexpected end of input", offset, ErrorCode::E0102)
    }

    pub fn unmatched_paren(offset: u32) -> Self {
        Self::new("unmatched parenthesis", offset, ErrorCode::E0201)
    }

    pub fn unexpected_token(found: impl Into<String>, offset: u32) -> Self {
        Self::new(format!("unexpected token {}", found.into()), offset, ErrorCode::E0202)
    }

    pub fn missing_predicate(index: i32, subscript: u32, offset: u32) -> Self {
        Self::new(
            format!("predicate ({index}, {subscript}) has no declared arity"),
            offset,
            ErrorCode::E0301,
        )
    }

    pub fn lexicon(err: crate::lexicon::LexiconError, offset: u32) -> Self {
        Self::new(err.to_string(), offset, ErrorCode::E0302)
    }

    pub fn unknown_notation(name: &str) -> Self {
        Self::new(format!("unknown notation {name:?}"), 0, ErrorCode::E0901)
    }
}
