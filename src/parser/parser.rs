//! Recursive-descent parser, shared between the Polish and Standard
//! grammars; the two only differ in how binary operators and quantifier
//! bodies are delimited (spec §4.1).

use crate::lexicon::{LexiconError, Parameter, Predicate, Sentence, Variable};
use crate::predicates::PredicateStore;

use super::error::ParseError;
use super::lexer::{Lexer, Token, TokenKind};
use super::notation::Notation;

pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    notation: Notation,
    predicates: &'a PredicateStore,
}

impl<'a> Parser<'a> {
    pub fn new(
        input: &str,
        notation: Notation,
        predicates: &'a PredicateStore,
    ) -> Result<Self, ParseError> {
        let tokens = Lexer::new(input, notation).tokenize()?;
        Ok(Self {
            tokens,
            pos: 0,
            notation,
            predicates,
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn end_offset(&self) -> u32 {
        self.tokens.last().map(|t| t.offset + 1).unwrap_or(0)
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        let tok = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or_else(|| ParseError::unexpected_end(self.end_offset()))?;
        self.pos += 1;
        Ok(tok)
    }

    fn resolve_predicate(&self, index: i32, subscript: u32, offset: u32) -> Result<Predicate, ParseError> {
        self.predicates
            .get(index, subscript)
            .ok_or_else(|| ParseError::missing_predicate(index, subscript, offset))
    }

    fn parse_param(&mut self) -> Result<Parameter, ParseError> {
        let tok = self.advance()?;
        match tok.kind {
            TokenKind::Constant(rank) => Ok(Parameter::Constant(crate::lexicon::Constant::new(
                rank,
                tok.subscript,
            ))),
            TokenKind::Variable(rank) => Ok(Parameter::Variable(Variable::new(rank, tok.subscript))),
            _ => Err(ParseError::unexpected_token("expected a parameter", tok.offset)),
        }
    }

    fn parse_predicated(&mut self, index: i32, subscript: u32, offset: u32) -> Result<Sentence, ParseError> {
        let predicate = self.resolve_predicate(index, subscript, offset)?;
        let mut params = Vec::with_capacity(predicate.arity);
        for _ in 0..predicate.arity {
            params.push(self.parse_param()?);
        }
        Sentence::predicated(predicate, params).map_err(|e| ParseError::lexicon(e, offset))
    }

    fn quantify(
        &self,
        quantifier: crate::lexicon::Quantifier,
        variable: Variable,
        body: Sentence,
        offset: u32,
    ) -> Result<Sentence, ParseError> {
        Sentence::quantified(quantifier, variable, body).map_err(|e| match &e {
            LexiconError::UnboundVariable { .. } | LexiconError::BoundVariable { .. } => {
                ParseError::lexicon(e, offset)
            }
            other => ParseError::lexicon(other.clone(), offset),
        })
    }

    fn parse_sentence(&mut self) -> Result<Sentence, ParseError> {
        match self.notation {
            Notation::Polish => self.parse_polish(),
            Notation::Standard => self.parse_standard(),
        }
    }

    fn parse_polish(&mut self) -> Result<Sentence, ParseError> {
        let tok = self.advance()?;
        match tok.kind {
            TokenKind::Atomic(rank) => Ok(Sentence::atomic(rank, tok.subscript)),
            TokenKind::Predicate(rank) => self.parse_predicated(rank as i32, tok.subscript, tok.offset),
            TokenKind::SystemPredicate(index) => self.parse_predicated(index, tok.subscript, tok.offset),
            TokenKind::Operator(op) => {
                let mut operands = Vec::with_capacity(op.arity());
                for _ in 0..op.arity() {
                    operands.push(self.parse_polish()?);
                }
                Ok(Sentence::operated(op, operands))
            }
            TokenKind::Quantifier(q) => {
                let var_tok = self.advance()?;
                let TokenKind::Variable(rank) = var_tok.kind else {
                    return Err(ParseError::unexpected_token(
                        "expected a variable after quantifier",
                        var_tok.offset,
                    ));
                };
                let variable = Variable::new(rank, var_tok.subscript);
                let body = self.parse_polish()?;
                self.quantify(q, variable, body, tok.offset)
            }
            TokenKind::Constant(_) | TokenKind::Variable(_) | TokenKind::LParen | TokenKind::RParen => {
                Err(ParseError::unexpected_token("expected a sentence", tok.offset))
            }
        }
    }

    fn parse_standard(&mut self) -> Result<Sentence, ParseError> {
        let tok = self.peek().copied().ok_or_else(|| ParseError::unexpected_end(self.end_offset()))?;
        match tok.kind {
            TokenKind::LParen => {
                self.advance()?;
                let left = self.parse_standard()?;
                let op_tok = self.advance()?;
                let TokenKind::Operator(op) = op_tok.kind else {
                    return Err(ParseError::unexpected_token(
                        "expected a binary operator",
                        op_tok.offset,
                    ));
                };
                if !op.is_binary() {
                    return Err(ParseError::unexpected_token(
                        "expected a binary operator",
                        op_tok.offset,
                    ));
                }
                let right = self.parse_standard()?;
                let close = self.advance()?;
                if close.kind != TokenKind::RParen {
                    return Err(ParseError::unmatched_paren(close.offset));
                }
                Ok(Sentence::operated(op, vec![left, right]))
            }
            TokenKind::Operator(op) if op.is_unary() => {
                self.advance()?;
                let operand = self.parse_standard()?;
                Ok(Sentence::operated(op, vec![operand]))
            }
            TokenKind::Quantifier(q) => {
                self.advance()?;
                let var_tok = self.advance()?;
                let TokenKind::Variable(rank) = var_tok.kind else {
                    return Err(ParseError::unexpected_token(
                        "expected a variable after quantifier",
                        var_tok.offset,
                    ));
                };
                let variable = Variable::new(rank, var_tok.subscript);
                let body = self.parse_standard()?;
                self.quantify(q, variable, body, tok.offset)
            }
            TokenKind::Atomic(rank) => {
                self.advance()?;
                Ok(Sentence::atomic(rank, tok.subscript))
            }
            TokenKind::Predicate(rank) => {
                self.advance()?;
                self.parse_predicated(rank as i32, tok.subscript, tok.offset)
            }
            TokenKind::SystemPredicate(index) => {
                self.advance()?;
                self.parse_predicated(index, tok.subscript, tok.offset)
            }
            TokenKind::Operator(_) | TokenKind::Constant(_) | TokenKind::Variable(_) | TokenKind::RParen => {
                Err(ParseError::unexpected_token("expected a sentence", tok.offset))
            }
        }
    }

    /// Parse exactly one sentence, requiring the whole input to be
    /// consumed and the result to be closed (no free variables).
    pub fn parse(mut self) -> Result<Sentence, ParseError> {
        let sentence = self.parse_sentence()?;
        if let Some(tok) = self.peek() {
            return Err(ParseError::unexpected_token("trailing input", tok.offset));
        }
        if let Some(&variable) = sentence.free_variables().iter().next() {
            return Err(ParseError::lexicon(
                LexiconError::FreeVariableAtTopLevel { variable },
                self.end_offset(),
            ));
        }
        Ok(sentence)
    }
}

/// Parse `input` as a single sentence under `notation`, with `predicates`
/// resolving predicate symbols to their declared arity.
pub fn parse(input: &str, notation: Notation, predicates: &PredicateStore) -> Result<Sentence, ParseError> {
    Parser::new(input, notation, predicates)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_polish_material_conditional() {
        let store = PredicateStore::new();
        let s = parse("Cpq", Notation::Polish, &store).unwrap();
        assert_eq!(s.operator(), Some(crate::lexicon::Operator::MaterialConditional));
        assert_eq!(s.operands(), &[Sentence::atomic(0, 0), Sentence::atomic(1, 0)]);
    }

    #[test]
    fn parses_standard_negation() {
        let store = PredicateStore::new();
        let s = parse("~p", Notation::Standard, &store).unwrap();
        assert!(s.is_negated());
        assert_eq!(s.negatum().unwrap(), &Sentence::atomic(0, 0));
    }

    #[test]
    fn parses_standard_conjunction_requires_parens() {
        let store = PredicateStore::new();
        let err = parse("p&q", Notation::Standard, &store).unwrap_err();
        assert_eq!(err.offset, 1);
    }

    #[test]
    fn rejects_free_variable_at_top_level() {
        let mut store = PredicateStore::new();
        store.declare(0, 0, 1).unwrap();
        let err = parse("Fx", Notation::Polish, &store).unwrap_err();
        assert_eq!(err.code, super::super::error::ErrorCode::E0302);
    }

    #[test]
    fn parses_quantified_sentence() {
        let mut store = PredicateStore::new();
        store.declare(0, 0, 1).unwrap();
        let s = parse("SxFx", Notation::Polish, &store).unwrap();
        assert!(s.is_quantified());
    }

    #[test]
    fn parses_existence_predicate() {
        let store = PredicateStore::new();
        let s = parse("∃!a", Notation::Standard, &store).unwrap();
        assert_eq!(s.predicate(), Some(Predicate::existence()));
    }

    #[test]
    fn parses_identity_predicate() {
        let store = PredicateStore::new();
        let s = parse("=ab", Notation::Standard, &store).unwrap();
        assert_eq!(s.predicate(), Some(Predicate::identity()));
    }

    #[test]
    fn parses_atomic_with_wrapped_index() {
        let store = PredicateStore::new();
        let s = parse("p_1", Notation::Polish, &store).unwrap();
        assert_eq!(s, Sentence::atomic(5, 0));
    }
}
