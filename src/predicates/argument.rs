//! An argument: the premises and conclusion a tableau tries to refute.

use crate::lexicon::Sentence;

/// `(conclusion, premises, title?)` — the unit of work a tableau is built
/// from (spec §3).
#[derive(Debug, Clone)]
pub struct Argument {
    pub conclusion: Sentence,
    pub premises: Vec<Sentence>,
    pub title: Option<String>,
}

impl Argument {
    pub fn new(conclusion: Sentence, premises: Vec<Sentence>) -> Self {
        Self {
            conclusion,
            premises,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// All sentences in trunk-build order: premises, then the conclusion.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.premises.iter().chain(std::iter::once(&self.conclusion))
    }
}
