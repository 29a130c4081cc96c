//! The two supported notations.

/// Which grammar a sentence string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Prefix, no parentheses — the operator symbol immediately precedes
    /// its operands.
    Polish,
    /// Infix with mandatory parentheses around binary operators; unary
    /// operators and quantifiers are prefix.
    Standard,
}

impl Notation {
    pub const fn name(self) -> &'static str {
        match self {
            Notation::Polish => "polish",
            Notation::Standard => "standard",
        }
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Notation {
    type Err = super::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "polish" => Ok(Notation::Polish),
            "standard" => Ok(Notation::Standard),
            other => Err(super::ParseError::unknown_notation(other)),
        }
    }
}
