// ABOUTME: Token data structures for parsed query templates
// ABOUTME: Defines the Token sum type and the immutable TokenizedQuery

use serde::{Deserialize, Serialize};

/// One atomic unit of a parsed query template.
///
/// A token is exactly one of the three variants: literal text emitted
/// verbatim, a 1-based positional variable reference, or a named variable
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Token {
    /// Exact text to emit verbatim
    Literal(String),
    /// Reference to the Nth supplied positional argument (1-based)
    Positional(usize),
    /// Reference to a supplied argument by name
    Named(String),
}

impl Token {
    /// Canonical source form of this token, using the default `${...}`
    /// placeholder syntax for variables. Concatenating the source form of
    /// every token in a query reconstructs the template body it was parsed
    /// from, modulo newline normalization.
    pub fn to_source(&self) -> String {
        match self {
            Token::Literal(text) => text.clone(),
            Token::Positional(index) => format!("${{{}}}", index),
            Token::Named(name) => format!("${{{}}}", name),
        }
    }

    pub fn is_variable(&self) -> bool {
        !matches!(self, Token::Literal(_))
    }
}

/// A named query template parsed into its ordered token sequence.
///
/// Built once during registry construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedQuery {
    id: String,
    tokens: Vec<Token>,
}

impl TokenizedQuery {
    pub fn new(id: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            id: id.into(),
            tokens,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Reconstruct the template body from the token sequence
    pub fn to_source(&self) -> String {
        self.tokens.iter().map(Token::to_source).collect()
    }

    /// Names referenced by `Named` tokens, in order of appearance (with
    /// repeats)
    pub fn named_refs(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Named(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Highest positional index referenced by the template, or zero when it
    /// has no positional variables
    pub fn max_positional(&self) -> usize {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Positional(index) => Some(*index),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }
}
