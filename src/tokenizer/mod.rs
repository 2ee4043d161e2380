// ABOUTME: Tokenizer module for the dotquery template engine
// ABOUTME: Exports the token data model and the placeholder scanner

pub mod error;
pub mod scanner;
pub mod token;

pub use error::{Result, TokenizerError};
pub use scanner::{Tokenizer, DEFAULT_NEWLINE, DEFAULT_VAR_PATTERN};
pub use token::{Token, TokenizedQuery};
