// ABOUTME: Error types for template tokenization
// ABOUTME: Defines failures surfaced while compiling the placeholder pattern

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Invalid placeholder pattern: {0}")]
    PatternCompile(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, TokenizerError>;
