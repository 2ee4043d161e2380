// ABOUTME: Error types for query manager startup
// ABOUTME: Wraps loader and tokenizer failures that abort the build phase

use thiserror::Error;

use crate::loader::LoaderError;
use crate::tokenizer::TokenizerError;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Failed to load query definitions: {0}")]
    Loader(#[from] LoaderError),

    #[error("Failed to compile placeholder pattern: {0}")]
    Tokenizer(#[from] TokenizerError),
}

pub type Result<T> = std::result::Result<T, StartupError>;
