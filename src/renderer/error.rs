// ABOUTME: Error types for query rendering
// ABOUTME: Defines per-call failures surfaced to the render caller

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Unknown query id '{id}'")]
    UnknownQuery { id: String },

    #[error("Missing positional argument ${index} for query '{id}'")]
    MissingPositional { id: String, index: usize },

    #[error("Missing named argument '{name}' for query '{id}'")]
    MissingNamed { id: String, name: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;
