// ABOUTME: Error types for definition file loading
// ABOUTME: Defines failures surfaced while reading and splitting query files

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read query file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed query file '{path}': {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Duplicate query id '{id}' in '{path}'")]
    DuplicateId { id: String, path: PathBuf },
}

pub type Result<T> = std::result::Result<T, LoaderError>;
