// ABOUTME: Loader module for query definition files
// ABOUTME: Exports the definition loader and its error types

pub mod definitions;
pub mod error;

pub use definitions::{DefinitionLoader, DEFAULT_ID_PREFIX};
pub use error::{LoaderError, Result};
