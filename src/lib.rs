// ABOUTME: Main library module for the dotquery template engine
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod loader;
pub mod manager;
pub mod registry;
pub mod renderer;
pub mod tokenizer;

// Re-export commonly used types
pub use loader::{DefinitionLoader, LoaderError};
pub use manager::{QueryConfig, QueryManager, StartupError};
pub use registry::QueryRegistry;
pub use renderer::{QueryValue, RenderError, Renderer};
pub use tokenizer::{Token, TokenizedQuery, Tokenizer, TokenizerError};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
