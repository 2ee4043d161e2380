// ABOUTME: Manager module composing the engine components behind one facade
// ABOUTME: Exports the query manager, its configuration record, and startup errors

pub mod config;
pub mod error;
pub mod facade;

pub use config::QueryConfig;
pub use error::{Result, StartupError};
pub use facade::QueryManager;
