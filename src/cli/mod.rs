// ABOUTME: CLI module for the dotquery application
// ABOUTME: Exports argument parsing, configuration, and command orchestration

pub mod app;
pub mod args;
pub mod commands;
pub mod config;

pub use app::App;
pub use args::{Args, Commands};
pub use config::Config;
