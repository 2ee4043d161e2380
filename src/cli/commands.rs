// ABOUTME: Command implementations for the dotquery CLI
// ABOUTME: Handles execution of list, check, and render commands

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use super::args::{coerce_value, Args};
use super::config::Config;
use crate::manager::QueryManager;

/// List the query ids defined in the given files
pub fn list_queries(files: Vec<PathBuf>, config: &Config) -> Result<()> {
    let manager = load_manager(&files, config)?;

    for id in manager.ids_in_use() {
        let tokens = manager
            .tokens_for(id)
            .map(|tokens| tokens.len())
            .unwrap_or(0);
        println!("{} ({} tokens)", id, tokens);
    }

    info!("Listed {} queries", manager.query_count());
    Ok(())
}

/// Load definition files and report whether they are well formed
pub fn check_queries(files: Vec<PathBuf>, config: &Config) -> Result<()> {
    let manager = load_manager(&files, config)?;

    println!(
        "✓ {} query definition(s) loaded from {} file(s)",
        manager.query_count(),
        files.len()
    );

    info!("Definition check completed successfully");
    Ok(())
}

/// Render one query and print it to stdout
pub fn render_query(
    id: String,
    files: Vec<PathBuf>,
    positional: Vec<String>,
    vars: Vec<String>,
    config: &Config,
) -> Result<()> {
    let manager = load_manager(&files, config)?;

    let positional: Vec<_> = positional.iter().map(|raw| coerce_value(raw)).collect();
    let named = Args::parse_variables(&vars)?;

    let output = manager
        .render(&id, &positional, &named)
        .map_err(|e| anyhow::anyhow!("Render failed: {}", e))?;

    println!("{}", output);
    Ok(())
}

fn load_manager(files: &[PathBuf], config: &Config) -> Result<QueryManager> {
    let mut manager = QueryManager::new(config.queries.clone())
        .map_err(|e| anyhow::anyhow!("Failed to configure query manager: {}", e))?;

    // Command-line files win over the configured defaults
    if files.is_empty() {
        manager.load_queries(&config.files)?;
    } else {
        manager.load_queries(files)?;
    }

    info!("Loaded {} queries", manager.query_count());
    Ok(manager)
}
