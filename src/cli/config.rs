// ABOUTME: Configuration management for the dotquery application
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::manager::QueryConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Engine options; the explicit typed record consumed by the manager
    #[serde(default)]
    pub queries: QueryConfig,

    /// Definition files loaded when a command supplies none
    #[serde(default)]
    pub files: Vec<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let mut config: Config = serde_yaml::from_str(&contents)?;
            config.merge_env()?;
            Ok(config)
        } else {
            let mut config = Config::default();
            config.merge_env()?;
            Ok(config)
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = vec![
            PathBuf::from("dotquery.yaml"),
            PathBuf::from("dotquery.yml"),
            PathBuf::from(".dotquery.yaml"),
            PathBuf::from(".dotquery.yml"),
        ];

        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        // Return default path (may not exist)
        PathBuf::from("dotquery.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        if let Ok(prefix) = std::env::var("DOTQUERY_ID_PREFIX") {
            self.queries.query_id_prefix = prefix;
        }
        if let Ok(wrap) = std::env::var("DOTQUERY_STRING_WRAP") {
            self.queries.string_wrap_with = wrap;
        }
        if let Ok(trim) = std::env::var("DOTQUERY_TRIM_IDS") {
            self.queries.trim_id_whitespace = trim.parse()?;
        }
        if let Ok(pattern) = std::env::var("DOTQUERY_VAR_PATTERN") {
            self.queries.var_match_regex = pattern;
        }
        if let Ok(newline) = std::env::var("DOTQUERY_NEWLINE") {
            self.queries.new_line = newline;
        }

        // Logging configuration
        if let Ok(level) = std::env::var("DOTQUERY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DOTQUERY_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}
