// ABOUTME: Query manager facade composing loader, tokenizer, registry, and renderer
// ABOUTME: Owns the shared read-only registry handle and the public engine API

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::config::QueryConfig;
use super::error::{Result, StartupError};
use crate::loader::DefinitionLoader;
use crate::registry::QueryRegistry;
use crate::renderer::{QueryValue, RenderError, Renderer};
use crate::tokenizer::{Token, Tokenizer};

/// The public contract of the template engine.
///
/// Construction compiles the placeholder pattern; `load_queries` runs the
/// single synchronous build phase and swaps in the finished registry as one
/// shared read-only handle. Rendering never mutates anything, so the manager
/// can be shared freely once loaded.
#[derive(Debug, Clone)]
pub struct QueryManager {
    config: QueryConfig,
    loader: DefinitionLoader,
    tokenizer: Tokenizer,
    renderer: Renderer,
    registry: Arc<QueryRegistry>,
}

impl QueryManager {
    /// Create a manager with the given options. Fails when the placeholder
    /// pattern does not compile.
    pub fn new(config: QueryConfig) -> Result<Self> {
        let tokenizer = Tokenizer::new(&config.var_match_regex, config.new_line.as_str())
            .map_err(StartupError::Tokenizer)?;
        let loader =
            DefinitionLoader::new(config.query_id_prefix.as_str(), config.trim_id_whitespace);
        let renderer = Renderer::new(config.string_wrap_with.as_str());

        debug!(
            "Query manager configured (prefix='{}', pattern='{}')",
            config.query_id_prefix, config.var_match_regex
        );

        Ok(Self {
            config,
            loader,
            tokenizer,
            renderer,
            registry: Arc::new(QueryRegistry::default()),
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(QueryConfig::default())
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Load definition files and rebuild the registry from scratch. Any
    /// loader failure aborts the whole build and leaves the previously
    /// loaded registry serving.
    pub fn load_queries<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<()> {
        let definitions = self.loader.load(paths)?;
        let registry = QueryRegistry::build(definitions, &self.tokenizer);

        info!("Query registry built with {} entries", registry.len());
        self.registry = Arc::new(registry);
        Ok(())
    }

    /// Load embedded definition text with the same rules as `load_queries`
    pub fn load_queries_from_str(&mut self, source: &str) -> Result<()> {
        let definitions = self.loader.parse_str(source, "<embedded>")?;
        let registry = QueryRegistry::build(definitions, &self.tokenizer);

        info!("Query registry built with {} entries", registry.len());
        self.registry = Arc::new(registry);
        Ok(())
    }

    /// Render a registered query with the supplied arguments
    pub fn render(
        &self,
        id: &str,
        positional: &[QueryValue],
        named: &HashMap<String, QueryValue>,
    ) -> std::result::Result<String, RenderError> {
        self.renderer.render(&self.registry, id, positional, named)
    }

    /// Token sequence for a registered query, for introspection and testing
    pub fn tokens_for(&self, id: &str) -> Option<&[Token]> {
        self.registry.tokens(id)
    }

    /// All registered ids, in definition order
    pub fn ids_in_use(&self) -> Vec<&str> {
        self.registry.ids()
    }

    pub fn query_count(&self) -> usize {
        self.registry.len()
    }

    /// Shared read-only handle to the current registry. Handed-out handles
    /// keep serving the registry they point at across reloads.
    pub fn registry(&self) -> Arc<QueryRegistry> {
        Arc::clone(&self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFINITIONS: &str = "\
-- name: all_artists
SELECT * FROM artist

-- name: insert_artist
INSERT INTO artist (name, genre, country) VALUES (${name}, ${genre}, ${country})
";

    #[test]
    fn test_load_and_render() {
        let mut manager = QueryManager::with_defaults().unwrap();
        manager.load_queries_from_str(DEFINITIONS).unwrap();

        assert_eq!(manager.query_count(), 2);
        assert_eq!(manager.ids_in_use(), vec!["all_artists", "insert_artist"]);

        let named: HashMap<String, QueryValue> = [
            ("name".to_string(), QueryValue::from("Mingus")),
            ("genre".to_string(), QueryValue::from("jazz")),
            ("country".to_string(), QueryValue::from("US")),
        ]
        .into_iter()
        .collect();

        let output = manager.render("insert_artist", &[], &named).unwrap();
        assert_eq!(
            output,
            "INSERT INTO artist (name, genre, country) VALUES ('Mingus', 'jazz', 'US')"
        );
    }

    #[test]
    fn test_invalid_pattern_fails_construction() {
        let config = QueryConfig {
            var_match_regex: r"\$\{(".to_string(),
            ..QueryConfig::default()
        };
        assert!(matches!(
            QueryManager::new(config),
            Err(StartupError::Tokenizer(_))
        ));
    }

    #[test]
    fn test_failed_reload_keeps_previous_registry() {
        let mut manager = QueryManager::with_defaults().unwrap();
        manager.load_queries_from_str(DEFINITIONS).unwrap();
        assert_eq!(manager.query_count(), 2);

        let result = manager.load_queries_from_str("orphan content without a marker\n");
        assert!(result.is_err());
        assert_eq!(manager.query_count(), 2);
        assert!(manager.tokens_for("all_artists").is_some());
    }

    #[test]
    fn test_registry_handle_survives_reload() {
        let mut manager = QueryManager::with_defaults().unwrap();
        manager.load_queries_from_str(DEFINITIONS).unwrap();

        let handle = manager.registry();
        manager
            .load_queries_from_str("-- name: only_one\nSELECT 1\n")
            .unwrap();

        // The old handle still serves the registry it was taken from
        assert_eq!(handle.len(), 2);
        assert_eq!(manager.query_count(), 1);
    }

    #[test]
    fn test_tokens_for_absent_id() {
        let manager = QueryManager::with_defaults().unwrap();
        assert!(manager.tokens_for("missing").is_none());
    }
}
