// ABOUTME: Definition loader that splits query files into named template bodies
// ABOUTME: Reads files in order and produces an insertion-ordered id-to-body map

use indexmap::IndexMap;
use std::path::Path;
use tracing::{debug, info};

use super::error::{LoaderError, Result};

/// Default marker prefix introducing a named query block
pub const DEFAULT_ID_PREFIX: &str = "-- name:";

/// Reads definition files and splits them into raw (id, body) pairs.
///
/// A definition file holds one or more blocks. A block starts at a marker
/// line (a line beginning with the configured prefix, the remainder of the
/// line being the identifier) and its body runs up to the next marker line
/// or end of file.
#[derive(Debug, Clone)]
pub struct DefinitionLoader {
    id_prefix: String,
    trim_ids: bool,
}

impl DefinitionLoader {
    pub fn new(id_prefix: impl Into<String>, trim_ids: bool) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            trim_ids,
        }
    }

    /// Read each file fully, in the order supplied, and accumulate every
    /// (id, body) pair. Duplicate identifiers, within or across files, fail
    /// the whole load.
    pub fn load<P: AsRef<Path>>(&self, paths: &[P]) -> Result<IndexMap<String, String>> {
        let mut definitions = IndexMap::new();

        for path in paths {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path).map_err(|source| LoaderError::Io {
                path: path.to_path_buf(),
                source,
            })?;

            let before = definitions.len();
            self.parse_source(&content, path, &mut definitions)?;
            debug!(
                "Loaded {} definitions from {}",
                definitions.len() - before,
                path.display()
            );
        }

        info!(
            "Loaded {} query definitions from {} file(s)",
            definitions.len(),
            paths.len()
        );
        Ok(definitions)
    }

    /// Split in-memory definition text using the same rules as `load`.
    /// `origin` labels the source in error messages.
    pub fn parse_str(&self, source: &str, origin: &str) -> Result<IndexMap<String, String>> {
        let mut definitions = IndexMap::new();
        self.parse_source(source, Path::new(origin), &mut definitions)?;
        Ok(definitions)
    }

    fn parse_source(
        &self,
        content: &str,
        path: &Path,
        definitions: &mut IndexMap<String, String>,
    ) -> Result<()> {
        let mut current: Option<(String, Vec<&str>)> = None;

        for (line_no, line) in content.lines().enumerate() {
            if let Some(rest) = line.strip_prefix(self.id_prefix.as_str()) {
                if let Some((id, body)) = current.take() {
                    self.insert(definitions, id, body, path)?;
                }

                let id = if self.trim_ids { rest.trim() } else { rest };
                if id.is_empty() {
                    return Err(self.malformed(
                        path,
                        format!("marker on line {} has an empty identifier", line_no + 1),
                    ));
                }
                current = Some((id.to_string(), Vec::new()));
            } else if let Some((_, body)) = current.as_mut() {
                body.push(line);
            } else if !line.trim().is_empty() {
                // Content that precedes the first marker belongs to no query
                return Err(self.malformed(
                    path,
                    format!(
                        "content on line {} precedes the first '{}' marker",
                        line_no + 1,
                        self.id_prefix
                    ),
                ));
            }
        }

        if let Some((id, body)) = current.take() {
            self.insert(definitions, id, body, path)?;
        }

        Ok(())
    }

    fn insert(
        &self,
        definitions: &mut IndexMap<String, String>,
        id: String,
        mut body: Vec<&str>,
        path: &Path,
    ) -> Result<()> {
        // Trailing blank lines come from block separation and the final file
        // newline, not from the template itself
        while body.last().is_some_and(|line| line.trim().is_empty()) {
            body.pop();
        }

        if definitions.contains_key(&id) {
            return Err(LoaderError::DuplicateId {
                id,
                path: path.to_path_buf(),
            });
        }

        definitions.insert(id, body.join("\n"));
        Ok(())
    }

    fn malformed(&self, path: &Path, reason: String) -> LoaderError {
        LoaderError::Malformed {
            path: path.to_path_buf(),
            reason,
        }
    }
}

impl Default for DefinitionLoader {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX, true)
    }
}
