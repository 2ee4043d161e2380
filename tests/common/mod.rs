// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for building definition files in temp dirs

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builds a definition file body from (id, query) pairs using the default
/// `-- name:` marker prefix
pub struct QueryFileBuilder {
    blocks: Vec<(String, String)>,
}

impl QueryFileBuilder {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn with_query(mut self, id: &str, body: &str) -> Self {
        self.blocks.push((id.to_string(), body.to_string()));
        self
    }

    pub fn build(&self) -> String {
        let mut content = String::new();
        for (id, body) in &self.blocks {
            content.push_str(&format!("-- name: {}\n{}\n\n", id, body));
        }
        content
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn query_file(&self, name: &str) -> PathBuf {
        self.path().join(format!("{}.sql", name))
    }

    pub fn write_query_file(&self, name: &str, builder: &QueryFileBuilder) -> PathBuf {
        let path = self.query_file(name);
        std::fs::write(&path, builder.build()).expect("Failed to write query file");
        path
    }

    pub fn write_raw_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.query_file(name);
        std::fs::write(&path, content).expect("Failed to write query file");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_file_builder() {
        let content = QueryFileBuilder::new()
            .with_query("first", "SELECT 1")
            .with_query("second", "SELECT 2")
            .build();

        assert!(content.contains("-- name: first\nSELECT 1"));
        assert!(content.contains("-- name: second\nSELECT 2"));
    }

    #[test]
    fn test_environment_setup() {
        let env = TestEnvironment::new();
        assert!(env.path().exists());

        let file = env.query_file("artists");
        assert!(file.to_string_lossy().contains("artists.sql"));
    }
}
