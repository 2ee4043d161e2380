// ABOUTME: Configuration record for the query template engine
// ABOUTME: Explicit typed options populated by serde, fixed for the process lifetime

use serde::{Deserialize, Serialize};

use crate::loader::DEFAULT_ID_PREFIX;
use crate::tokenizer::{DEFAULT_NEWLINE, DEFAULT_VAR_PATTERN};

/// The five recognized engine options. All are fixed for the process
/// lifetime once a `QueryManager` is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Marker prefix introducing a named query block in definition files
    #[serde(default = "default_id_prefix")]
    pub query_id_prefix: String,

    /// Delimiter wrapped around text values during rendering
    #[serde(default = "default_string_wrap")]
    pub string_wrap_with: String,

    /// Strip surrounding whitespace from identifiers on marker lines
    #[serde(default = "default_trim_ids")]
    pub trim_id_whitespace: bool,

    /// Placeholder pattern; the first capture group is the variable reference
    #[serde(default = "default_var_pattern")]
    pub var_match_regex: String,

    /// Canonical line terminator for literal text
    #[serde(default = "default_newline")]
    pub new_line: String,
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

fn default_string_wrap() -> String {
    "'".to_string()
}

fn default_trim_ids() -> bool {
    true
}

fn default_var_pattern() -> String {
    DEFAULT_VAR_PATTERN.to_string()
}

fn default_newline() -> String {
    DEFAULT_NEWLINE.to_string()
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            query_id_prefix: default_id_prefix(),
            string_wrap_with: default_string_wrap(),
            trim_id_whitespace: default_trim_ids(),
            var_match_regex: default_var_pattern(),
            new_line: default_newline(),
        }
    }
}
