// ABOUTME: Immutable registry mapping query ids to their tokenized templates
// ABOUTME: Built once from loaded definitions and read-only for the process lifetime

use indexmap::IndexMap;

use crate::tokenizer::{Token, TokenizedQuery, Tokenizer};

/// The process-lifetime mapping from query id to its parsed token sequence.
///
/// `build` is the only mutation point. Once constructed the registry is
/// read-only and safe for unlimited concurrent readers; lookups borrow the
/// stored tokens rather than copying them.
#[derive(Debug, Clone, Default)]
pub struct QueryRegistry {
    queries: IndexMap<String, TokenizedQuery>,
}

impl QueryRegistry {
    /// Tokenize every (id, body) pair and retain the results in definition
    /// order.
    pub fn build(definitions: IndexMap<String, String>, tokenizer: &Tokenizer) -> Self {
        let queries = definitions
            .into_iter()
            .map(|(id, body)| {
                let tokens = tokenizer.tokenize(&body);
                let query = TokenizedQuery::new(id.clone(), tokens);
                (id, query)
            })
            .collect();

        Self { queries }
    }

    /// Absence is a normal outcome, never a failure
    pub fn get(&self, id: &str) -> Option<&TokenizedQuery> {
        self.queries.get(id)
    }

    pub fn tokens(&self, id: &str) -> Option<&[Token]> {
        self.queries.get(id).map(TokenizedQuery::tokens)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.queries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// All registered ids, in definition order
    pub fn ids(&self) -> Vec<&str> {
        self.queries.keys().map(String::as_str).collect()
    }
}
