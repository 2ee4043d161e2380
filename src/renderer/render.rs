// ABOUTME: Renderer that substitutes argument values into tokenized queries
// ABOUTME: Walks a token sequence and produces the finished query string

use std::collections::HashMap;

use super::error::{RenderError, Result};
use super::value::QueryValue;
use crate::registry::QueryRegistry;
use crate::tokenizer::Token;

/// Renders a registered query with positional and named arguments.
///
/// Rendering is all-or-nothing: either the complete string is returned or an
/// error, never partial output. The registry is only read, so any number of
/// render calls may run concurrently.
#[derive(Debug, Clone)]
pub struct Renderer {
    wrap: String,
}

impl Renderer {
    pub fn new(wrap: impl Into<String>) -> Self {
        Self { wrap: wrap.into() }
    }

    pub fn render(
        &self,
        registry: &QueryRegistry,
        id: &str,
        positional: &[QueryValue],
        named: &HashMap<String, QueryValue>,
    ) -> Result<String> {
        let query = registry.get(id).ok_or_else(|| RenderError::UnknownQuery {
            id: id.to_string(),
        })?;

        let mut output = String::new();
        for token in query.tokens() {
            match token {
                Token::Literal(text) => output.push_str(text),
                Token::Positional(index) => {
                    let value = index
                        .checked_sub(1)
                        .and_then(|i| positional.get(i))
                        .ok_or_else(|| RenderError::MissingPositional {
                            id: id.to_string(),
                            index: *index,
                        })?;
                    output.push_str(&value.render(&self.wrap));
                }
                Token::Named(name) => {
                    let value = named.get(name).ok_or_else(|| RenderError::MissingNamed {
                        id: id.to_string(),
                        name: name.clone(),
                    })?;
                    output.push_str(&value.render(&self.wrap));
                }
            }
        }

        Ok(output)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new("'")
    }
}
