// ABOUTME: Argument value model and the quoting policy applied during rendering
// ABOUTME: Text values are wrapped and delimiter-escaped; other types render unwrapped

use serde::{Deserialize, Serialize};

/// A value substituted for a variable token.
///
/// The wrapping policy is chosen by the value's type, never by sniffing its
/// text: `Text` is always wrapped with the configured delimiter, everything
/// else renders in canonical textual form unwrapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl QueryValue {
    /// Render this value with the given wrapping delimiter. Every occurrence
    /// of the delimiter inside a text value is doubled before wrapping, so
    /// the delimiter can never terminate the value early.
    pub fn render(&self, wrap: &str) -> String {
        match self {
            QueryValue::Text(text) => {
                if wrap.is_empty() {
                    text.clone()
                } else {
                    let doubled = format!("{}{}", wrap, wrap);
                    format!("{}{}{}", wrap, text.replace(wrap, &doubled), wrap)
                }
            }
            QueryValue::Integer(n) => n.to_string(),
            QueryValue::Float(f) => f.to_string(),
            QueryValue::Bool(b) => b.to_string(),
            QueryValue::Null => "NULL".to_string(),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Integer(value as i64)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Integer(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<serde_json::Value> for QueryValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => QueryValue::Null,
            serde_json::Value::Bool(b) => QueryValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    QueryValue::Integer(i)
                } else {
                    QueryValue::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => QueryValue::Text(s),
            // Arrays and objects carry over as their JSON text
            other => QueryValue::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_wrapped() {
        assert_eq!(QueryValue::from("jazz").render("'"), "'jazz'");
    }

    #[test]
    fn test_delimiter_inside_text_is_doubled() {
        assert_eq!(QueryValue::from("O'Brien").render("'"), "'O''Brien'");
        assert_eq!(QueryValue::from("a'b'c").render("'"), "'a''b''c'");
    }

    #[test]
    fn test_numeric_text_stays_wrapped() {
        assert_eq!(QueryValue::from("42").render("'"), "'42'");
    }

    #[test]
    fn test_non_text_values_render_unwrapped() {
        assert_eq!(QueryValue::from(42).render("'"), "42");
        assert_eq!(QueryValue::from(2.5).render("'"), "2.5");
        assert_eq!(QueryValue::from(true).render("'"), "true");
        assert_eq!(QueryValue::Null.render("'"), "NULL");
    }

    #[test]
    fn test_empty_wrap_disables_quoting() {
        assert_eq!(QueryValue::from("raw").render(""), "raw");
    }

    #[test]
    fn test_multi_char_delimiter() {
        assert_eq!(QueryValue::from("a$$b").render("$$"), "$$a$$$$b$$");
    }

    #[test]
    fn test_from_json_values() {
        use serde_json::json;

        assert_eq!(QueryValue::from(json!("jazz")), QueryValue::from("jazz"));
        assert_eq!(QueryValue::from(json!(7)), QueryValue::Integer(7));
        assert_eq!(QueryValue::from(json!(1.5)), QueryValue::Float(1.5));
        assert_eq!(QueryValue::from(json!(false)), QueryValue::Bool(false));
        assert_eq!(QueryValue::from(json!(null)), QueryValue::Null);
    }
}
