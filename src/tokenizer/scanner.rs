// ABOUTME: Scanner that splits raw template text into literal and variable tokens
// ABOUTME: Holds the compiled placeholder pattern and the canonical line terminator

use regex::Regex;

use super::error::{Result, TokenizerError};
use super::token::Token;

/// Default placeholder syntax: `${...}` with the inner text captured
pub const DEFAULT_VAR_PATTERN: &str = r"\$\{([^}]*)\}";

/// Default canonical line terminator for literal text
pub const DEFAULT_NEWLINE: &str = "\n";

/// Splits raw query text into an ordered token sequence.
///
/// The placeholder pattern is compiled once at construction; `tokenize` is a
/// pure function of its input afterwards and performs no I/O.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    newline: String,
}

impl Tokenizer {
    /// Compile the placeholder pattern. The pattern's first capture group is
    /// the variable reference; a pattern without capture groups uses the
    /// whole match instead.
    pub fn new(pattern: &str, newline: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(TokenizerError::PatternCompile)?;
        Ok(Self {
            pattern,
            newline: newline.into(),
        })
    }

    pub fn with_defaults() -> Self {
        // The default pattern is a valid regex, so this cannot fail
        Self::new(DEFAULT_VAR_PATTERN, DEFAULT_NEWLINE)
            .unwrap_or_else(|_| unreachable!("default placeholder pattern is valid"))
    }

    pub fn newline(&self) -> &str {
        &self.newline
    }

    /// Scan `raw` left to right, producing literal tokens for the text
    /// between placeholder matches and variable tokens for the matches
    /// themselves. Literal text is preserved byte-for-byte apart from line
    /// terminators, which are normalized to the configured newline.
    pub fn tokenize(&self, raw: &str) -> Vec<Token> {
        let normalized = self.normalize_newlines(raw);
        let mut tokens = Vec::new();
        let mut cursor = 0;

        for captures in self.pattern.captures_iter(&normalized) {
            let matched = captures
                .get(0)
                .unwrap_or_else(|| unreachable!("capture group 0 always exists"));

            if matched.start() > cursor {
                tokens.push(Token::Literal(
                    normalized[cursor..matched.start()].to_string(),
                ));
            }

            // Patterns without an explicit group classify on the full match
            let reference = captures
                .get(1)
                .map(|group| group.as_str())
                .unwrap_or_else(|| matched.as_str());
            tokens.push(classify_reference(reference));

            cursor = matched.end();
        }

        if cursor < normalized.len() {
            tokens.push(Token::Literal(normalized[cursor..].to_string()));
        }

        tokens
    }

    fn normalize_newlines(&self, raw: &str) -> String {
        let unix = raw.replace("\r\n", "\n").replace('\r', "\n");
        if self.newline == "\n" {
            unix
        } else {
            unix.replace('\n', &self.newline)
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Classify captured placeholder text: all-digit text parsing to an index of
/// at least 1 is positional, everything else (untrimmed) is a name. `${0}`,
/// leading-zero forms like `${01}`, and indexes too large for usize all fall
/// through to named, so the 1-based invariant on positional tokens holds and
/// the source form of a positional token reconstructs its placeholder exactly.
fn classify_reference(reference: &str) -> Token {
    if reference.bytes().all(|b| b.is_ascii_digit()) && !reference.starts_with('0') {
        if let Ok(index) = reference.parse::<usize>() {
            debug_assert!(index >= 1);
            return Token::Positional(index);
        }
    }
    Token::Named(reference.to_string())
}
