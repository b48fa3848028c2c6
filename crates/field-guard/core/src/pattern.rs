// File: src/pattern.rs
// Purpose: Compiled patterns and the password strength rule

use fancy_regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::ConfigError;

/// Symbols accepted by the built-in password rule
pub const PASSWORD_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// Minimum length of the built-in password rule
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// A compiled regular expression that keeps its source text.
///
/// Look-around and backreferences are supported, so password patterns
/// written for the browser compile unchanged. Matching is an unanchored
/// search; anchor the source with `^`/`$` to match the whole value.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(source).map_err(|error| ConfigError::InvalidPattern {
            pattern: source.to_string(),
            reason: error.to_string(),
        })?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// A match that gives up (backtrack limit) counts as no match
    pub fn is_match(&self, value: &str) -> bool {
        match self.regex.is_match(value) {
            Ok(matched) => matched,
            Err(err) => {
                warn!(pattern = %self.source, error = %err, "pattern evaluation failed");
                false
            }
        }
    }
}

impl FromStr for Pattern {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// Rule applied by the password security check
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordRule {
    /// 8+ leading characters from `[A-Za-z0-9@$!%*?&]`, with at least one
    /// lowercase letter, uppercase letter, digit and symbol
    #[default]
    Strong,
    /// Caller supplied pattern
    Pattern(Pattern),
}

impl PasswordRule {
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            PasswordRule::Strong => is_strong_password(password),
            PasswordRule::Pattern(pattern) => pattern.is_match(password),
        }
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_password_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(&c)
}

/// Built-in strength rule.
///
/// The character class requirements only look at the first line, and only
/// the leading run of allowed characters has to reach the minimum length.
/// Anything after that run is not constrained.
pub fn is_strong_password(password: &str) -> bool {
    let first_line = password.split(is_line_terminator).next().unwrap_or("");

    let has_lowercase = first_line.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = first_line.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = first_line.chars().any(|c| c.is_ascii_digit());
    let has_symbol = first_line.chars().any(|c| PASSWORD_SYMBOLS.contains(&c));

    let leading_run = password.chars().take_while(|&c| is_password_char(c)).count();

    has_lowercase && has_uppercase && has_digit && has_symbol && leading_run >= PASSWORD_MIN_LENGTH
}
