//! Field checks
//!
//! Each check is a pure function over the field value. [`Check`] ties them to
//! the switches in [`ValidationConfig`] and fixes the order they run in.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::ValidationConfig;

// Email validation regex
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));

/// The checks a field can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Check {
    Required,
    MinLength,
    MaxLength,
    Email,
    PasswordSecurity,
    CustomPattern,
}

impl Check {
    /// Evaluation order
    pub const ORDER: [Check; 6] = [
        Check::Required,
        Check::MinLength,
        Check::MaxLength,
        Check::Email,
        Check::PasswordSecurity,
        Check::CustomPattern,
    ];

    /// Whether `config` switches this check on.
    ///
    /// A length bound of zero counts as unset.
    pub fn is_enabled<E>(self, config: &ValidationConfig<E>) -> bool {
        match self {
            Check::Required => config.required,
            Check::MinLength => config.min_length.is_some_and(|min| min > 0),
            Check::MaxLength => config.max_length.is_some_and(|max| max > 0),
            Check::Email => config.email_validation,
            Check::PasswordSecurity => config.check_password_security,
            Check::CustomPattern => config.custom_pattern.is_some(),
        }
    }

    /// Whether `value` passes this check under `config`
    pub fn passes<E>(self, value: &str, config: &ValidationConfig<E>) -> bool {
        match self {
            Check::Required => is_present(value),
            Check::MinLength => config
                .min_length
                .map_or(true, |min| meets_min_length(value, min)),
            Check::MaxLength => config
                .max_length
                .map_or(true, |max| meets_max_length(value, max)),
            Check::Email => is_valid_email(value),
            Check::PasswordSecurity => config.password_rule.is_satisfied_by(value),
            Check::CustomPattern => config
                .custom_pattern
                .as_ref()
                .map_or(true, |pattern| pattern.is_match(value)),
        }
    }
}

/// Non-empty after trimming whitespace and byte order marks
pub fn is_present(value: &str) -> bool {
    !value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Length in characters, not bytes
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn meets_min_length(value: &str, min: usize) -> bool {
    char_len(value) >= min
}

pub fn meets_max_length(value: &str, max: usize) -> bool {
    char_len(value) <= max
}

/// `local@domain.tld` with no whitespace and a single `@`
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Checks of `config` that `value` fails, in evaluation order
pub fn failed_checks<E>(value: &str, config: &ValidationConfig<E>) -> Vec<Check> {
    Check::ORDER
        .into_iter()
        .filter(|check| check.is_enabled(config))
        .filter(|check| !check.passes(value, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigOverrides;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn config(overrides: ConfigOverrides<()>) -> ValidationConfig<()> {
        ValidationConfig::from_overrides(overrides).unwrap()
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("\t\n", false)]
    #[case("\u{FEFF}", false)]
    #[case(" \u{FEFF}\u{00A0}", false)]
    #[case(" a ", true)]
    fn test_is_present(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_present(value), expected);
    }

    #[rstest]
    #[case("a@b.co", true)]
    #[case("user.name+tag@example.co.uk", true)]
    #[case("a@b", false)]
    #[case("a.b", false)]
    #[case("", false)]
    #[case("a b@c.de", false)]
    #[case("a@@b.co", false)]
    fn test_is_valid_email(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(value), expected);
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        assert!(!meets_min_length("ab", 3));
        assert!(meets_min_length("abc", 3));
        assert!(meets_max_length("abc", 3));
        assert!(!meets_max_length("abcd", 3));
    }

    #[test]
    fn test_length_counts_chars() {
        assert_eq!(char_len("héllo"), 5);
        assert!(meets_max_length("ßßß", 3));
    }

    #[test]
    fn test_nothing_enabled_by_default() {
        let config = config(ConfigOverrides::default());
        for check in Check::ORDER {
            assert!(!check.is_enabled(&config), "{check:?} should be off");
        }
        assert!(failed_checks("", &config).is_empty());
    }

    #[test]
    fn test_zero_length_bounds_are_disabled() {
        let config = config(ConfigOverrides {
            min_length: Some(0),
            max_length: Some(0),
            ..ConfigOverrides::default()
        });
        assert!(!Check::MinLength.is_enabled(&config));
        assert!(!Check::MaxLength.is_enabled(&config));
        assert!(failed_checks("anything", &config).is_empty());
    }

    #[test]
    fn test_failed_checks_keep_order() {
        let config = config(ConfigOverrides {
            required: Some(true),
            min_length: Some(3),
            email_validation: Some(true),
            check_password_security: Some(true),
            custom_pattern: Some("^x".to_string()),
            ..ConfigOverrides::default()
        });
        assert_eq!(
            failed_checks(" ", &config),
            vec![
                Check::Required,
                Check::MinLength,
                Check::Email,
                Check::PasswordSecurity,
                Check::CustomPattern,
            ]
        );
    }

    #[test]
    fn test_custom_pattern() {
        let config = config(ConfigOverrides {
            custom_pattern: Some(r"^\d{3}-\d{4}$".to_string()),
            ..ConfigOverrides::default()
        });
        assert!(Check::CustomPattern.passes("555-1234", &config));
        assert!(!Check::CustomPattern.passes("5551234", &config));
    }

    #[test]
    fn test_password_with_custom_rule() {
        let config = config(ConfigOverrides {
            check_password_security: Some(true),
            password_pattern: Some("^.{4,}$".to_string()),
            ..ConfigOverrides::default()
        });
        assert!(Check::PasswordSecurity.passes("abcd", &config));
        assert!(!Check::PasswordSecurity.passes("abc", &config));
    }
}
