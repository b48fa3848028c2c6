// File: src/error.rs
// Purpose: Error types for configuration and binding failures

use thiserror::Error;

/// Problems with the configuration a validator was built from.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("input locator is not defined")]
    MissingTarget,

    /// The target was neither a locator string nor a list of field specs.
    #[error("invalid input type: {0}")]
    InvalidTarget(String),

    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Reasons a single field could not be bound.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BindError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no element matches `{0}`")]
    ElementNotFound(String),

    #[error("`{0}` is not an input element")]
    NotAnInput(String),

    /// Neither the configured form selector nor an ancestor gave a form.
    #[error("form element not found or invalid for `{0}`")]
    FormNotFound(String),
}
