//! Error types for rule composition.

use thiserror::Error;

/// Errors that can occur while composing or printing a rule.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A style token that is not a recognized color name or modifier.
    #[error("invalid style token '{0}': allowed values are black, blue, cyan, green, grey, magenta, red, white, yellow, bold")]
    InvalidStyleToken(String),

    /// A style spec whose shape is not `color`, `color+bold`, or `bold`.
    #[error("invalid style spec '{0}': use 'color', 'color+bold', or 'bold'")]
    InvalidStyleCombination(String),

    /// Writing the composed line to the terminal failed.
    #[error("failed to write rule to terminal: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;
