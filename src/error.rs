//! Recoverable errors.
//!
//! Programmer-contract violations (a value outside an `allowed` set, an
//! out-of-range positional index) are not represented here; they panic at the
//! call site.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by classification, lookups and rendering.
#[derive(Debug, Error)]
pub enum ArgsError {
    /// The invocation vector had no command name.
    #[error("Invocation is empty: expected at least a command name")]
    EmptyInvocation,

    /// An option value could not be parsed into the requested type.
    #[error("Invalid value '{value}' for option '--{name}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    /// Tokens were supplied but never queried.
    #[error("unexpected arguments: {}", tokens.join(" "))]
    Unconsumed { tokens: Vec<String> },

    /// Color name not in the escape-code table.
    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    /// Style name not in the escape-code table.
    #[error("Unknown style '{0}'")]
    UnknownStyle(String),

    /// Settings could not be applied (e.g. an unresolvable palette).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON report serialization failed.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
