//! Engine error types.
//!
//! The engine favors graceful degradation: empty text, missing optional
//! fields, and short histories all produce well-defined neutral results.
//! Only malformed required input fails, and it fails fast with the
//! offending field named so the caller can translate it into a wire error.

use thiserror::Error;

/// Errors surfaced by the analysis engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required input field carries a malformed value (NaN, out of domain).
    #[error("invalid value for `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Engine configuration could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl EngineError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
