//! Error types for the transport.
//!
//! The pure transport functions never fail; these errors come from
//! [`crate::Player::validate`], the guarding [`crate::PlayerStore`], and command parsing.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TransportError {
    /// Duration must be finite and strictly positive
    #[error("Invalid duration: {duration} ms")]
    InvalidDuration { duration: f64 },

    /// A `[start, end]` pair with `start > end`
    #[error("Inverted {kind} range: [{start}, {end}]")]
    InvertedRange { kind: String, start: f64, end: f64 },

    /// NaN or infinite value in a field that must stay finite
    #[error("Non-finite {field}: {value}")]
    NonFinite { field: String, value: f64 },

    /// Command payload could not be decoded
    #[error("Command parse error: {reason}")]
    CommandParse { reason: String },
}

impl TransportError {
    pub(crate) fn inverted(kind: &str, range: [f64; 2]) -> Self {
        Self::InvertedRange {
            kind: kind.to_string(),
            start: range[0],
            end: range[1],
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidDuration { .. } => "timing",
            Self::InvertedRange { .. } => "range",
            Self::NonFinite { .. } => "numeric",
            Self::CommandParse { .. } => "command",
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::CommandParse {
            reason: err.to_string(),
        }
    }
}
