//! Error types for the Typograf client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Typograf client errors surfaced outside the correction boundary
/// (construction, IO, configuration). Correction-path failures never use
/// these; they are folded into [`CorrectionFailure`] and collapsed to the
/// original text.
#[derive(Error, Debug)]
pub enum TypografError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where along the request/response sequence a correction attempt failed.
///
/// All reasons lead to the same outcome at the outer boundary (return the
/// input unchanged); the distinction exists for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// Connection could not be established
    Connect,
    /// Request could not be written
    Request,
    /// Response body could not be read
    Read,
    /// Response body is not well-formed XML
    Parse,
    /// Response XML has no ProcessTextResult element
    MissingResult,
}

impl FailureReason {
    /// Get the string code for this failure reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connect => "CONNECT_FAILED",
            Self::Request => "REQUEST_FAILED",
            Self::Read => "READ_FAILED",
            Self::Parse => "PARSE_FAILED",
            Self::MissingResult => "MISSING_RESULT",
        }
    }
}

/// A failed correction attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionFailure {
    /// Failure reason code
    pub reason: FailureReason,
    /// Human-readable message
    pub message: String,
}

impl CorrectionFailure {
    /// Create a new correction failure.
    pub fn new(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CorrectionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.reason.as_str(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_as_str() {
        assert_eq!(FailureReason::Connect.as_str(), "CONNECT_FAILED");
        assert_eq!(FailureReason::MissingResult.as_str(), "MISSING_RESULT");
    }

    #[test]
    fn test_correction_failure_display() {
        let failure = CorrectionFailure::new(FailureReason::Parse, "unexpected EOF");
        assert_eq!(failure.to_string(), "[PARSE_FAILED] unexpected EOF");
    }
}
