//! GUI-specific error types.
//!
//! Request failures are collapsed into a single generic user-visible message
//! while staying distinguishable in diagnostic logging: whether the network
//! failed, the service answered with an error status, or the body did not
//! parse, the user sees the same one-liner and the log records the detail.

use thiserror::Error;

/// Failures of the optimization round trip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// The request never produced a usable response.
    #[error("transport failure: {reason}")]
    Transport {
        /// Description of what went wrong.
        reason: String,
    },

    /// The service answered with a non-success status.
    #[error("service returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response: {reason}")]
    MalformedResponse {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// The single generic message shown to the user for any request failure.
    pub fn user_message(&self) -> &'static str {
        "Failed to process the expression."
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a transport error from any error source.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport {
            reason: err.to_string(),
        }
    }

    /// Create a malformed-response error from any error source.
    pub fn malformed(err: impl std::fmt::Display) -> Self {
        Self::MalformedResponse {
            reason: err.to_string(),
        }
    }
}
