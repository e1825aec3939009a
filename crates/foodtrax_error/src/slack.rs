//! Slack Web API error types.

/// Slack error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum SlackErrorKind {
    /// Request could not be sent or the connection failed.
    #[display("HTTP error calling {method}: {reason}")]
    Http {
        /// Web API method (e.g. "users.list")
        method: String,
        /// Transport error message
        reason: String,
    },

    /// Slack answered with `ok: false`.
    #[display("Slack API error from {method}: {error}")]
    Api {
        /// Web API method
        method: String,
        /// Error code reported by Slack
        error: String,
    },

    /// Response body could not be decoded.
    #[display("Failed to parse {method} response: {reason}")]
    Parse {
        /// Web API method
        method: String,
        /// Decoder error message
        reason: String,
    },
}

/// Slack error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Slack Error: {} at line {} in {}", kind, line, file)]
pub struct SlackError {
    /// The kind of error that occurred
    pub kind: SlackErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SlackError {
    /// Create a new SlackError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use foodtrax_error::{SlackError, SlackErrorKind};
    ///
    /// let err = SlackError::new(SlackErrorKind::Api {
    ///     method: "chat.postMessage".into(),
    ///     error: "channel_not_found".into(),
    /// });
    /// assert!(err.to_string().contains("channel_not_found"));
    /// ```
    #[track_caller]
    pub fn new(kind: SlackErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Slack operations.
pub type SlackResult<T> = Result<T, SlackError>;
