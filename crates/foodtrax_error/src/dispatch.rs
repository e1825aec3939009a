//! Command dispatch error types.

/// Command dispatch error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DispatchErrorKind {
    /// Webhook request is missing a required form field.
    #[display("Webhook request is missing field '{}'", _0)]
    MissingField(String),

    /// A location record refers to a truck that does not exist.
    #[display("Location refers to unknown truck_id '{}'", truck_id)]
    DataIntegrity {
        /// The dangling identifier
        truck_id: String,
    },

    /// The messaging platform reported that a send did not succeed.
    #[display("Message delivery to '{}' was not successful", target)]
    DeliveryFailed {
        /// Channel or user the message was addressed to
        target: String,
    },
}

/// Dispatch error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Dispatch Error: {} at line {} in {}", kind, line, file)]
pub struct DispatchError {
    /// The kind of error that occurred
    pub kind: DispatchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DispatchError {
    /// Create a new DispatchError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DispatchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
