//! Top-level error wrapper types.

use crate::{ConfigError, DirectoryError, DispatchError, SlackError, StoreError};

/// Every error a FoodTrax operation can produce.
///
/// # Examples
///
/// ```
/// use foodtrax_error::{FoodtraxError, StoreError, StoreErrorKind};
///
/// let store_err = StoreError::new(StoreErrorKind::TableNotFound("users".into()));
/// let err: FoodtraxError = store_err.into();
/// assert!(format!("{}", err).contains("Store Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FoodtraxErrorKind {
    /// Record store error
    #[from(StoreError)]
    Store(StoreError),
    /// Directory cache error
    #[from(DirectoryError)]
    Directory(DirectoryError),
    /// Slack Web API error
    #[from(SlackError)]
    Slack(SlackError),
    /// Command dispatch error
    #[from(DispatchError)]
    Dispatch(DispatchError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// FoodTrax error with kind discrimination.
///
/// # Examples
///
/// ```
/// use foodtrax_error::{ConfigError, FoodtraxErrorKind, FoodtraxResult};
///
/// fn might_fail() -> FoodtraxResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), FoodtraxErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("FoodTrax Error: {}", _0)]
pub struct FoodtraxError(Box<FoodtraxErrorKind>);

impl FoodtraxError {
    /// Create a new error from a kind.
    pub fn new(kind: FoodtraxErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FoodtraxErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FoodtraxErrorKind
impl<T> From<T> for FoodtraxError
where
    T: Into<FoodtraxErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for FoodTrax operations.
pub type FoodtraxResult<T> = std::result::Result<T, FoodtraxError>;
