//! Record store error types.

/// Record store error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// Table name failed validation
    #[display("Invalid table name: '{}'", _0)]
    InvalidName(String),
    /// Connection or pool checkout failed
    #[display("Database connection error: {}", _0)]
    Connection(String),
    /// Query execution failed
    #[display("Database query error: {}", _0)]
    Query(String),
    /// A row did not have one value per column
    #[display(
        "Row {} of table '{}' has {} values but the table has {} columns",
        row,
        table,
        found,
        expected
    )]
    ShapeMismatch {
        /// Table being read
        table: String,
        /// Zero-based row index
        row: usize,
        /// Number of columns reported for the table
        expected: usize,
        /// Number of values in the row
        found: usize,
    },
    /// A row could not be read as the requested record type
    #[display("Malformed row in table '{}': {}", table, reason)]
    MalformedRow {
        /// Table being read
        table: String,
        /// What was wrong with the row
        reason: String,
    },
    /// Table not found
    #[display("Table '{}' not found in database", _0)]
    TableNotFound(String),
}

/// Record store error with source location tracking.
///
/// # Examples
///
/// ```
/// use foodtrax_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::InvalidName("trucks; drop".into()));
/// assert!(format!("{}", err).contains("Invalid table name"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new StoreError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// Diesel error conversions (only available with the mysql feature)
#[cfg(feature = "mysql")]
impl From<diesel::result::Error> for StoreError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        StoreError::new(StoreErrorKind::Query(err.to_string()))
    }
}

#[cfg(feature = "mysql")]
impl From<diesel::ConnectionError> for StoreError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        StoreError::new(StoreErrorKind::Connection(err.to_string()))
    }
}
