//! Table name validation and row labelling.

use foodtrax_core::Row;
use foodtrax_error::{StoreError, StoreErrorKind, StoreResult};
use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::LazyLock;
use tracing::debug;

static TABLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static pattern compiles"));

/// Check whether `name` is safe to splice into a query as a table name.
///
/// # Examples
///
/// ```
/// use foodtrax_database::is_valid_table_name;
///
/// assert!(is_valid_table_name("truck_information"));
/// assert!(!is_valid_table_name("1trucks"));
/// assert!(!is_valid_table_name("trucks; DROP TABLE users"));
/// ```
pub fn is_valid_table_name(name: &str) -> bool {
    TABLE_NAME.is_match(name)
}

/// Validate a table name, returning `InvalidName` on failure.
pub fn validate_table_name(name: &str) -> StoreResult<()> {
    if is_valid_table_name(name) {
        Ok(())
    } else {
        Err(StoreError::new(StoreErrorKind::InvalidName(name.to_string())))
    }
}

/// Zip positional rows with the table's column names.
///
/// An empty row set is always valid. Every row must have exactly one value
/// per header.
///
/// # Errors
///
/// Returns `ShapeMismatch` for the first row whose arity differs from the
/// header count.
pub fn label_rows(
    table: &str,
    headers: &[String],
    rows: Vec<Vec<JsonValue>>,
) -> StoreResult<Vec<Row>> {
    debug!(table, columns = headers.len(), rows = rows.len(), "Labelling rows");

    rows.into_iter()
        .enumerate()
        .map(|(index, values)| {
            if values.len() != headers.len() {
                return Err(StoreError::new(StoreErrorKind::ShapeMismatch {
                    table: table.to_string(),
                    row: index,
                    expected: headers.len(),
                    found: values.len(),
                }));
            }
            Ok(headers.iter().cloned().zip(values).collect::<Row>())
        })
        .collect()
}
