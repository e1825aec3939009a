//! Truck records read from the FoodTrax database.

use crate::{Coordinate, Row, value_text};
use derive_getters::Getters;
use foodtrax_error::{StoreError, StoreErrorKind, StoreResult};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A food truck tracked by FoodTrax.
///
/// Columns other than `truck_id` and `name` are kept verbatim in
/// `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct TruckRecord {
    truck_id: String,
    name: String,
    attributes: Row,
}

impl TruckRecord {
    /// Table holding one row per truck.
    pub const TABLE: &'static str = "truck_information";

    /// Create a truck record with no extra attributes.
    pub fn new(truck_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            truck_id: truck_id.into(),
            name: name.into(),
            attributes: Row::new(),
        }
    }

    /// Read a truck from a labelled `truck_information` row.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRow` if `truck_id` or `name` is missing or not a
    /// scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use foodtrax_core::TruckRecord;
    /// use serde_json::json;
    ///
    /// let row = json!({"truck_id": 3, "name": "Tacos", "cuisine": "mexican"});
    /// let truck = TruckRecord::from_row(row.as_object().unwrap()).unwrap();
    /// assert_eq!(truck.truck_id(), "3");
    /// assert_eq!(truck.attributes()["cuisine"], "mexican");
    /// ```
    pub fn from_row(row: &Row) -> StoreResult<Self> {
        let truck_id = text_column(Self::TABLE, row, "truck_id")?;
        let name = text_column(Self::TABLE, row, "name")?;
        let attributes = row
            .iter()
            .filter(|(column, _)| column.as_str() != "truck_id" && column.as_str() != "name")
            .map(|(column, value)| (column.clone(), value.clone()))
            .collect();

        Ok(Self {
            truck_id,
            name,
            attributes,
        })
    }
}

/// The most recent known position of a truck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct TruckLocationRecord {
    truck_id: String,
    location: Coordinate,
}

impl TruckLocationRecord {
    /// Table holding the latest location of each truck.
    pub const TABLE: &'static str = "truck_locations_memory";

    /// Create a location record.
    pub fn new(truck_id: impl Into<String>, location: Coordinate) -> Self {
        Self {
            truck_id: truck_id.into(),
            location,
        }
    }

    /// Read a location from a labelled `truck_locations_memory` row.
    ///
    /// `lat` and `long` may be JSON numbers or numeric strings (DECIMAL
    /// columns are often serialized as text).
    ///
    /// # Errors
    ///
    /// Returns `MalformedRow` if a column is missing or not numeric.
    pub fn from_row(row: &Row) -> StoreResult<Self> {
        let truck_id = text_column(Self::TABLE, row, "truck_id")?;
        let lat = degrees_column(Self::TABLE, row, "lat")?;
        let long = degrees_column(Self::TABLE, row, "long")?;

        Ok(Self {
            truck_id,
            location: Coordinate::new(lat, long),
        })
    }
}

fn text_column(table: &str, row: &Row, column: &str) -> StoreResult<String> {
    row.get(column).and_then(value_text).ok_or_else(|| {
        StoreError::new(StoreErrorKind::MalformedRow {
            table: table.to_string(),
            reason: format!("column '{}' is missing or not a scalar", column),
        })
    })
}

fn degrees_column(table: &str, row: &Row, column: &str) -> StoreResult<f64> {
    let degrees = match row.get(column) {
        Some(JsonValue::Number(n)) => n.as_f64(),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    degrees.filter(|d| d.is_finite()).ok_or_else(|| {
        StoreError::new(StoreErrorKind::MalformedRow {
            table: table.to_string(),
            reason: format!("column '{}' is missing or not a number", column),
        })
    })
}
