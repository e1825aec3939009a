//! In-memory implementation of RecordStore.
//!
//! Tables are stored as a column list plus positional rows, exactly as they
//! would come back from the database, and go through the same validation and
//! labelling as the MySQL store.

use crate::{label_rows, validate_table_name};
use async_trait::async_trait;
use foodtrax_core::Row;
use foodtrax_error::{StoreError, StoreErrorKind, StoreResult};
use foodtrax_interface::RecordStore;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Default)]
struct StoredTable {
    headers: Vec<String>,
    rows: Vec<Vec<JsonValue>>,
}

/// In-memory record store.
///
/// # Example
/// ```
/// use foodtrax_database::InMemoryRecordStore;
/// use foodtrax_interface::RecordStore;
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = InMemoryRecordStore::new().with_table(
///     "truck_information",
///     &["truck_id", "name"],
///     vec![vec![json!(1), json!("Tacos")]],
/// );
/// let rows = store.fetch_table("truck_information").await.unwrap();
/// assert_eq!(rows[0]["name"], "Tacos");
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    tables: RwLock<BTreeMap<String, StoredTable>>,
}

impl InMemoryRecordStore {
    /// Create a store with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a table before the store is shared.
    pub fn with_table(mut self, table: &str, headers: &[&str], rows: Vec<Vec<JsonValue>>) -> Self {
        self.tables
            .get_mut()
            .insert(table.to_string(), stored(headers, rows));
        self
    }

    /// Add (or replace) a table on a shared store.
    pub async fn insert_table(&self, table: &str, headers: &[&str], rows: Vec<Vec<JsonValue>>) {
        self.tables
            .write()
            .await
            .insert(table.to_string(), stored(headers, rows));
    }

    async fn table(&self, table: &str) -> StoreResult<StoredTable> {
        validate_table_name(table)?;
        self.tables
            .read()
            .await
            .get(table)
            .cloned()
            .ok_or_else(|| StoreError::new(StoreErrorKind::TableNotFound(table.to_string())))
    }
}

fn stored(headers: &[&str], rows: Vec<Vec<JsonValue>>) -> StoredTable {
    StoredTable {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows,
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn list_tables(&self) -> StoreResult<Vec<String>> {
        Ok(self.tables.read().await.keys().cloned().collect())
    }

    async fn list_table_headers(&self, table: &str) -> StoreResult<Vec<String>> {
        Ok(self.table(table).await?.headers)
    }

    #[instrument(skip(self))]
    async fn fetch_table(&self, table: &str) -> StoreResult<Vec<Row>> {
        let StoredTable { headers, rows } = self.table(table).await?;
        debug!(count = rows.len(), "Read in-memory table");
        label_rows(table, &headers, rows)
    }
}
