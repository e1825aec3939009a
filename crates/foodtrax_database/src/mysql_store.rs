//! MySQL implementation of RecordStore.

use crate::{MysqlPool, label_rows, validate_table_name};
use async_trait::async_trait;
use diesel::mysql::MysqlConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;
use foodtrax_core::Row;
use foodtrax_error::{StoreError, StoreErrorKind, StoreResult};
use foodtrax_interface::RecordStore;
use serde_json::Value as JsonValue;
use tracing::{debug, instrument};

#[derive(QueryableByName)]
struct NameRow {
    #[diesel(sql_type = Text)]
    name: String,
}

#[derive(QueryableByName)]
struct JsonRow {
    #[diesel(sql_type = Text)]
    row_json: String,
}

/// Reads FoodTrax tables from MySQL.
///
/// Diesel calls are blocking, so each query runs on the blocking thread pool
/// with its own pooled connection.
#[derive(Clone)]
pub struct MysqlRecordStore {
    pool: MysqlPool,
}

impl MysqlRecordStore {
    /// Create a store over an existing pool.
    pub fn new(pool: MysqlPool) -> Self {
        Self { pool }
    }

    async fn with_connection<T, F>(&self, query: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut MysqlConnection) -> StoreResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| StoreError::new(StoreErrorKind::Connection(e.to_string())))?;
            query(&mut conn)
        })
        .await
        .map_err(|e| StoreError::new(StoreErrorKind::Query(format!("Join error: {}", e))))?
    }
}

fn table_headers(conn: &mut MysqlConnection, table: &str) -> StoreResult<Vec<String>> {
    let headers = diesel::sql_query(
        "SELECT column_name AS name FROM information_schema.columns \
         WHERE table_schema = DATABASE() AND table_name = ? \
         ORDER BY ordinal_position",
    )
    .bind::<Text, _>(table)
    .load::<NameRow>(conn)?
    .into_iter()
    .map(|row| row.name)
    .collect::<Vec<_>>();

    if headers.is_empty() {
        return Err(StoreError::new(StoreErrorKind::TableNotFound(
            table.to_string(),
        )));
    }
    Ok(headers)
}

fn table_rows(
    conn: &mut MysqlConnection,
    table: &str,
    headers: &[String],
) -> StoreResult<Vec<Vec<JsonValue>>> {
    // Names come from information_schema and the table name was validated,
    // so quoting with backticks is sufficient.
    let columns = headers
        .iter()
        .map(|h| format!("`{}`", h.replace('`', "``")))
        .collect::<Vec<_>>()
        .join(", ");
    let query = format!(
        "SELECT CAST(JSON_ARRAY({}) AS CHAR) AS row_json FROM `{}`",
        columns, table
    );
    debug!(query = %query, "Executing table query");

    diesel::sql_query(query)
        .load::<JsonRow>(conn)?
        .into_iter()
        .map(|row| match serde_json::from_str(&row.row_json) {
            Ok(JsonValue::Array(values)) => Ok(values),
            Ok(other) => Err(StoreError::new(StoreErrorKind::Query(format!(
                "Expected a JSON array per row, got {}",
                other
            )))),
            Err(e) => Err(StoreError::new(StoreErrorKind::Query(e.to_string()))),
        })
        .collect()
}

#[async_trait]
impl RecordStore for MysqlRecordStore {
    #[instrument(skip(self))]
    async fn list_tables(&self) -> StoreResult<Vec<String>> {
        self.with_connection(|conn| {
            let tables = diesel::sql_query(
                "SELECT table_name AS name FROM information_schema.tables \
                 WHERE table_schema = DATABASE() ORDER BY table_name",
            )
            .load::<NameRow>(conn)?;
            Ok(tables.into_iter().map(|row| row.name).collect())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn list_table_headers(&self, table: &str) -> StoreResult<Vec<String>> {
        validate_table_name(table)?;
        let table = table.to_string();
        self.with_connection(move |conn| table_headers(conn, &table))
            .await
    }

    #[instrument(skip(self))]
    async fn fetch_table(&self, table: &str) -> StoreResult<Vec<Row>> {
        validate_table_name(table)?;
        let table = table.to_string();
        self.with_connection(move |conn| {
            let headers = table_headers(conn, &table)?;
            let rows = table_rows(conn, &table, &headers)?;
            debug!(count = rows.len(), "Retrieved rows");
            label_rows(&table, &headers, rows)
        })
        .await
    }
}
