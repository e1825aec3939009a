//! Database connection utilities.

use diesel::mysql::MysqlConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use foodtrax_error::{StoreError, StoreErrorKind, StoreResult};
use tracing::{info, instrument};

/// Pool of MySQL connections shared by concurrent requests.
pub type MysqlPool = Pool<ConnectionManager<MysqlConnection>>;

/// Build a connection pool for the FoodTrax database.
///
/// # Errors
///
/// Returns `Connection` if the pool cannot open its initial connections.
#[instrument(skip(database_url))]
pub fn establish_pool(database_url: &str, max_size: u32) -> StoreResult<MysqlPool> {
    let manager = ConnectionManager::<MysqlConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(|e| StoreError::new(StoreErrorKind::Connection(e.to_string())))?;

    info!(max_size, "Database pool ready");
    Ok(pool)
}
