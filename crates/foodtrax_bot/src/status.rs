//! Periodic status report for operators.

use crate::AppContext;
use derive_getters::Getters;
use foodtrax_core::TruckRecord;
use foodtrax_error::{
    DispatchError, DispatchErrorKind, FoodtraxResult, StoreError, StoreErrorKind,
};
use foodtrax_interface::RecordStore;
use tracing::{info, instrument};

/// Tables a healthy FoodTrax database must contain.
pub const EXPECTED_TABLES: [&str; 5] = [
    "particle_to_truck",
    "truck_information",
    "truck_locations",
    "truck_locations_memory",
    "users",
];

/// Result of checking the database.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StatusReport {
    tables: Vec<String>,
    truck_count: usize,
}

impl StatusReport {
    /// The text sent to the operator.
    pub fn message(&self) -> String {
        format!(
            "There are {} trucks being tracked currently",
            self.truck_count
        )
    }
}

/// Check the expected tables exist and count the trucks.
///
/// # Errors
///
/// Returns `TableNotFound` naming the first expected table that is missing,
/// or any error from the store.
#[instrument(skip(store))]
pub async fn collect_status(store: &dyn RecordStore) -> FoodtraxResult<StatusReport> {
    let tables = store.list_tables().await?;
    if let Some(missing) = EXPECTED_TABLES
        .into_iter()
        .find(|expected| !tables.iter().any(|table| table == expected))
    {
        return Err(StoreError::new(StoreErrorKind::TableNotFound(missing.to_string())).into());
    }

    let truck_count = store.fetch_table(TruckRecord::TABLE).await?.len();
    info!(truck_count, "Collected status");
    Ok(StatusReport {
        tables,
        truck_count,
    })
}

/// Collect the status report and send it to `notify_user` by direct message.
///
/// # Errors
///
/// Returns error if collecting the report fails, the user cannot be
/// resolved, or Slack does not accept the message.
#[instrument(skip(context))]
pub async fn send_status(context: &AppContext, notify_user: &str) -> FoodtraxResult<StatusReport> {
    let report = collect_status(context.store().as_ref()).await?;
    let user_id = context.directory().resolve(notify_user).await?;

    let sent = context
        .messenger()
        .send_direct_message(&user_id, &report.message())
        .await?;
    if !sent {
        return Err(DispatchError::new(DispatchErrorKind::DeliveryFailed { target: user_id }).into());
    }

    info!(notify_user, "Status report sent");
    Ok(report)
}
