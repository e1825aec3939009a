//! Construction of the shared application context.

use crate::FoodtraxConfig;
use foodtrax_bot::AppContext;
use foodtrax_database::{MysqlRecordStore, establish_pool};
use foodtrax_error::FoodtraxResult;
use foodtrax_social::SlackClient;
use std::sync::Arc;
use tracing::{info, instrument};

/// Connect to MySQL and Slack and build the context shared by every request.
///
/// # Errors
///
/// Returns error if the database pool cannot be opened or the Slack
/// settings are incomplete.
#[instrument(skip_all)]
pub fn build_context(config: &FoodtraxConfig) -> FoodtraxResult<AppContext> {
    let pool = establish_pool(config.database().url(), *config.database().pool_size())?;
    let store = MysqlRecordStore::new(pool);
    let slack = SlackClient::new(&config.slack_settings()?)?;

    info!("Application context ready");
    Ok(AppContext::new(Arc::new(store), Arc::new(slack)))
}
