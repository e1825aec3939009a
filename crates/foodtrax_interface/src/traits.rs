//! Trait definitions for record stores and messaging platforms.

use async_trait::async_trait;
use foodtrax_core::{DirectoryEntry, Row};
use foodtrax_error::{SlackResult, StoreResult};

/// Read-only access to the tables of the FoodTrax database.
///
/// Implementations hold no business logic: every call is a fresh query
/// returning the full current contents.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Names of all tables in the database.
    async fn list_tables(&self) -> StoreResult<Vec<String>>;

    /// Column names of `table`, in ordinal order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` if `table` does not match
    /// `^[A-Za-z_][A-Za-z0-9_]*$`, or `Query` if the lookup fails.
    async fn list_table_headers(&self, table: &str) -> StoreResult<Vec<String>>;

    /// Every row of `table`, keyed by column name.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `table` is not a valid table name
    /// - The query fails
    /// - A row does not have one value per column
    async fn fetch_table(&self, table: &str) -> StoreResult<Vec<Row>>;
}

/// Source of messaging-platform directory snapshots.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch the full user directory.
    async fn list_directory(&self) -> SlackResult<Vec<DirectoryEntry>>;
}

/// Outbound messaging on a chat platform.
///
/// Send methods return `Ok(false)` when the platform answered but reported
/// that the message was not accepted, and `Err` when the platform could not
/// be reached at all.
#[async_trait]
pub trait MessagingPlatform: DirectorySource {
    /// Open (or reuse) the direct conversation with a user and return its
    /// channel id.
    async fn open_direct_channel(&self, user_id: &str) -> SlackResult<String>;

    /// Post `text` to a channel.
    async fn send_channel_message(&self, channel_id: &str, text: &str) -> SlackResult<bool>;

    /// Send `text` to a user as a direct message.
    ///
    /// Opens the direct conversation first, then posts into it.
    async fn send_direct_message(&self, user_id: &str, text: &str) -> SlackResult<bool> {
        let channel_id = self.open_direct_channel(user_id).await?;
        tracing::debug!(user_id, channel_id = %channel_id, "Opened direct conversation");
        self.send_channel_message(&channel_id, text).await
    }
}
