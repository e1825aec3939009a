//! Directory cache implementation.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use foodtrax_core::DirectoryEntry;
use foodtrax_error::{DirectoryError, DirectoryErrorKind, DirectoryResult};
use foodtrax_interface::DirectorySource;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Immutable copy of the directory taken at one point in time.
#[derive(Debug, Clone, Default, Getters)]
pub struct DirectorySnapshot {
    entries: Vec<DirectoryEntry>,
    fetched_at: Option<DateTime<Utc>>,
}

impl DirectorySnapshot {
    fn fetched(entries: Vec<DirectoryEntry>) -> Self {
        Self {
            entries,
            fetched_at: Some(Utc::now()),
        }
    }

    /// Find the entry whose display name equals `display_name` exactly.
    pub fn find(&self, display_name: &str) -> Option<&DirectoryEntry> {
        self.entries
            .iter()
            .find(|entry| entry.display_name() == display_name)
    }

    /// Find the entry carrying `user_id`.
    pub fn find_by_id(&self, user_id: &str) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|entry| entry.user_id() == user_id)
    }

    /// Number of entries in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the snapshot has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lazily refreshed cache of directory entries.
///
/// The cache starts empty and never expires entries on its own. A lookup
/// that misses triggers exactly one refresh followed by one more lookup.
///
/// Readers always see a whole snapshot: a refresh builds the new snapshot
/// off to the side and swaps the `Arc` in one write. A failed refresh leaves
/// the previous snapshot in place.
///
/// # Example
///
/// ```rust,ignore
/// use foodtrax_cache::DirectoryCache;
/// use std::sync::Arc;
///
/// let cache = DirectoryCache::new(Arc::new(slack_client));
///
/// // First lookup fetches the directory; later hits are served locally
/// let user_id = cache.resolve("bitoffdev").await?;
/// ```
pub struct DirectoryCache {
    source: Arc<dyn DirectorySource>,
    snapshot: RwLock<Arc<DirectorySnapshot>>,
}

impl DirectoryCache {
    /// Create an empty cache backed by `source`.
    pub fn new(source: Arc<dyn DirectorySource>) -> Self {
        debug!("Creating new DirectoryCache");
        Self {
            source,
            snapshot: RwLock::new(Arc::new(DirectorySnapshot::default())),
        }
    }

    /// The snapshot lookups are currently served from.
    pub fn snapshot(&self) -> Arc<DirectorySnapshot> {
        self.snapshot.read().clone()
    }

    /// Resolve a display name to a user id.
    ///
    /// Case-sensitive exact match. On a miss the directory is refreshed once
    /// and searched again.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The refresh needed after a miss fails (`Unavailable`)
    /// - The name is still absent after the refresh (`UserNotFound`)
    #[instrument(skip(self), fields(cache_size = self.len()))]
    pub async fn resolve(&self, display_name: &str) -> DirectoryResult<String> {
        self.resolve_with(display_name, DirectorySnapshot::find).await
    }

    /// Confirm that `user_id` belongs to a directory member.
    ///
    /// Slash commands carry the sender's id but only their legacy username,
    /// which is not the display name the snapshot is keyed by. Lookups by id
    /// follow the same miss-refresh-once rule as [`resolve`](Self::resolve).
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The refresh needed after a miss fails (`Unavailable`)
    /// - The id is still absent after the refresh (`UserNotFound`)
    #[instrument(skip(self), fields(cache_size = self.len()))]
    pub async fn resolve_id(&self, user_id: &str) -> DirectoryResult<String> {
        self.resolve_with(user_id, DirectorySnapshot::find_by_id).await
    }

    async fn resolve_with(
        &self,
        key: &str,
        find: for<'a> fn(&'a DirectorySnapshot, &str) -> Option<&'a DirectoryEntry>,
    ) -> DirectoryResult<String> {
        let lookup = || find(&*self.snapshot(), key).map(|entry| entry.user_id().clone());

        if let Some(user_id) = lookup() {
            debug!("Directory cache hit");
            return Ok(user_id);
        }

        debug!("Directory cache miss, refreshing");
        self.refresh().await?;

        lookup().ok_or_else(|| {
            warn!("User not found after refresh");
            DirectoryError::new(DirectoryErrorKind::UserNotFound(key.to_string()))
        })
    }

    /// Re-fetch the whole directory and replace the snapshot.
    ///
    /// Returns the number of entries in the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` if the fetch fails; the previous snapshot is
    /// kept.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> DirectoryResult<usize> {
        let entries = self.source.list_directory().await.map_err(|e| {
            warn!(error = %e, "Directory refresh failed, keeping previous snapshot");
            DirectoryError::new(DirectoryErrorKind::Unavailable(e.to_string()))
        })?;

        let count = entries.len();
        *self.snapshot.write() = Arc::new(DirectorySnapshot::fetched(entries));
        info!(entries = count, "Refreshed directory snapshot");
        Ok(count)
    }

    /// Get number of cached entries.
    pub fn len(&self) -> usize {
        self.snapshot.read().len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshot.read().is_empty()
    }
}
