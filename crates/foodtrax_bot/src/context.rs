//! Shared application state.

use derive_getters::Getters;
use foodtrax_cache::DirectoryCache;
use foodtrax_interface::{MessagingPlatform, RecordStore};
use std::sync::Arc;

/// Long-lived collaborators shared by every request.
///
/// Built once at startup and cloned into each handler; clones share the
/// same store, messenger and directory cache.
#[derive(Clone, Getters)]
pub struct AppContext {
    store: Arc<dyn RecordStore>,
    messenger: Arc<dyn MessagingPlatform>,
    directory: Arc<DirectoryCache>,
}

impl AppContext {
    /// Build a context whose directory cache is fed by `messenger`.
    pub fn new<M>(store: Arc<dyn RecordStore>, messenger: Arc<M>) -> Self
    where
        M: MessagingPlatform + 'static,
    {
        let directory = Arc::new(DirectoryCache::new(messenger.clone()));
        Self {
            store,
            messenger,
            directory,
        }
    }

    /// Build a context from parts, sharing an existing directory cache.
    pub fn from_parts(
        store: Arc<dyn RecordStore>,
        messenger: Arc<dyn MessagingPlatform>,
        directory: Arc<DirectoryCache>,
    ) -> Self {
        Self {
            store,
            messenger,
            directory,
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("directory_entries", &self.directory.len())
            .finish_non_exhaustive()
    }
}
