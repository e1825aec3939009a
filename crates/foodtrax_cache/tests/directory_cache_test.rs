//! Tests for the directory cache.

use async_trait::async_trait;
use foodtrax_cache::DirectoryCache;
use foodtrax_core::DirectoryEntry;
use foodtrax_error::{DirectoryErrorKind, SlackError, SlackErrorKind, SlackResult};
use foodtrax_interface::DirectorySource;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Mock directory that counts fetches and can be switched to fail.
struct MockDirectory {
    entries: parking_lot::Mutex<Vec<DirectoryEntry>>,
    fetches: AtomicUsize,
    fail: AtomicBool,
}

impl MockDirectory {
    fn new(entries: Vec<DirectoryEntry>) -> Arc<Self> {
        Arc::new(Self {
            entries: parking_lot::Mutex::new(entries),
            fetches: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        })
    }

    fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn set_entries(&self, entries: Vec<DirectoryEntry>) {
        *self.entries.lock() = entries;
    }
}

#[async_trait]
impl DirectorySource for MockDirectory {
    async fn list_directory(&self) -> SlackResult<Vec<DirectoryEntry>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(SlackError::new(SlackErrorKind::Http {
                method: "users.list".to_string(),
                reason: "connection refused".to_string(),
            }));
        }
        Ok(self.entries.lock().clone())
    }
}

fn team() -> Vec<DirectoryEntry> {
    vec![
        DirectoryEntry::new("bitoffdev", "U0001"),
        DirectoryEntry::new("truckfan", "U0002"),
    ]
}

#[tokio::test]
async fn test_resolve_on_empty_cache_refreshes_once() {
    let directory = MockDirectory::new(team());
    let cache = DirectoryCache::new(directory.clone());
    assert!(cache.is_empty());

    let user_id = cache.resolve("truckfan").await.unwrap();

    assert_eq!(user_id, "U0002");
    assert_eq!(directory.fetches(), 1);
    assert_eq!(cache.len(), 2);
    assert!(cache.snapshot().fetched_at().is_some());
}

#[tokio::test]
async fn test_resolve_hit_does_not_refresh() {
    let directory = MockDirectory::new(team());
    let cache = DirectoryCache::new(directory.clone());

    cache.resolve("bitoffdev").await.unwrap();
    cache.resolve("bitoffdev").await.unwrap();
    cache.resolve("truckfan").await.unwrap();

    assert_eq!(directory.fetches(), 1);
}

#[tokio::test]
async fn test_unknown_name_refreshes_exactly_once() {
    let directory = MockDirectory::new(team());
    let cache = DirectoryCache::new(directory.clone());

    let err = cache.resolve("nobody").await.unwrap_err();

    assert_eq!(
        err.kind,
        DirectoryErrorKind::UserNotFound("nobody".to_string())
    );
    assert_eq!(directory.fetches(), 1);
}

#[tokio::test]
async fn test_resolve_is_case_sensitive() {
    let directory = MockDirectory::new(team());
    let cache = DirectoryCache::new(directory.clone());

    let err = cache.resolve("BitOffDev").await.unwrap_err();
    assert!(matches!(err.kind, DirectoryErrorKind::UserNotFound(_)));
}

#[tokio::test]
async fn test_miss_picks_up_new_users() {
    let directory = MockDirectory::new(team());
    let cache = DirectoryCache::new(directory.clone());
    cache.resolve("bitoffdev").await.unwrap();

    directory.set_entries(vec![
        DirectoryEntry::new("bitoffdev", "U0001"),
        DirectoryEntry::new("newhire", "U0003"),
    ]);

    assert_eq!(cache.resolve("newhire").await.unwrap(), "U0003");
    assert_eq!(directory.fetches(), 2);
}

#[tokio::test]
async fn test_stale_snapshot_is_not_refreshed_on_hit() {
    let directory = MockDirectory::new(team());
    let cache = DirectoryCache::new(directory.clone());
    cache.resolve("truckfan").await.unwrap();

    // The user changed id upstream, but hits never refresh
    directory.set_entries(vec![DirectoryEntry::new("truckfan", "U9999")]);

    assert_eq!(cache.resolve("truckfan").await.unwrap(), "U0002");
    assert_eq!(directory.fetches(), 1);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_snapshot() {
    let directory = MockDirectory::new(team());
    let cache = DirectoryCache::new(directory.clone());
    cache.refresh().await.unwrap();

    directory.set_failing(true);

    let err = cache.refresh().await.unwrap_err();
    assert!(matches!(err.kind, DirectoryErrorKind::Unavailable(_)));
    assert_eq!(cache.len(), 2);

    // Existing names still resolve from the stale snapshot
    assert_eq!(cache.resolve("bitoffdev").await.unwrap(), "U0001");
    assert_eq!(directory.fetches(), 2);
}

#[tokio::test]
async fn test_miss_with_failing_directory_is_unavailable() {
    let directory = MockDirectory::new(team());
    directory.set_failing(true);
    let cache = DirectoryCache::new(directory.clone());

    let err = cache.resolve("bitoffdev").await.unwrap_err();

    assert!(matches!(err.kind, DirectoryErrorKind::Unavailable(_)));
    assert_eq!(directory.fetches(), 1);
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_concurrent_resolves_see_whole_snapshots() {
    let directory = MockDirectory::new(team());
    let cache = Arc::new(DirectoryCache::new(directory.clone()));
    cache.refresh().await.unwrap();

    let mut handles = Vec::new();
    for i in 0..16 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            if i % 4 == 0 {
                cache.refresh().await.map(|_| String::new())
            } else {
                cache.resolve("truckfan").await
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(cache.len(), 2);
}

#[tokio::test]
async fn test_resolve_id_refreshes_once_then_hits() {
    let directory = MockDirectory::new(team());
    let cache = DirectoryCache::new(directory.clone());

    assert_eq!(cache.resolve_id("U0002").await.unwrap(), "U0002");
    assert_eq!(cache.resolve_id("U0001").await.unwrap(), "U0001");
    assert_eq!(directory.fetches(), 1);
}

#[tokio::test]
async fn test_resolve_id_does_not_match_display_names() {
    let directory = MockDirectory::new(team());
    let cache = DirectoryCache::new(directory.clone());

    let err = cache.resolve_id("bitoffdev").await.unwrap_err();

    assert_eq!(
        err.kind,
        DirectoryErrorKind::UserNotFound("bitoffdev".to_string())
    );
    assert_eq!(directory.fetches(), 1);
}
