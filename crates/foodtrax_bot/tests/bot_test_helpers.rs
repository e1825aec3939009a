//! Test helpers for the FoodTrax bot.
//!
//! Provides a mock Slack workspace, a failing store, and request builders.

#![allow(dead_code)]

use async_trait::async_trait;
use foodtrax_bot::{AppContext, WebhookRequest, WebhookRequestBuilder};
use foodtrax_core::{DirectoryEntry, Row};
use foodtrax_database::InMemoryRecordStore;
use foodtrax_error::{SlackError, SlackErrorKind, SlackResult, StoreError, StoreErrorKind, StoreResult};
use foodtrax_interface::{DirectorySource, MessagingPlatform, RecordStore};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock Slack workspace recording every call.
#[derive(Default)]
pub struct MockSlack {
    entries: Vec<DirectoryEntry>,
    pub directory_fetches: AtomicUsize,
    pub opened: Mutex<Vec<String>>,
    pub posts: Mutex<Vec<(String, String)>>,
    pub fail_directory: AtomicBool,
    pub reject_posts: AtomicBool,
    pub fail_transport: AtomicBool,
}

impl MockSlack {
    /// Workspace with the given (display name, user id) pairs.
    pub fn with_users(users: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            entries: users
                .iter()
                .map(|(name, id)| DirectoryEntry::new(*name, *id))
                .collect(),
            ..Self::default()
        })
    }

    /// Workspace listing the given directory entries.
    pub fn with_entries(entries: Vec<DirectoryEntry>) -> Arc<Self> {
        Arc::new(Self {
            entries,
            ..Self::default()
        })
    }

    pub fn posts(&self) -> Vec<(String, String)> {
        self.posts.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn fetches(&self) -> usize {
        self.directory_fetches.load(Ordering::SeqCst)
    }

    fn transport_error(method: &str) -> SlackError {
        SlackError::new(SlackErrorKind::Http {
            method: method.to_string(),
            reason: "connection reset".to_string(),
        })
    }
}

#[async_trait]
impl DirectorySource for MockSlack {
    async fn list_directory(&self) -> SlackResult<Vec<DirectoryEntry>> {
        self.directory_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_directory.load(Ordering::SeqCst) {
            return Err(Self::transport_error("users.list"));
        }
        Ok(self.entries.clone())
    }
}

#[async_trait]
impl MessagingPlatform for MockSlack {
    async fn open_direct_channel(&self, user_id: &str) -> SlackResult<String> {
        if self.fail_transport.load(Ordering::SeqCst) {
            return Err(Self::transport_error("conversations.open"));
        }
        self.opened.lock().unwrap().push(user_id.to_string());
        Ok(format!("D-{}", user_id))
    }

    async fn send_channel_message(&self, channel_id: &str, text: &str) -> SlackResult<bool> {
        if self.fail_transport.load(Ordering::SeqCst) {
            return Err(Self::transport_error("chat.postMessage"));
        }
        self.posts
            .lock()
            .unwrap()
            .push((channel_id.to_string(), text.to_string()));
        Ok(!self.reject_posts.load(Ordering::SeqCst))
    }
}

/// Store whose every call fails.
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn list_tables(&self) -> StoreResult<Vec<String>> {
        Err(StoreError::new(StoreErrorKind::Connection("refused".into())))
    }

    async fn list_table_headers(&self, _table: &str) -> StoreResult<Vec<String>> {
        Err(StoreError::new(StoreErrorKind::Connection("refused".into())))
    }

    async fn fetch_table(&self, _table: &str) -> StoreResult<Vec<Row>> {
        Err(StoreError::new(StoreErrorKind::Query("lost connection".into())))
    }
}

/// Store with the given trucks as (truck_id, name) and locations as
/// (truck_id, lat, long).
pub fn truck_store(trucks: &[(Value, &str)], locations: &[(Value, f64, f64)]) -> InMemoryRecordStore {
    InMemoryRecordStore::new()
        .with_table(
            "truck_information",
            &["truck_id", "name"],
            trucks
                .iter()
                .map(|(id, name)| vec![id.clone(), json!(name)])
                .collect(),
        )
        .with_table(
            "truck_locations_memory",
            &["truck_id", "lat", "long"],
            locations
                .iter()
                .map(|(id, lat, long)| vec![id.clone(), json!(lat), json!(long)])
                .collect(),
        )
}

pub fn context(store: impl RecordStore + 'static, slack: Arc<MockSlack>) -> AppContext {
    AppContext::new(Arc::new(store), slack)
}

pub fn channel_request(text: &str) -> WebhookRequest {
    WebhookRequestBuilder::default()
        .channel_id("C0FOOD")
        .channel_name("general")
        .user_id("U0001")
        .user_name("bitoffdev")
        .text(text)
        .build()
        .unwrap()
}

pub fn direct_request(text: &str) -> WebhookRequest {
    WebhookRequestBuilder::default()
        .channel_id("D0FOOD")
        .channel_name("directmessage")
        .user_id("U0001")
        .user_name("bitoffdev")
        .text(text)
        .build()
        .unwrap()
}
