//! Slack Web API client.
//!
//! This module provides the SlackClient struct, which implements the
//! directory and messaging traits on top of three Web API methods:
//! `users.list`, `conversations.open`, and `chat.postMessage`.

use super::{
    ConversationsOpenRequest, ConversationsOpenResponse, PostMessageRequest, PostMessageResponse,
    SlackStatus, UsersListResponse, conversions,
};
use async_trait::async_trait;
use derive_getters::Getters;
use foodtrax_core::DirectoryEntry;
use foodtrax_error::{SlackError, SlackErrorKind, SlackResult};
use foodtrax_interface::{DirectorySource, MessagingPlatform};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Default Web API root.
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Members requested per `users.list` page.
const PAGE_SIZE: &str = "200";

/// Connection settings for the Slack client.
///
/// # Example
/// ```
/// use foodtrax_social::SlackSettingsBuilder;
///
/// let settings = SlackSettingsBuilder::default()
///     .token("xoxb-test")
///     .timeout_seconds(5u64)
///     .build()
///     .unwrap();
/// assert_eq!(settings.base_url(), "https://slack.com/api");
/// ```
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct SlackSettings {
    /// Bot token (`xoxb-...`)
    token: String,
    /// Web API root, overridable for tests and proxies
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Per-request timeout
    #[builder(default = "10")]
    timeout_seconds: u64,
}

/// Slack Web API client for one workspace.
///
/// Cheap to clone: the underlying reqwest client shares its connection pool.
#[derive(Debug, Clone)]
pub struct SlackClient {
    http: Client,
    token: String,
    base_url: String,
}

impl SlackClient {
    /// Create a client from settings.
    ///
    /// # Errors
    ///
    /// Returns `Http` if the HTTP client cannot be built (e.g. the TLS
    /// backend fails to initialise).
    #[instrument(skip_all, fields(base_url = %settings.base_url()))]
    pub fn new(settings: &SlackSettings) -> SlackResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(*settings.timeout_seconds()))
            .build()
            .map_err(|e| {
                SlackError::new(SlackErrorKind::Http {
                    method: "client".to_string(),
                    reason: e.to_string(),
                })
            })?;

        debug!("Created Slack client");

        Ok(Self {
            http,
            token: settings.token().clone(),
            base_url: settings.base_url().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    async fn get<R>(&self, method: &str, query: &[(&str, &str)]) -> SlackResult<R>
    where
        R: DeserializeOwned,
    {
        let request = self.http.get(self.url(method)).query(query);
        self.send(method, request).await
    }

    async fn post<B, R>(&self, method: &str, body: &B) -> SlackResult<R>
    where
        B: serde::Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.http.post(self.url(method)).json(body);
        self.send(method, request).await
    }

    async fn send<R>(&self, method: &str, request: RequestBuilder) -> SlackResult<R>
    where
        R: DeserializeOwned,
    {
        let response = request.bearer_auth(&self.token).send().await.map_err(|e| {
            error!(method, error = ?e, "HTTP request failed");
            SlackError::new(SlackErrorKind::Http {
                method: method.to_string(),
                reason: e.to_string(),
            })
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(method, status = %status, error = %error_text, "Slack returned HTTP error");
            return Err(SlackError::new(SlackErrorKind::Http {
                method: method.to_string(),
                reason: format!("status {}: {}", status, error_text),
            }));
        }

        let body = response.text().await.map_err(|e| {
            error!(method, error = ?e, "Failed to read response");
            SlackError::new(SlackErrorKind::Http {
                method: method.to_string(),
                reason: e.to_string(),
            })
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!(method, error = ?e, response = %body, "Failed to parse JSON");
            SlackError::new(SlackErrorKind::Parse {
                method: method.to_string(),
                reason: e.to_string(),
            })
        })
    }
}

fn ensure_ok(method: &str, status: &SlackStatus) -> SlackResult<()> {
    if *status.ok() {
        return Ok(());
    }
    let error = status
        .error()
        .clone()
        .unwrap_or_else(|| "unknown_error".to_string());
    warn!(method, error = %error, "Slack reported failure");
    Err(SlackError::new(SlackErrorKind::Api {
        method: method.to_string(),
        error,
    }))
}

#[async_trait]
impl DirectorySource for SlackClient {
    #[instrument(skip(self))]
    async fn list_directory(&self) -> SlackResult<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();
        let mut cursor = String::new();
        let mut pages = 0usize;

        loop {
            let mut query = vec![("limit", PAGE_SIZE)];
            if !cursor.is_empty() {
                query.push(("cursor", cursor.as_str()));
            }

            let page: UsersListResponse = self.get("users.list", &query).await?;
            let (status, members, next_cursor) = page.into_parts();
            ensure_ok("users.list", &status)?;

            pages += 1;
            debug!(page = pages, members = members.len(), "Fetched directory page");
            entries.extend(conversions::members_to_entries(members));

            if next_cursor.is_empty() {
                break;
            }
            cursor = next_cursor;
        }

        info!(entries = entries.len(), pages, "Fetched Slack directory");
        Ok(entries)
    }
}

#[async_trait]
impl MessagingPlatform for SlackClient {
    #[instrument(skip(self))]
    async fn open_direct_channel(&self, user_id: &str) -> SlackResult<String> {
        let method = "conversations.open";
        let response: ConversationsOpenResponse = self
            .post(method, &ConversationsOpenRequest { users: user_id })
            .await?;
        ensure_ok(method, response.status())?;

        response
            .channel()
            .as_ref()
            .map(|channel| channel.id().clone())
            .ok_or_else(|| {
                error!("conversations.open response has no channel");
                SlackError::new(SlackErrorKind::Parse {
                    method: method.to_string(),
                    reason: "missing channel".to_string(),
                })
            })
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn send_channel_message(&self, channel_id: &str, text: &str) -> SlackResult<bool> {
        let response: PostMessageResponse = self
            .post(
                "chat.postMessage",
                &PostMessageRequest {
                    channel: channel_id,
                    text,
                },
            )
            .await?;

        let status = response.status();
        if !*status.ok() {
            warn!(error = ?status.error(), "chat.postMessage was not accepted");
            return Ok(false);
        }

        debug!(ts = ?response.ts(), "Message posted");
        Ok(true)
    }
}
