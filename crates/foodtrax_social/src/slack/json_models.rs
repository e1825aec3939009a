//! JSON models for the Slack Web API.
//!
//! Only the fields the bot reads are modelled; everything else in a Slack
//! response is ignored during deserialization.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Status fields present on every Web API response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Getters)]
pub struct SlackStatus {
    /// Whether Slack accepted the call
    #[serde(default)]
    ok: bool,
    /// Error code when `ok` is false (e.g. "channel_not_found")
    #[serde(default)]
    error: Option<String>,
}

/// Profile block of a workspace member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Getters)]
pub struct SlackProfile {
    /// Name chosen by the user, may be empty
    #[serde(default)]
    display_name: String,
    /// Full name
    #[serde(default)]
    real_name: String,
}

/// Workspace member from `users.list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct SlackMember {
    /// Stable user id (e.g. "U024BE7LH")
    id: String,
    /// Legacy username
    #[serde(default)]
    name: String,
    /// Deactivated account
    #[serde(default)]
    deleted: bool,
    /// Profile block
    #[serde(default)]
    profile: SlackProfile,
}

/// Pagination block of cursor-paginated methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Getters)]
pub struct ResponseMetadata {
    /// Cursor for the next page, empty on the last page
    #[serde(default)]
    next_cursor: String,
}

/// Response body of `users.list`.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct UsersListResponse {
    #[serde(flatten)]
    status: SlackStatus,
    #[serde(default)]
    members: Vec<SlackMember>,
    #[serde(default)]
    response_metadata: ResponseMetadata,
}

impl UsersListResponse {
    /// Split into the status, the members, and the next cursor.
    pub fn into_parts(self) -> (SlackStatus, Vec<SlackMember>, String) {
        (
            self.status,
            self.members,
            self.response_metadata.next_cursor,
        )
    }
}

/// Channel object returned by `conversations.open`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct SlackChannel {
    /// Channel id (e.g. "D069C7QFK")
    id: String,
}

/// Response body of `conversations.open`.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct ConversationsOpenResponse {
    #[serde(flatten)]
    status: SlackStatus,
    #[serde(default)]
    channel: Option<SlackChannel>,
}

/// Response body of `chat.postMessage`.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct PostMessageResponse {
    #[serde(flatten)]
    status: SlackStatus,
    /// Channel the message landed in
    #[serde(default)]
    channel: Option<String>,
    /// Message timestamp
    #[serde(default)]
    ts: Option<String>,
}

/// Request body of `conversations.open`.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationsOpenRequest<'a> {
    /// User id to open a direct conversation with
    pub users: &'a str,
}

/// Request body of `chat.postMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageRequest<'a> {
    /// Target channel id
    pub channel: &'a str,
    /// Message text
    pub text: &'a str,
}
