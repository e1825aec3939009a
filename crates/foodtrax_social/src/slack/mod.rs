//! Slack integration.
//!
//! Implements `DirectorySource` and `MessagingPlatform` against the Slack
//! Web API with bearer-token auth.

mod client;
mod conversions;
mod json_models;

pub use client::{DEFAULT_BASE_URL, SlackClient, SlackSettings, SlackSettingsBuilder};
pub use conversions::{member_to_entry, members_to_entries};
pub use json_models::{
    ConversationsOpenRequest, ConversationsOpenResponse, PostMessageRequest, PostMessageResponse,
    ResponseMetadata, SlackChannel, SlackMember, SlackProfile, SlackStatus, UsersListResponse,
};
