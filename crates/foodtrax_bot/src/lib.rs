//! Slash-command bot answering questions about FoodTrax trucks.
//!
//! This crate ties the record store, the Slack client and the directory
//! cache together:
//! - **Command**: parses webhook text
//! - **CommandDispatcher**: composes and delivers replies
//! - **api**: axum router receiving Slack webhooks
//! - **status**: operator status report

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod command;
mod context;
mod dispatcher;
mod status;
mod webhook;

pub use api::{ApiState, HEALTH_PLACEHOLDER, create_router, serve};
pub use command::{Command, USAGE};
pub use context::AppContext;
pub use dispatcher::{APOLOGY, CHECKIN_UNSUPPORTED, CommandDispatcher, NO_TRUCKS};
pub use status::{EXPECTED_TABLES, StatusReport, collect_status, send_status};
pub use webhook::{DIRECT_MESSAGE_CHANNEL, WebhookRequest, WebhookRequestBuilder};
