//! Messaging platform integrations for the FoodTrax Slack bot.
//!
//! Currently Slack is the only platform. The client fetches the workspace
//! directory for the display-name cache and delivers command replies as
//! channel posts or direct messages.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod slack;

pub use slack::*;
