//! Trait definitions for the FoodTrax Slack bot.
//!
//! This crate defines the seams between the command dispatcher and its two
//! remote data sources: the FoodTrax database and the messaging platform.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{DirectorySource, MessagingPlatform, RecordStore};
