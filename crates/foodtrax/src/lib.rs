//! FoodTrax Slack bot.
//!
//! Answers slash commands about the food trucks tracked in the FoodTrax
//! database. This facade crate re-exports the workspace crates and adds the
//! pieces the `foodtrax` binary needs: layered configuration, tracing setup,
//! and wiring of the MySQL store and Slack client into an `AppContext`.
//!
//! # Example
//!
//! ```rust,ignore
//! use foodtrax::{ApiState, FoodtraxConfig, build_context, serve};
//!
//! let config = FoodtraxConfig::load(None)?;
//! let context = build_context(&config)?;
//! serve(config.server().bind(), ApiState::new(context)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;

#[cfg(feature = "mysql")]
mod wiring;

pub use crate::config::{
    DatabaseConfig, FoodtraxConfig, LogFormat, LoggingConfig, ServerConfig, SlackConfig,
};
pub use crate::observability::{ObservabilityConfig, init_observability};

#[cfg(feature = "mysql")]
pub use wiring::build_context;

pub use foodtrax_bot::*;
pub use foodtrax_cache::{DirectoryCache, DirectorySnapshot};
pub use foodtrax_core::*;
pub use foodtrax_database::*;
pub use foodtrax_error::*;
pub use foodtrax_interface::*;
pub use foodtrax_social::{SlackClient, SlackSettings, SlackSettingsBuilder};
