//! Error types for the FoodTrax Slack bot.
//!
//! This crate provides the error types used throughout the FoodTrax workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use foodtrax_error::{FoodtraxResult, StoreError, StoreErrorKind};
//!
//! fn fetch_trucks() -> FoodtraxResult<Vec<String>> {
//!     Err(StoreError::new(StoreErrorKind::Query("connection reset".into())))?
//! }
//!
//! match fetch_trucks() {
//!     Ok(trucks) => println!("Got: {:?}", trucks),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod directory;
mod dispatch;
mod error;
mod slack;
mod store;

pub use config::ConfigError;
pub use directory::{DirectoryError, DirectoryErrorKind, DirectoryResult};
pub use dispatch::{DispatchError, DispatchErrorKind, DispatchResult};
pub use error::{FoodtraxError, FoodtraxErrorKind, FoodtraxResult};
pub use slack::{SlackError, SlackErrorKind, SlackResult};
pub use store::{StoreError, StoreErrorKind, StoreResult};
