//! Messaging directory caching.
//!
//! This crate keeps a point-in-time copy of the messaging platform's user
//! directory so display names can be resolved to user ids without a network
//! round trip, refreshing only when a lookup misses.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod directory;

pub use directory::{DirectoryCache, DirectorySnapshot};
