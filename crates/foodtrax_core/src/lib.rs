//! Core data types for the FoodTrax Slack bot.
//!
//! This crate provides the records read from the FoodTrax database, the
//! messaging directory entry, and the planar proximity math used by the
//! `near` command.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod directory;
mod geo;
mod proximity;
mod row;
mod truck;

pub use directory::DirectoryEntry;
pub use geo::{Coordinate, METRO};
pub use proximity::{EARTH_RADIUS_KM, ProximityEngine, Ranked, distance_km};
pub use row::{Row, value_text};
pub use truck::{TruckLocationRecord, TruckRecord};
