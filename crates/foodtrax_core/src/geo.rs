//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_more::Display)]
#[display("({}, {})", lat, long)]
pub struct Coordinate {
    /// Latitude, degrees north
    pub lat: f64,
    /// Longitude, degrees east
    pub long: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

/// Reference point for the `near` command (downtown Rochester, NY).
pub const METRO: Coordinate = Coordinate::new(43.1560644, -77.6070555);
