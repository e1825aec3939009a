//! Planar proximity math for the `near` command.
//!
//! Distances use a flat-earth approximation: the Euclidean distance between
//! two points measured in degrees, converted to radians and scaled by the
//! Earth's mean radius. This is good enough to compare trucks within one
//! metro area. It overstates east-west distances away from the equator (a
//! degree of longitude shrinks with `cos(lat)`, which is ignored), it drifts
//! further from the great-circle distance as points get farther apart, and it
//! is meaningless across the antimeridian or near the poles.

use crate::Coordinate;
use derive_getters::Getters;

/// Mean radius of the Earth in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate distance in kilometres between two coordinates.
///
/// # Examples
///
/// ```
/// use foodtrax_core::{Coordinate, distance_km};
///
/// let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn distance_km(reference: Coordinate, point: Coordinate) -> f64 {
    let d_lat = point.lat - reference.lat;
    let d_long = point.long - reference.long;
    d_lat.hypot(d_long).to_radians() * EARTH_RADIUS_KM
}

/// An entity paired with its distance from the reference point.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Ranked<T> {
    entity: T,
    distance_km: f64,
}

impl<T> Ranked<T> {
    /// Split into the entity and its distance.
    pub fn into_parts(self) -> (T, f64) {
        (self.entity, self.distance_km)
    }
}

/// Measures entities against a fixed reference coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct ProximityEngine {
    reference: Coordinate,
}

impl ProximityEngine {
    /// Create an engine measuring from `reference`.
    pub fn new(reference: Coordinate) -> Self {
        Self { reference }
    }

    /// Distance from the reference point to `point`.
    pub fn distance_km(&self, point: Coordinate) -> f64 {
        distance_km(self.reference, point)
    }

    /// Pair every entity with its distance from the reference point.
    ///
    /// Results come back in input order. They are not sorted by distance.
    pub fn rank<T, I>(&self, entities: I) -> Vec<Ranked<T>>
    where
        I: IntoIterator<Item = (T, Coordinate)>,
    {
        entities
            .into_iter()
            .map(|(entity, point)| Ranked {
                entity,
                distance_km: self.distance_km(point),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((d - expected).abs() < 0.01);
    }

    #[test]
    fn test_identical_points_are_zero_apart() {
        let d = distance_km(crate::METRO, crate::METRO);
        assert_eq!(format!("{:.2}", d), "0.00");
    }

    #[test]
    fn test_distance_is_planar_not_great_circle() {
        // 3-4-5 triangle in degrees
        let d = distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(3.0, 4.0));
        let expected = 5.0_f64.to_radians() * EARTH_RADIUS_KM;
        assert!((d - expected).abs() < 1e-9);
    }

    #[test]
    fn test_rank_preserves_input_order() {
        let engine = ProximityEngine::new(Coordinate::new(0.0, 0.0));
        let ranked = engine.rank(vec![
            ("far", Coordinate::new(0.0, 2.0)),
            ("near", Coordinate::new(0.0, 0.5)),
            ("middle", Coordinate::new(1.0, 0.0)),
        ]);

        let names: Vec<_> = ranked.iter().map(|r| *r.entity()).collect();
        assert_eq!(names, vec!["far", "near", "middle"]);
        assert!(ranked[0].distance_km() > ranked[1].distance_km());
    }

    #[test]
    fn test_rank_empty_input() {
        let engine = ProximityEngine::new(crate::METRO);
        let ranked: Vec<Ranked<&str>> = engine.rank(Vec::new());
        assert!(ranked.is_empty());
    }
}
