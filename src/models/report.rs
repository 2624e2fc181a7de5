//! Result of a storm distance query

use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Storm position and its distance from a point of interest
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DistanceReport {
    /// Where the advisory was read from
    pub source: String,
    /// Storm position from the advisory
    pub storm: Coordinate,
    /// Point the distance was measured from
    pub from: Coordinate,
    /// Great-circle distance in miles
    pub distance_miles: f64,
}

impl DistanceReport {
    #[must_use]
    pub fn new(source: String, storm: Coordinate, from: Coordinate) -> Self {
        Self {
            source,
            distance_miles: from.distance_to(&storm),
            storm,
            from,
        }
    }
}
