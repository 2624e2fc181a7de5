//! Coordinate model for storm and observer positions

use crate::geodesy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on Earth in decimal degrees, longitude negative for west
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in miles
    #[must_use]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        geodesy::distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Advisory style, e.g. `27.5N 80.3W`
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.1}{ns} {:.1}{ew}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}
