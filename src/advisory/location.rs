//! Storm position from the `LOCATION` line

use crate::models::Coordinate;
use crate::{Result, StormError};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

const LOCATION_PREFIX: &str = "LOCATION";

/// `LOCATION...27.5N 80.3W`: degrees with exactly one decimal, west longitude unsigned
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"LOCATION...([0-9]+\.[0-9])N ([0-9]+\.[0-9])W").expect("LOCATION regex")
});

fn parse_degrees(axis: &'static str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|source| StormError::NumericParse {
            axis,
            value: value.to_string(),
            source,
        })
}

/// Read the storm coordinate from the first line starting with `LOCATION`.
///
/// Longitude is returned signed, negative for west.
pub fn parse_location(summary: &str) -> Result<Coordinate> {
    let line = summary
        .lines()
        .find(|line| line.starts_with(LOCATION_PREFIX))
        .ok_or(StormError::NoLocationLine)?;

    debug!("Found location line: {}", line);

    let captures = LOCATION_RE
        .captures(line)
        .ok_or_else(|| StormError::MalformedLocation {
            line: line.to_string(),
        })?;

    let latitude = parse_degrees("latitude", &captures[1])?;
    let longitude = parse_degrees("longitude", &captures[2])?;

    Ok(Coordinate::new(latitude, -longitude))
}
