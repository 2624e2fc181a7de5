//! Distance from a point to the storm in the current advisory
//!
//! Each query downloads the bulletin, narrows it to its summary, reads the
//! storm position, then measures the great-circle distance. Nothing is kept
//! between calls.

use crate::Result;
use crate::advisory::{self, BulletinSource, HttpBulletinSource};
use crate::config::{AdvisoryConfig, StormConfig};
use crate::error::Stage;
use crate::models::{Coordinate, DistanceReport};
use tracing::{debug, info, instrument};

/// Answers "how far is the storm from here" against one bulletin source
pub struct StormTracker {
    source: Box<dyn BulletinSource>,
}

impl StormTracker {
    /// Tracker reading from any bulletin source
    pub fn new<S: BulletinSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Tracker downloading the advisory described by `config`
    pub fn from_config(config: &AdvisoryConfig) -> Result<Self> {
        Ok(Self::new(HttpBulletinSource::new(config)?))
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        self.source.origin()
    }

    /// Summary section of a freshly fetched bulletin
    #[instrument(skip(self), fields(origin = %self.source.origin()))]
    pub fn summary(&self) -> Result<String> {
        let bulletin = self.source.fetch()?;
        let summary = advisory::extract_summary(&bulletin);
        if summary.len() == bulletin.len() {
            debug!("Summary markers not found, using the whole bulletin");
        }
        Ok(summary.to_string())
    }

    /// Current storm position
    pub fn storm_location(&self) -> Result<Coordinate> {
        let summary = self.summary().map_err(|e| e.in_stage(Stage::Summary))?;
        let storm = advisory::parse_location(&summary).map_err(|e| e.in_stage(Stage::Location))?;
        info!("Storm located at {} ({})", storm, self.source.origin());
        Ok(storm)
    }

    /// Distance in miles from `(latitude, longitude)` to the storm
    pub fn distance_from(&self, latitude: f64, longitude: f64) -> Result<f64> {
        Ok(self.report(latitude, longitude)?.distance_miles)
    }

    /// Storm position together with its distance from `(latitude, longitude)`
    #[instrument(skip(self))]
    pub fn report(&self, latitude: f64, longitude: f64) -> Result<DistanceReport> {
        let storm = self.storm_location()?;
        let report = DistanceReport::new(
            self.source.origin().to_string(),
            storm,
            Coordinate::new(latitude, longitude),
        );
        debug!("Distance to storm: {:.1} miles", report.distance_miles);
        Ok(report)
    }
}

fn default_tracker() -> Result<StormTracker> {
    let config = StormConfig::load()?;
    StormTracker::from_config(&config.advisory)
}

/// Summary of the configured advisory
pub fn get_summary() -> Result<String> {
    default_tracker()?.summary()
}

/// Distance in miles from `(lat, lon)` to the storm in the configured advisory
pub fn get_distance(lat: f64, lon: f64) -> Result<f64> {
    default_tracker()?.distance_from(lat, lon)
}
