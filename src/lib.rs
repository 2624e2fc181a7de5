//! `stormdist` - how far away is the hurricane?
//!
//! This library downloads the National Hurricane Center's public advisory,
//! reads the storm position from its summary, and measures the great-circle
//! distance to a point of interest.

pub mod advisory;
pub mod config;
pub mod error;
pub mod geodesy;
pub mod logging;
pub mod models;
pub mod tracker;

// Re-export core types for public API
pub use advisory::{BulletinSource, HttpBulletinSource, StaticBulletin};
pub use crate::config::StormConfig;
pub use error::{ErrorKind, StormError};
pub use models::{Coordinate, DistanceReport};
pub use tracker::{StormTracker, get_distance, get_summary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, StormError>;
