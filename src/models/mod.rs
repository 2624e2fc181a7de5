//! Data models shared across the advisory pipeline

pub mod coordinate;
pub mod report;

pub use coordinate::Coordinate;
pub use report::DistanceReport;
