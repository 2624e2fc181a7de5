//! Advisory bulletin handling
//!
//! This module covers everything between the network and a storm coordinate:
//! - Downloading the plain-text bulletin ([`HttpBulletinSource`])
//! - Narrowing it to the summary section ([`extract_summary`])
//! - Reading the storm position off the `LOCATION` line ([`parse_location`])

pub mod fetch;
pub mod location;
pub mod summary;

pub use fetch::HttpBulletinSource;
pub use location::parse_location;
pub use summary::extract_summary;

use crate::Result;

/// Anything that can hand back the raw text of an advisory bulletin
pub trait BulletinSource: Send + Sync {
    /// Where the bulletin comes from, for logs and error messages
    fn origin(&self) -> &str;

    /// Fetch the full bulletin text. Every call reads the source afresh.
    fn fetch(&self) -> Result<String>;
}

/// Bulletin text held in memory, e.g. a saved advisory or a test fixture
#[derive(Debug, Clone)]
pub struct StaticBulletin {
    origin: String,
    text: String,
}

impl StaticBulletin {
    pub fn new<O: Into<String>, T: Into<String>>(origin: O, text: T) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
        }
    }
}

impl BulletinSource for StaticBulletin {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
