//! Error types and handling for `stormdist`

use std::num::ParseFloatError;
use thiserror::Error;

/// Broad category of a [`StormError`], stable across context wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Read,
    NoLocationLine,
    MalformedLocation,
    NumericParse,
    Config,
}

/// Pipeline stage that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Summary,
    Location,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Summary => f.write_str("cannot get summary"),
            Stage::Location => f.write_str("cannot locate storm"),
        }
    }
}

/// Main error type for `stormdist`
#[derive(Error, Debug)]
pub enum StormError {
    /// The advisory request could not be sent or was answered with an error status
    #[error("cannot get report from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The advisory body could not be read
    #[error("cannot get body from {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The summary has no line starting with `LOCATION`
    #[error("no LOCATION in summary")]
    NoLocationLine,

    /// A `LOCATION` line exists but does not have the expected shape
    #[error("invalid LOCATION: {line:?}")]
    MalformedLocation { line: String },

    /// A captured coordinate could not be parsed as a float
    #[error("cannot parse {axis} {value:?}: {source}")]
    NumericParse {
        axis: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// Context wrapper naming the stage an inner error came from
    #[error("{stage}: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<StormError>,
    },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl StormError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap `self` with the stage it surfaced from
    #[must_use]
    pub fn in_stage(self, stage: Stage) -> Self {
        Self::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// Kind of the innermost error, ignoring stage wrappers
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            StormError::Fetch { .. } => ErrorKind::Fetch,
            StormError::Read { .. } => ErrorKind::Read,
            StormError::NoLocationLine => ErrorKind::NoLocationLine,
            StormError::MalformedLocation { .. } => ErrorKind::MalformedLocation,
            StormError::NumericParse { .. } => ErrorKind::NumericParse,
            StormError::Stage { source, .. } => source.kind(),
            StormError::Config { .. } => ErrorKind::Config,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Fetch | ErrorKind::Read => {
                "Unable to download the hurricane advisory. Please check your internet connection."
                    .to_string()
            }
            ErrorKind::NoLocationLine => {
                "The advisory does not report a storm location.".to_string()
            }
            ErrorKind::MalformedLocation | ErrorKind::NumericParse => {
                "The advisory's storm location could not be understood.".to_string()
            }
            ErrorKind::Config => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}
