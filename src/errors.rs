use std::fmt;

use thiserror::Error;

/// Platform a playlist lookup was performed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    YouTube,
    Spotify,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::YouTube => write!(f, "youtube"),
            Platform::Spotify => write!(f, "spotify"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid client secrets, denied consent or a failed token
    /// exchange. Aborts the run.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A named playlist is absent from the first page of the listing.
    #[error("could not find the {platform} playlist named {name}")]
    NotFound { platform: Platform, name: String },

    /// The metadata resolver failed for one video. The item is skipped.
    #[error("could not resolve metadata for {url}: {reason}")]
    Metadata { url: String, reason: String },

    /// Non-success status or transport failure on either platform.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    /// An interactive answer outside the accepted set.
    #[error("invalid input: {0}")]
    Input(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(platform: Platform, name: impl Into<String>) -> Self {
        Error::NotFound {
            platform,
            name: name.into(),
        }
    }

    pub fn metadata(url: impl Into<String>, reason: impl ToString) -> Self {
        Error::Metadata {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the run can continue past this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Metadata { .. })
    }
}
