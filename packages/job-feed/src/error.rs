//! Typed errors for the job feed.
//!
//! Fetch failures are kept apart from [`FeedError`] because they are not
//! fatal: a failed page leaves the list untouched and is held on the feed
//! for a retry affordance, so they must be cheap to clone.

use thiserror::Error;

/// Errors surfaced by the job feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Required backend location missing or invalid
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Detail lookup matched nothing
    #[error("job not found: {company_slug}/{position_slug}")]
    NotFound {
        company_slug: String,
        position_slug: String,
    },

    /// Detail lookup matched more than one row
    #[error("{count} jobs match {company_slug}/{position_slug}")]
    AmbiguousMatch {
        company_slug: String,
        position_slug: String,
        count: usize,
    },

    /// Backend unreachable or answered with a failure
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchFailure),

    /// A second fetch was started while one is outstanding
    #[error("a fetch is already in flight")]
    AlreadyInFlight,
}

impl FeedError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FeedError::NotFound { .. })
    }
}

/// Why a page fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// Backend reachable but returned a non-success status
    #[error("backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection failure or transport timeout
    #[error("transport error: {0}")]
    Transport(String),

    /// Body did not match any known response shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Result type alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;

/// Result type alias for a single page fetch.
pub type FetchResult<T> = std::result::Result<T, FetchFailure>;
