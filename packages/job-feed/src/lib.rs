//! Incremental Search-and-Fetch Core for the Job Board
//!
//! Drives a paginated, filterable listing of job postings: a search term and
//! page size live in a shareable address, pages are fetched one at a time,
//! and each page is merged into an accumulated list that never shows the same
//! job twice.
//!
//! # Usage
//!
//! ```rust,ignore
//! use job_feed::{sources::xano_source, FeedConfig, JobFeed, Query};
//!
//! let config = FeedConfig::from_env()?;
//! let source = xano_source(&config)?;
//!
//! let query = Query::from_address("?q=drummer&perPage=24", config.per_page);
//! let mut feed = JobFeed::from_config(&config, query);
//!
//! let request = feed.start()?;
//! feed.run(&source, request).await;
//!
//! while let Some(request) = feed.observe_sentinel(0) {
//!     feed.run(&source, request).await;
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`] - Jobs, pages, cursors and the query
//! - [`feed`] - List store, query controller, scroll trigger and the feed that ties them
//! - [`traits`] - The `JobSource` seam
//! - [`sources`] - Backend implementations (Xano)
//! - [`testing`] - Mock source for tests

pub mod config;
pub mod error;
pub mod feed;
pub mod sources;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use config::FeedConfig;
pub use error::{FeedError, FetchFailure, FetchResult, Result};
pub use feed::{
    FetchMode, FetchRequest, IncrementalListStore, JobFeed, ListState, QueryController,
    ScrollTrigger, Settled, TriggerState, DEFAULT_LOOK_AHEAD_PX,
};
pub use traits::{single_match, JobSource};
pub use types::{
    Job, JobDetail, JobId, Page, PageCursor, Query, Venue, DEFAULT_PER_PAGE, MAX_PER_PAGE,
};

#[cfg(feature = "xano")]
pub use sources::{xano_source, XanoClient};

// Re-export testing utilities
pub use testing::MockJobSource;
