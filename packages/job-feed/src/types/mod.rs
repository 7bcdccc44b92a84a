//! Data model shared by the feed, its sources, and renderers.

pub mod job;
pub mod page;
pub mod query;

pub use job::{Job, JobDetail, JobId, Venue};
pub use page::{Page, PageCursor};
pub use query::{Query, DEFAULT_PER_PAGE, MAX_PER_PAGE};
