//! The incremental search-and-fetch feed.
//!
//! [`JobFeed`] is the single object a renderer talks to. Every mutation is
//! an explicit call driven by a UI event; fetching is split into issuing a
//! [`FetchRequest`] and handing its outcome back through [`JobFeed::settle`],
//! so the only suspension point is the caller's await on the source.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut feed = JobFeed::new(Query::from_address(location, 12), 700);
//!
//! let request = feed.start()?;
//! feed.run(&source, request).await;
//!
//! // On scroll:
//! if let Some(request) = feed.observe_sentinel(distance_px) {
//!     feed.run(&source, request).await;
//! }
//! ```

pub mod controller;
pub mod store;
pub mod trigger;

pub use controller::{FetchMode, FetchRequest, QueryController};
pub use store::{IncrementalListStore, ListState};
pub use trigger::{ScrollTrigger, TriggerState, DEFAULT_LOOK_AHEAD_PX};

use tracing::{debug, info, warn};

use crate::config::FeedConfig;
use crate::error::{FetchFailure, FetchResult, Result};
use crate::traits::JobSource;
use crate::types::{Job, Page, PageCursor, Query};

/// What happened when a fetch outcome was handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// A replace fetch landed; the list now holds exactly its items.
    Replaced { received: usize },
    /// An append fetch landed.
    Merged { received: usize, added: usize },
    /// The request belonged to an earlier query and was dropped.
    Discarded,
    /// The fetch failed; the list is unchanged.
    Failed(FetchFailure),
}

#[derive(Debug, Clone)]
pub struct JobFeed {
    controller: QueryController,
    store: IncrementalListStore,
    trigger: ScrollTrigger,
    last_failure: Option<FetchFailure>,
}

impl JobFeed {
    pub fn new(query: Query, look_ahead_px: u32) -> Self {
        Self {
            controller: QueryController::new(query),
            store: IncrementalListStore::new(),
            trigger: ScrollTrigger::new(look_ahead_px),
            last_failure: None,
        }
    }

    pub fn from_config(config: &FeedConfig, query: Query) -> Self {
        Self::new(query, config.look_ahead_px)
    }

    /// Begin the navigation-time load of the current query.
    pub fn start(&mut self) -> Result<FetchRequest> {
        self.store.begin_fetch()?;
        self.last_failure = None;
        Ok(self.controller.initial_request())
    }

    /// Search for `term`. The accumulated list is dropped at once and any
    /// outstanding fetch for the previous query becomes stale.
    pub fn apply_search(&mut self, term: &str) -> FetchRequest {
        let request = self.controller.apply_search(term);
        self.replace_pending();
        request
    }

    pub fn clear_search(&mut self) -> FetchRequest {
        let request = self.controller.clear_search();
        self.replace_pending();
        request
    }

    /// Explicit "load more". `None` when exhausted or a fetch is outstanding.
    pub fn request_next_page(&mut self) -> Option<FetchRequest> {
        self.request_next_page_at(self.store.next_cursor())
    }

    /// Append request at `cursor`. A missing cursor, an exhausted list or an
    /// outstanding fetch makes this a no-op.
    pub fn request_next_page_at(&mut self, cursor: Option<PageCursor>) -> Option<FetchRequest> {
        if self.store.is_exhausted() {
            debug!(cursor = ?cursor, "Next page request ignored, list exhausted");
            return None;
        }
        let request = self
            .controller
            .request_next_page(cursor, self.store.is_in_flight())?;
        if let Err(e) = self.store.begin_fetch() {
            debug!(error = %e, "Next page request ignored");
            return None;
        }
        self.last_failure = None;
        Some(request)
    }

    /// Feed the scroll trigger a sentinel observation.
    pub fn observe_sentinel(&mut self, distance_px: i64) -> Option<FetchRequest> {
        if !self.trigger.observe(distance_px, &self.store) {
            return None;
        }
        let request = self.request_next_page();
        if request.is_none() {
            self.trigger.fetch_settled(&self.store, true);
        }
        request
    }

    /// Hand back the outcome of `request`.
    pub fn settle(&mut self, request: &FetchRequest, outcome: FetchResult<Page>) -> Settled {
        if !self.controller.is_current(request) {
            debug!(
                generation = request.generation(),
                current = self.controller.generation(),
                "Discarding stale response"
            );
            return Settled::Discarded;
        }

        let settled = match outcome {
            Ok(page) => {
                self.last_failure = None;
                let received = page.received_count();
                match request.mode() {
                    FetchMode::Replace => {
                        self.store.reset(page);
                        Settled::Replaced { received }
                    }
                    FetchMode::Append => {
                        let added = self.store.merge(page);
                        Settled::Merged { received, added }
                    }
                }
            }
            Err(failure) => {
                warn!(page = request.query().page(), error = %failure, "Fetch failed");
                self.store.end_fetch();
                self.last_failure = Some(failure.clone());
                Settled::Failed(failure)
            }
        };

        let succeeded = !matches!(settled, Settled::Failed(_));
        self.trigger.fetch_settled(&self.store, succeeded);
        settled
    }

    /// Fetch `request` from `source` and settle it.
    pub async fn run<S>(&mut self, source: &S, request: FetchRequest) -> Settled
    where
        S: JobSource + ?Sized,
    {
        info!(
            source = source.name(),
            term = ?request.query().term(),
            page = request.query().page(),
            mode = ?request.mode(),
            "Fetching jobs"
        );
        let outcome = source.fetch_page(request.query()).await;
        let settled = self.settle(&request, outcome);
        if let Settled::Replaced { received } | Settled::Merged { received, .. } = settled {
            info!(received, total = self.store.len(), has_more = self.store.has_more(), "Jobs fetched");
        }
        settled
    }

    pub fn query(&self) -> &Query {
        self.controller.query()
    }

    /// Shareable address of the current query.
    pub fn address(&self) -> String {
        self.controller.query().to_address()
    }

    pub fn items(&self) -> impl ExactSizeIterator<Item = &Job> + '_ {
        self.store.items()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn is_in_flight(&self) -> bool {
        self.store.is_in_flight()
    }

    pub fn has_more(&self) -> bool {
        self.store.has_more()
    }

    pub fn is_exhausted(&self) -> bool {
        self.store.is_exhausted()
    }

    /// The most recent fetch failure, cleared by the next fetch.
    pub fn last_failure(&self) -> Option<&FetchFailure> {
        self.last_failure.as_ref()
    }

    pub fn trigger_state(&self) -> TriggerState {
        self.trigger.state()
    }

    pub fn snapshot(&self) -> ListState {
        self.store.snapshot()
    }

    // A new query owns a fresh list; the old one's in-flight fetch is now stale.
    fn replace_pending(&mut self) {
        self.store = IncrementalListStore::new();
        self.trigger.restart();
        self.last_failure = None;
        if let Err(e) = self.store.begin_fetch() {
            debug!(error = %e, "Fresh store already in flight");
        }
    }
}
