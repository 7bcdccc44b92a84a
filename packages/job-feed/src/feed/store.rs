//! Merge/dedup engine for paginated results.
//!
//! Items are held in an insertion-ordered map keyed by [`JobId`]. Inserting
//! an id that is already present replaces the value without moving it, which
//! gives the merge policy directly: last write wins on content, first sighting
//! wins on position.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::error::{FeedError, Result};
use crate::types::{Job, JobId, Page, PageCursor};

/// Owned view of the accumulated list, handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListState {
    pub items: Vec<Job>,
    pub next_cursor: Option<PageCursor>,
    pub in_flight: bool,
}

#[derive(Debug, Clone, Default)]
pub struct IncrementalListStore {
    items: IndexMap<JobId, Job>,
    next_cursor: Option<PageCursor>,
    in_flight: bool,
    // False until the first page lands, so an empty new store is not "exhausted".
    loaded: bool,
}

impl IncrementalListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store built from the first page of a query.
    pub fn from_page(page: Page) -> Self {
        let mut store = Self::new();
        store.reset(page);
        store
    }

    /// Replace everything with `page`. Duplicates inside the page collapse
    /// onto the first position with the last copy's content.
    pub fn reset(&mut self, page: Page) {
        let next_cursor = page.next_cursor();
        self.items.clear();
        for job in page.into_items() {
            self.items.insert(job.id, job);
        }
        self.next_cursor = next_cursor;
        self.in_flight = false;
        self.loaded = true;
        debug!(len = self.items.len(), next_cursor = ?self.next_cursor, "List reset");
    }

    /// Append `page`, updating already-seen ids in place.
    ///
    /// Returns how many ids were new.
    pub fn merge(&mut self, page: Page) -> usize {
        let before = self.items.len();
        let next_cursor = page.next_cursor();
        for job in page.into_items() {
            self.items.insert(job.id, job);
        }
        self.next_cursor = next_cursor;
        self.in_flight = false;
        self.loaded = true;

        let added = self.items.len() - before;
        debug!(len = self.items.len(), added, next_cursor = ?self.next_cursor, "Page merged");
        added
    }

    /// Mark a fetch as outstanding.
    pub fn begin_fetch(&mut self) -> Result<()> {
        if self.in_flight {
            return Err(FeedError::AlreadyInFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    /// Clear the outstanding-fetch flag. Called on success and failure alike.
    pub fn end_fetch(&mut self) {
        self.in_flight = false;
    }

    pub fn items(&self) -> impl ExactSizeIterator<Item = &Job> + '_ {
        self.items.values()
    }

    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.items.get(&id)
    }

    /// Position of `id` in display order.
    pub fn position(&self, id: JobId) -> Option<usize> {
        self.items.get_index_of(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn next_cursor(&self) -> Option<PageCursor> {
        self.next_cursor
    }

    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// A page has landed and it reported nothing after it.
    pub fn is_exhausted(&self) -> bool {
        self.loaded && self.next_cursor.is_none()
    }

    pub fn snapshot(&self) -> ListState {
        ListState {
            items: self.items.values().cloned().collect(),
            next_cursor: self.next_cursor,
            in_flight: self.in_flight,
        }
    }
}
