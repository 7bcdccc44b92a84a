//! One fetched batch of jobs plus its pagination cursors.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::job::Job;

/// Backend page number identifying a batch. Absent means no further data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageCursor(u32);

impl PageCursor {
    pub const FIRST: PageCursor = PageCursor(1);

    /// Cursor for a page number. Page numbers start at 1; zero is rejected.
    pub fn new(page: u32) -> Option<Self> {
        (page > 0).then_some(PageCursor(page))
    }

    pub fn page(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The result of one fetch. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    items: Vec<Job>,
    next_cursor: Option<PageCursor>,
    prev_cursor: Option<PageCursor>,
    received_count: usize,
    total_count: Option<u64>,
}

impl Page {
    /// Create a page. The received count defaults to the number of items.
    pub fn new(items: Vec<Job>, next_cursor: Option<PageCursor>) -> Self {
        Self {
            received_count: items.len(),
            items,
            next_cursor,
            prev_cursor: None,
            total_count: None,
        }
    }

    /// A page with no items and nothing after it.
    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    pub fn with_prev_cursor(mut self, prev_cursor: Option<PageCursor>) -> Self {
        self.prev_cursor = prev_cursor;
        self
    }

    pub fn with_received_count(mut self, received_count: usize) -> Self {
        self.received_count = received_count;
        self
    }

    pub fn with_total_count(mut self, total_count: Option<u64>) -> Self {
        self.total_count = total_count;
        self
    }

    pub fn items(&self) -> &[Job] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Job> {
        self.items
    }

    pub fn next_cursor(&self) -> Option<PageCursor> {
        self.next_cursor
    }

    pub fn prev_cursor(&self) -> Option<PageCursor> {
        self.prev_cursor
    }

    /// Row count the backend reported for this page.
    pub fn received_count(&self) -> usize {
        self.received_count
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}
