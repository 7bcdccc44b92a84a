//! Turns user intent into fetch requests and decides replace vs append.

use tracing::debug;

use crate::types::{PageCursor, Query};

/// Whether a fetched page replaces the list or extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Replace,
    Append,
}

/// Description of one fetch, tagged with the query generation it was issued
/// under. A request whose generation is no longer current is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    query: Query,
    mode: FetchMode,
    generation: u64,
}

impl FetchRequest {
    /// What to ask the source for; `query().page()` is the page to fetch.
    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_append(&self) -> bool {
        self.mode == FetchMode::Append
    }
}

/// Owns the canonical query.
#[derive(Debug, Clone)]
pub struct QueryController {
    query: Query,
    generation: u64,
}

impl QueryController {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            generation: 0,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Request for the current query's own page, as loaded on navigation.
    pub fn initial_request(&self) -> FetchRequest {
        FetchRequest {
            query: self.query.clone(),
            mode: FetchMode::Replace,
            generation: self.generation,
        }
    }

    /// Set a new term (trimmed; blank means unfiltered), return to page 1 and
    /// start a new generation. Page size is carried over.
    pub fn apply_search(&mut self, term: &str) -> FetchRequest {
        self.query = self.query.clone().with_term(term);
        self.generation += 1;
        debug!(term = ?self.query.term(), generation = self.generation, "Search applied");
        self.initial_request()
    }

    pub fn clear_search(&mut self) -> FetchRequest {
        self.apply_search("")
    }

    /// Append request at `cursor`, or `None` when there is no cursor or a
    /// fetch is already outstanding.
    pub fn request_next_page(
        &self,
        cursor: Option<PageCursor>,
        in_flight: bool,
    ) -> Option<FetchRequest> {
        let cursor = cursor?;
        if in_flight {
            return None;
        }
        Some(FetchRequest {
            query: self.query.at(cursor),
            mode: FetchMode::Append,
            generation: self.generation,
        })
    }

    pub fn is_current(&self, request: &FetchRequest) -> bool {
        request.generation == self.generation
    }
}
