//! Testing utilities.
//!
//! [`MockJobSource`] answers from canned pages keyed by search term and page
//! number, and records every query it is asked for.
//!
//! ```rust,ignore
//! use job_feed::testing::MockJobSource;
//!
//! let source = MockJobSource::new()
//!     .with_page(None, 1, Page::new(vec![Job::new(1, "Drummer")], PageCursor::new(2)))
//!     .with_page(None, 2, Page::new(vec![Job::new(2, "Rigger")], None));
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchFailure, FetchResult, Result};
use crate::traits::source::{single_match, JobSource};
use crate::types::{JobDetail, Page, Query};

type PageKey = (Option<String>, u32);

/// Mock job source for testing.
#[derive(Default)]
pub struct MockJobSource {
    pages: Arc<RwLock<HashMap<PageKey, FetchResult<Page>>>>,
    details: Arc<RwLock<Vec<JobDetail>>>,
    fetch_calls: Arc<RwLock<Vec<Query>>>,
}

impl MockJobSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `page` of `term` with `result`. A blank term is the unfiltered list.
    pub fn add_page(&self, term: Option<&str>, page: u32, result: FetchResult<Page>) {
        let key = (term.and_then(Query::normalize_term), page);
        self.pages.write().unwrap().insert(key, result);
    }

    /// Add a canned page (builder pattern).
    pub fn with_page(self, term: Option<&str>, page: u32, result: Page) -> Self {
        self.add_page(term, page, Ok(result));
        self
    }

    /// Make `page` of `term` fail (builder pattern).
    pub fn with_failure(self, term: Option<&str>, page: u32, failure: FetchFailure) -> Self {
        self.add_page(term, page, Err(failure));
        self
    }

    /// Add a row visible to detail lookups (builder pattern).
    pub fn with_detail(self, detail: JobDetail) -> Self {
        self.details.write().unwrap().push(detail);
        self
    }

    /// Get the queries that were fetched, in order.
    pub fn fetch_calls(&self) -> Vec<Query> {
        self.fetch_calls.read().unwrap().clone()
    }

    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn reset_calls(&self) {
        self.fetch_calls.write().unwrap().clear();
    }
}

impl Clone for MockJobSource {
    fn clone(&self) -> Self {
        Self {
            pages: Arc::clone(&self.pages),
            details: Arc::clone(&self.details),
            fetch_calls: Arc::clone(&self.fetch_calls),
        }
    }
}

#[async_trait]
impl JobSource for MockJobSource {
    async fn fetch_page(&self, query: &Query) -> FetchResult<Page> {
        self.fetch_calls.write().unwrap().push(query.clone());

        let key = (query.term().map(str::to_string), query.page());
        self.pages
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(Page::empty()))
    }

    async fn find_job(&self, company_slug: &str, position_slug: &str) -> Result<JobDetail> {
        let rows = self
            .details
            .read()
            .unwrap()
            .iter()
            .filter(|d| d.matches(company_slug, position_slug))
            .cloned()
            .collect();
        single_match(rows, company_slug, position_slug)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
