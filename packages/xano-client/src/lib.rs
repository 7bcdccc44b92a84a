//! Pure REST client for the job board's Xano backend.
//!
//! Two endpoints are used: the paginated public job listing and the
//! slug-filtered job lookup. Both may answer with either a bare array or a
//! paginated envelope; responses are normalized into [`Paginated`] here so
//! callers never branch on the backend's shape.
//!
//! # Example
//!
//! ```rust,ignore
//! use xano_client::{ListJobsParams, XanoClient};
//!
//! let client = XanoClient::new("https://x1.xano.io/api:abc")?;
//!
//! let page = client
//!     .list_public_jobs(&ListJobsParams::new(1, 12).with_query("drummer"))
//!     .await?;
//! for job in &page.items {
//!     println!("{} {}", job.id, job.name);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, XanoError};
pub use types::{
    JobDetailRecord, JobRecord, JobsPage, ListJobsParams, ListResponse, Paginated, VenueRecord,
};

use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const PUBLIC_JOBS_PATH: &str = "jobs/public";
const JOBS_PATH: &str = "jobs";

#[derive(Debug, Clone)]
pub struct XanoClient {
    client: reqwest::Client,
    base_url: Url,
}

impl XanoClient {
    /// Create a client for the given API group base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch one page of public job listings.
    pub async fn list_public_jobs(&self, params: &ListJobsParams) -> Result<JobsPage> {
        let url = self.public_jobs_url(params)?;
        tracing::debug!(page = params.page, per_page = params.per_page, q = ?params.q, "Fetching public jobs");

        let response: ListResponse<JobRecord> = self.get_json(url).await?;
        let page = response.into_paginated();
        tracing::debug!(
            received = page.received(),
            next_page = ?page.next_page,
            "Fetched public jobs"
        );
        Ok(page)
    }

    /// Fetch every job row matching a company/position slug pair.
    ///
    /// The backend does not promise uniqueness, so all matching rows are
    /// returned and the caller decides what zero or several rows mean.
    pub async fn find_jobs_by_slug(
        &self,
        company_slug: &str,
        position_slug: &str,
    ) -> Result<Vec<JobDetailRecord>> {
        let url = self.jobs_by_slug_url(company_slug, position_slug)?;
        tracing::debug!(company_slug, position_slug, "Looking up job by slug");

        let response: ListResponse<JobDetailRecord> = self.get_json(url).await?;
        Ok(response.into_paginated().items)
    }

    fn public_jobs_url(&self, params: &ListJobsParams) -> Result<Url> {
        let mut url = self.endpoint(PUBLIC_JOBS_PATH)?;
        url.query_pairs_mut().extend_pairs(params.to_pairs());
        Ok(url)
    }

    fn jobs_by_slug_url(&self, company_slug: &str, position_slug: &str) -> Result<Url> {
        let mut url = self.endpoint(JOBS_PATH)?;
        url.query_pairs_mut()
            .append_pair("company_slug", company_slug)
            .append_pair("position_slug", position_slug);
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| XanoError::Config(format!("invalid endpoint {path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let resp = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Xano request failed");
            XanoError::Network(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(url = %url, status = status.as_u16(), "Xano returned an error");
            return Err(XanoError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

// `Url::join` drops the last path segment unless the base ends with a slash.
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(XanoError::Config("base URL is empty".into()));
    }
    let normalized = format!("{}/", trimmed.trim_end_matches('/'));
    let url = Url::parse(&normalized)
        .map_err(|e| XanoError::Config(format!("invalid base URL {trimmed}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(XanoError::Config(format!("base URL cannot be a base: {trimmed}")));
    }
    Ok(url)
}
