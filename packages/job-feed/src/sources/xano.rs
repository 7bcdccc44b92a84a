//! Xano implementation of the JobSource trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use job_feed::{sources::xano_source, FeedConfig, JobFeed, Query};
//!
//! let config = FeedConfig::from_env()?;
//! let source = xano_source(&config)?;
//! let mut feed = JobFeed::from_config(&config, Query::new(config.per_page));
//! let request = feed.start()?;
//! feed.run(&source, request).await;
//! ```

use async_trait::async_trait;
use tracing::debug;

pub use xano_client::XanoClient;
use xano_client::{JobDetailRecord, JobRecord, JobsPage, ListJobsParams, VenueRecord, XanoError};

use crate::config::FeedConfig;
use crate::error::{FeedError, FetchFailure, FetchResult, Result};
use crate::traits::source::{single_match, JobSource};
use crate::types::{Job, JobDetail, JobId, Page, PageCursor, Query, Venue};

/// Build a Xano-backed source from feed configuration.
pub fn xano_source(config: &FeedConfig) -> Result<XanoClient> {
    XanoClient::with_timeout(&config.base_url, config.request_timeout).map_err(|e| match e {
        XanoError::Config(msg) => FeedError::Configuration(msg),
        other => FeedError::Configuration(other.to_string()),
    })
}

impl From<XanoError> for FetchFailure {
    fn from(err: XanoError) -> Self {
        match err {
            XanoError::Api { status, message } => FetchFailure::Status { status, message },
            XanoError::Network(e) => FetchFailure::Transport(e.to_string()),
            XanoError::Parse(e) => FetchFailure::Decode(e.to_string()),
            XanoError::Config(msg) => FetchFailure::Transport(msg),
        }
    }
}

#[async_trait]
impl JobSource for XanoClient {
    async fn fetch_page(&self, query: &Query) -> FetchResult<Page> {
        let mut params = ListJobsParams::new(query.page(), query.per_page());
        if let Some(term) = query.term() {
            params = params.with_query(term);
        }
        let page = self.list_public_jobs(&params).await?;
        Ok(into_page(page))
    }

    async fn find_job(&self, company_slug: &str, position_slug: &str) -> Result<JobDetail> {
        let rows = match self.find_jobs_by_slug(company_slug, position_slug).await {
            Ok(rows) => rows,
            Err(e) if e.is_not_found() => {
                return Err(FeedError::NotFound {
                    company_slug: company_slug.to_string(),
                    position_slug: position_slug.to_string(),
                })
            }
            Err(e) => return Err(FetchFailure::from(e).into()),
        };
        debug!(company_slug, position_slug, rows = rows.len(), "Slug lookup answered");

        let rows = rows.into_iter().map(into_detail).collect();
        single_match(rows, company_slug, position_slug)
    }

    fn name(&self) -> &str {
        "xano"
    }
}

fn into_page(page: JobsPage) -> Page {
    let received = usize::try_from(page.received()).unwrap_or(usize::MAX);
    let next = page.next_page.and_then(PageCursor::new);
    let prev = page.prev_page.and_then(PageCursor::new);
    let total = page.total_items;

    Page::new(page.items.into_iter().map(into_job).collect(), next)
        .with_prev_cursor(prev)
        .with_received_count(received)
        .with_total_count(total)
}

fn into_job(record: JobRecord) -> Job {
    Job {
        id: JobId(record.id),
        name: record.name,
        slug: record.slug,
        description: record.description,
        description_md: record.description_md,
        created_at: record.created_at,
        start: record.start,
        end: record.end,
        venues: record
            .venues
            .unwrap_or_default()
            .into_iter()
            .map(into_venue)
            .collect(),
        promoter: record.promoter,
        hourly_rate: record.hourly_rate,
        public: record.public,
        company_slug: record.company_slug,
        position_slug: record.position_slug,
    }
}

fn into_venue(record: VenueRecord) -> Venue {
    Venue {
        id: record.id,
        name: record.name,
        full_address: record.full_address,
    }
}

fn into_detail(record: JobDetailRecord) -> JobDetail {
    JobDetail {
        id: record.id,
        company_name: record.company_name,
        company_slug: record.company_slug,
        position_title: record.position_title,
        position_slug: record.position_slug,
        description: record.description,
        hourly_rate: record.hourly_rate,
        skills: record.skills.unwrap_or_default(),
        company_description: record.company_description,
        apply_url: record.apply_url,
    }
}
