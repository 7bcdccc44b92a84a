//! JobSource trait: the data-fetch seam.
//!
//! The feed never talks to the network itself. A `JobSource` turns a
//! [`Query`] into a canonical [`Page`], normalizing whatever shape the
//! backend answers with before it reaches the core.

use async_trait::async_trait;

use crate::error::{FeedError, FetchResult, Result};
use crate::types::{JobDetail, Page, Query};

#[async_trait]
pub trait JobSource: Send + Sync {
    /// Fetch the page `query.page()` of results for `query.term()`.
    ///
    /// Transport timeouts and non-success statuses come back as
    /// [`FetchFailure`](crate::FetchFailure); they never panic.
    async fn fetch_page(&self, query: &Query) -> FetchResult<Page>;

    /// Look up one job by its company and position slugs.
    async fn find_job(&self, company_slug: &str, position_slug: &str) -> Result<JobDetail>;

    /// Get the source name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Reduce the rows of a slug lookup to exactly one job.
///
/// The slug filter is not guaranteed unique on the backend: zero rows is
/// `NotFound`, more than one is `AmbiguousMatch` rather than a guess.
pub fn single_match(
    rows: Vec<JobDetail>,
    company_slug: &str,
    position_slug: &str,
) -> Result<JobDetail> {
    let count = rows.len();
    let mut rows = rows.into_iter();
    match (rows.next(), count) {
        (Some(job), 1) => Ok(job),
        (None, _) => Err(FeedError::NotFound {
            company_slug: company_slug.to_string(),
            position_slug: position_slug.to_string(),
        }),
        (Some(_), count) => {
            tracing::warn!(company_slug, position_slug, count, "Slug lookup matched several jobs");
            Err(FeedError::AmbiguousMatch {
                company_slug: company_slug.to_string(),
                position_slug: position_slug.to_string(),
                count,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str) -> JobDetail {
        JobDetail {
            id: id.to_string(),
            company_name: "SQRZ".into(),
            company_slug: "sqrz".into(),
            position_title: "Rigger".into(),
            position_slug: "rigger".into(),
            description: None,
            hourly_rate: None,
            skills: vec![],
            company_description: None,
            apply_url: None,
        }
    }

    #[test]
    fn test_single_match_one_row() {
        let job = single_match(vec![detail("1")], "sqrz", "rigger").unwrap();
        assert_eq!(job.id, "1");
    }

    #[test]
    fn test_single_match_no_rows() {
        let err = single_match(vec![], "sqrz", "rigger").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_single_match_many_rows() {
        let err = single_match(vec![detail("1"), detail("2")], "sqrz", "rigger").unwrap_err();
        assert!(matches!(err, FeedError::AmbiguousMatch { count: 2, .. }));
    }
}
