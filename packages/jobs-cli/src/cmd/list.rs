//! Search and scroll.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use job_feed::{xano_source, FeedConfig, JobFeed, JobSource, Query, Settled};

use crate::output;

/// Search for `term` and load up to `limit` pages (all of them when `None`).
pub async fn run(config: &FeedConfig, term: Option<&str>, limit: Option<u32>) -> Result<()> {
    let source = xano_source(config).context("Failed to create backend client")?;
    let query = Query::new(config.per_page).with_term(term.unwrap_or_default());
    browse(&source, JobFeed::from_config(config, query), limit).await
}

/// Restore a query from a shared address and load its page.
pub async fn open(config: &FeedConfig, address: &str) -> Result<()> {
    let source = xano_source(config).context("Failed to create backend client")?;
    let query = Query::from_address(address, config.per_page);
    browse(&source, JobFeed::from_config(config, query), Some(1)).await
}

async fn browse<S>(source: &S, mut feed: JobFeed, limit: Option<u32>) -> Result<()>
where
    S: JobSource + ?Sized,
{
    let request = feed.start()?;
    let mut settled = feed.run(source, request).await;
    let mut loaded = 0u32;
    let mut shown = 0usize;

    loop {
        if matches!(settled, Settled::Failed(_)) {
            break;
        }
        loaded += 1;

        // Merges update known jobs in place, so anything new is at the end.
        for job in feed.items().skip(shown) {
            output::print_card(job);
        }
        shown = feed.len();

        if limit.is_some_and(|limit| loaded >= limit) {
            break;
        }
        // The terminal has no viewport: the sentinel is always in view.
        match feed.observe_sentinel(0) {
            Some(request) => settled = feed.run(source, request).await,
            None => break,
        }
    }

    output::print_summary(&feed);
    if let Some(failure) = feed.last_failure() {
        return Err(anyhow!("Failed to load jobs: {failure}"));
    }
    println!("{} jobs open \"?{}\"", "Share:".dimmed(), feed.address());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_feed::{testing::MockJobSource, FetchFailure, Job, Page, PageCursor};

    fn source() -> MockJobSource {
        MockJobSource::new()
            .with_page(None, 1, Page::new(vec![Job::new(1, "A")], PageCursor::new(2)))
            .with_page(None, 2, Page::new(vec![Job::new(2, "B")], PageCursor::new(3)))
            .with_page(None, 3, Page::new(vec![Job::new(3, "C")], None))
    }

    #[tokio::test]
    async fn test_browse_stops_at_limit() {
        let source = source();
        browse(&source, JobFeed::new(Query::default(), 700), Some(2))
            .await
            .unwrap();
        assert_eq!(source.fetch_call_count(), 2);
    }

    #[tokio::test]
    async fn test_browse_all_until_exhausted() {
        let source = source();
        browse(&source, JobFeed::new(Query::default(), 700), None)
            .await
            .unwrap();
        assert_eq!(source.fetch_call_count(), 3);
    }

    #[tokio::test]
    async fn test_browse_reports_failure() {
        let source = source().with_failure(None, 2, FetchFailure::Transport("timed out".into()));
        let err = browse(&source, JobFeed::new(Query::default(), 700), None)
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("timed out"));
        assert_eq!(source.fetch_call_count(), 2);
    }
}
