//! Detail view for a single job.

use anyhow::{Context, Result};
use colored::Colorize;
use job_feed::{xano_source, FeedConfig, JobSource};

use crate::output;

pub async fn run(config: &FeedConfig, company_slug: &str, position_slug: &str) -> Result<()> {
    let source = xano_source(config).context("Failed to create backend client")?;
    show(&source, company_slug, position_slug).await
}

async fn show<S>(source: &S, company_slug: &str, position_slug: &str) -> Result<()>
where
    S: JobSource + ?Sized,
{
    match source.find_job(company_slug, position_slug).await {
        Ok(job) => {
            output::print_detail(&job);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("{}", "Job not found".yellow());
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to load /{company_slug}/{position_slug}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_feed::{testing::MockJobSource, JobDetail};

    fn detail(id: &str) -> JobDetail {
        JobDetail {
            id: id.to_string(),
            company_name: "SQRZ".into(),
            company_slug: "sqrz".into(),
            position_title: "Drummer".into(),
            position_slug: "drummer".into(),
            description: Some("Touring drummer".into()),
            hourly_rate: Some("$80 / hr".into()),
            skills: vec!["Jazz".into()],
            company_description: None,
            apply_url: Some("https://sqrz.com/apply".into()),
        }
    }

    #[tokio::test]
    async fn test_found_and_not_found_succeed() {
        let source = MockJobSource::new().with_detail(detail("1"));
        show(&source, "sqrz", "drummer").await.unwrap();
        show(&source, "sqrz", "bassist").await.unwrap();
    }

    #[tokio::test]
    async fn test_ambiguous_is_an_error() {
        let source = MockJobSource::new()
            .with_detail(detail("1"))
            .with_detail(detail("2"));
        let err = show(&source, "sqrz", "drummer").await.unwrap_err();
        assert!(format!("{err:#}").contains("2 jobs match"));
    }
}
