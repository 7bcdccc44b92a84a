//! Job listing records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend identity of a job. The only field used for deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for JobId {
    fn from(id: i64) -> Self {
        JobId(id)
    }
}

/// A place a job takes place at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub full_address: String,
}

/// A single listing.
///
/// Everything except `id` is payload carried through to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub description_md: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub venues: Vec<Venue>,
    pub promoter: Option<String>,
    pub hourly_rate: Option<String>,
    pub public: Option<bool>,
    pub company_slug: Option<String>,
    pub position_slug: Option<String>,
}

impl Job {
    /// Create a job with only identity and display name set.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: JobId(id),
            name: name.into(),
            slug: None,
            description: None,
            description_md: None,
            created_at: None,
            start: None,
            end: None,
            venues: Vec::new(),
            promoter: None,
            hourly_rate: None,
            public: None,
            company_slug: None,
            position_slug: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_venue(mut self, venue: Venue) -> Self {
        self.venues.push(venue);
        self
    }

    pub fn with_slugs(
        mut self,
        company_slug: impl Into<String>,
        position_slug: impl Into<String>,
    ) -> Self {
        self.company_slug = Some(company_slug.into());
        self.position_slug = Some(position_slug.into());
        self
    }

    /// Markdown body if present, otherwise the plain description.
    pub fn body(&self) -> Option<&str> {
        [self.description_md.as_deref(), self.description.as_deref()]
            .into_iter()
            .flatten()
            .find(|b| !b.trim().is_empty())
    }

    /// The date shown on a listing card: the gig start, falling back to creation.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.start.or(self.created_at)
    }

    /// Path of the detail page, when both slugs are known.
    pub fn detail_path(&self) -> Option<String> {
        match (&self.company_slug, &self.position_slug) {
            (Some(company), Some(position)) => Some(format!("/{company}/{position}")),
            _ => None,
        }
    }
}

/// The record returned by a detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetail {
    pub id: String,
    pub company_name: String,
    pub company_slug: String,
    pub position_title: String,
    pub position_slug: String,
    pub description: Option<String>,
    pub hourly_rate: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub company_description: Option<String>,
    pub apply_url: Option<String>,
}

impl JobDetail {
    pub fn matches(&self, company_slug: &str, position_slug: &str) -> bool {
        self.company_slug == company_slug && self.position_slug == position_slug
    }
}
