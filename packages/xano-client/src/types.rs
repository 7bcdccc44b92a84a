use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Query parameters for `GET /jobs/public`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListJobsParams {
    pub page: u32,
    pub per_page: u32,
    /// Free-text filter. Blank terms are never sent.
    pub q: Option<String>,
}

impl ListJobsParams {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            q: None,
        }
    }

    /// Set the search term. Whitespace-only terms clear the filter.
    pub fn with_query(mut self, q: impl AsRef<str>) -> Self {
        let trimmed = q.as_ref().trim();
        self.q = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Query pairs in the order the backend expects them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ];
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        pairs
    }
}

/// A venue attached to a job listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VenueRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_address: String,
}

/// A job row from `/jobs/public`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "epoch_millis")]
    pub created_at: Option<DateTime<Utc>>,
    pub promoter: Option<String>,
    pub hourly_rate: Option<String>,
    pub public: Option<bool>,
    #[serde(default, deserialize_with = "epoch_millis")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "epoch_millis")]
    pub end: Option<DateTime<Utc>>,
    pub venues: Option<Vec<VenueRecord>>,
    pub description: Option<String>,
    pub description_md: Option<String>,
    pub company_slug: Option<String>,
    pub position_slug: Option<String>,
}

/// A job row from the slug-filtered `/jobs` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobDetailRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_slug: String,
    #[serde(default)]
    pub position_title: String,
    #[serde(default)]
    pub position_slug: String,
    pub description: Option<String>,
    pub hourly_rate: Option<String>,
    pub skills: Option<Vec<String>>,
    pub company_description: Option<String>,
    pub apply_url: Option<String>,
}

/// Xano's paginated list envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items_received: Option<u64>,
    pub cur_page: Option<u32>,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
    pub per_page: Option<u32>,
    pub total_items: Option<u64>,
    pub items: Vec<T>,
}

impl<T> Paginated<T> {
    /// Wrap a bare list. There is no cursor information in that shape.
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items_received: Some(items.len() as u64),
            cur_page: None,
            next_page: None,
            prev_page: None,
            per_page: None,
            total_items: None,
            items,
        }
    }

    /// Number of rows this response says it carries.
    pub fn received(&self) -> u64 {
        self.items_received.unwrap_or(self.items.len() as u64)
    }
}

/// The two list shapes the backend answers with.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    List(Vec<T>),
    Paginated(Paginated<T>),
}

impl<T> ListResponse<T> {
    pub fn into_paginated(self) -> Paginated<T> {
        match self {
            ListResponse::List(items) => Paginated::from_items(items),
            ListResponse::Paginated(page) => page,
        }
    }
}

/// Normalized page of public jobs.
pub type JobsPage = Paginated<JobRecord>;

// Xano stores unset timestamps as null or 0.
fn epoch_millis<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw
        .filter(|ms| *ms > 0)
        .and_then(DateTime::<Utc>::from_timestamp_millis))
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_skip_blank_query() {
        let params = ListJobsParams::new(1, 12).with_query("   ");
        assert_eq!(params.q, None);
        assert_eq!(
            params.to_pairs(),
            vec![("page", "1".to_string()), ("perPage", "12".to_string())]
        );
    }

    #[test]
    fn test_list_params_trim_query() {
        let params = ListJobsParams::new(2, 10).with_query("  drummer ");
        assert_eq!(params.q.as_deref(), Some("drummer"));
        assert_eq!(params.to_pairs().last(), Some(&("q", "drummer".to_string())));
    }

    #[test]
    fn test_envelope_shape() {
        let body = r#"{
            "itemsReceived": 2,
            "curPage": 1,
            "nextPage": 2,
            "prevPage": null,
            "perPage": 2,
            "items": [
                {"id": 7, "name": "Session drummer", "created_at": 1700000000000,
                 "venues": [{"id": 1, "name": "Paradiso", "full_address": "Amsterdam"}]},
                {"id": 8, "name": "FOH engineer", "start": 0, "venues": null}
            ]
        }"#;

        let page = serde_json::from_str::<ListResponse<JobRecord>>(body)
            .unwrap()
            .into_paginated();

        assert_eq!(page.next_page, Some(2));
        assert_eq!(page.prev_page, None);
        assert_eq!(page.total_items, None);
        assert_eq!(page.received(), 2);
        assert_eq!(page.items[0].venues.as_ref().map(Vec::len), Some(1));
        assert!(page.items[0].created_at.is_some());
        assert_eq!(page.items[1].start, None);
        assert_eq!(page.items[1].venues, None);
    }

    #[test]
    fn test_bare_array_shape() {
        let body = r#"[{"id": 3, "name": "Tour manager"}]"#;
        let page = serde_json::from_str::<ListResponse<JobRecord>>(body)
            .unwrap()
            .into_paginated();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.next_page, None);
        assert_eq!(page.received(), 1);
    }

    #[test]
    fn test_detail_id_accepts_string_and_number() {
        let rows = r#"[
            {"id": "abc", "company_name": "SQRZ", "company_slug": "sqrz",
             "position_title": "Stagehand", "position_slug": "stagehand"},
            {"id": 42, "company_slug": "sqrz", "position_slug": "rigger", "skills": ["rigging"]}
        ]"#;
        let rows = serde_json::from_str::<Vec<JobDetailRecord>>(rows).unwrap();
        assert_eq!(rows[0].id, "abc");
        assert_eq!(rows[1].id, "42");
        assert_eq!(rows[1].skills.as_deref(), Some(&["rigging".to_string()][..]));
    }

    #[test]
    fn test_unexpected_shape_is_an_error() {
        let body = r#"{"message": "Unable to locate request."}"#;
        assert!(serde_json::from_str::<ListResponse<JobRecord>>(body).is_err());
    }
}
