//! The canonical, shareable search description.
//!
//! A `Query` round-trips through the navigable address as
//! `q=<term>&page=<n>&perPage=<m>`, so sharing a link reproduces the same
//! first-page result set.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::page::PageCursor;

/// Page size used when neither the address nor config names one.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Largest page size the feed will ask the backend for.
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    term: Option<String>,
    page: u32,
    per_page: u32,
}

impl Default for Query {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl Query {
    /// An unfiltered first-page query. `per_page` is clamped to 1..=100.
    pub fn new(per_page: u32) -> Self {
        Self {
            term: None,
            page: 1,
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Replace the term and go back to the first page.
    pub fn with_term(mut self, term: &str) -> Self {
        self.term = Self::normalize_term(term);
        self.page = 1;
        self
    }

    /// Trim a raw term; blank means no filter.
    pub fn normalize_term(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn cursor(&self) -> PageCursor {
        PageCursor::new(self.page).unwrap_or(PageCursor::FIRST)
    }

    /// Same term and page size, positioned at `cursor`.
    pub fn at(&self, cursor: PageCursor) -> Self {
        Self {
            term: self.term.clone(),
            page: cursor.page(),
            per_page: self.per_page,
        }
    }

    /// Restore a query from an address.
    ///
    /// Accepts a full URL, a `?`-prefixed query string, or a bare one.
    /// Unknown parameters are ignored; unparsable numbers fall back to
    /// page 1 and `default_per_page`.
    pub fn from_address(address: &str, default_per_page: u32) -> Self {
        let query_string = match address.split_once('?') {
            Some((_, qs)) => qs,
            None if address.contains("://") => "",
            None => address,
        };
        let query_string = query_string.split('#').next().unwrap_or_default();

        let mut query = Query::new(default_per_page);
        for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
            match key.as_ref() {
                "q" => query.term = Self::normalize_term(&value),
                "page" => {
                    query.page = value.trim().parse::<u32>().ok().filter(|p| *p > 0).unwrap_or(1)
                }
                "perPage" => {
                    query.per_page = value
                        .trim()
                        .parse::<u32>()
                        .map(|n| n.clamp(1, MAX_PER_PAGE))
                        .unwrap_or(query.per_page)
                }
                _ => {}
            }
        }
        query
    }

    /// Encode as the query string of a shareable address (no leading `?`).
    pub fn to_address(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(term) = &self.term {
            serializer.append_pair("q", term);
        }
        serializer
            .append_pair("page", &self.page.to_string())
            .append_pair("perPage", &self.per_page.to_string());
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_term_is_no_filter() {
        let query = Query::default().with_term("   \t");
        assert_eq!(query.term(), None);
        assert_eq!(Query::normalize_term("  bass "), Some("bass".to_string()));
    }

    #[test]
    fn test_with_term_resets_page_keeps_size() {
        let query = Query::new(20).at(PageCursor::new(4).unwrap()).with_term("bass");
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), 20);
    }

    #[test]
    fn test_per_page_is_clamped() {
        assert_eq!(Query::new(0).per_page(), 1);
        assert_eq!(Query::new(500).per_page(), MAX_PER_PAGE);
    }

    #[test]
    fn test_to_address() {
        let query = Query::new(12).with_term("sound engineer");
        assert_eq!(query.to_address(), "q=sound+engineer&page=1&perPage=12");
        assert_eq!(Query::new(10).to_address(), "page=1&perPage=10");
    }

    #[test]
    fn test_from_address_variants() {
        let expected = Query::new(24).with_term("sound engineer");

        for address in [
            "q=sound+engineer&perPage=24",
            "?q=sound%20engineer&page=1&perPage=24",
            "https://jobs.sqrz.com/?q=sound+engineer&perPage=24#top",
        ] {
            assert_eq!(Query::from_address(address, 12), expected, "{address}");
        }
    }

    #[test]
    fn test_from_address_defaults() {
        let query = Query::from_address("https://jobs.sqrz.com/", 12);
        assert_eq!(query, Query::new(12));

        let query = Query::from_address("page=abc&perPage=-3&q=", 12);
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), 12);
        assert_eq!(query.term(), None);

        let query = Query::from_address("page=0&perPage=1000", 12);
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), MAX_PER_PAGE);
    }

    #[test]
    fn test_address_round_trip_keeps_page() {
        let query = Query::new(12)
            .with_term("lighting tech")
            .at(PageCursor::new(3).unwrap());
        assert_eq!(Query::from_address(&query.to_address(), 50), query);
    }
}
