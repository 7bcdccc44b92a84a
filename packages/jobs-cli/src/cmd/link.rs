//! Shareable address for a search.

use job_feed::{Query, DEFAULT_PER_PAGE};

pub fn run(term: Option<&str>, per_page: Option<u32>) {
    println!("?{}", address(term, per_page));
}

fn address(term: Option<&str>, per_page: Option<u32>) -> String {
    let query = Query::new(per_page.unwrap_or(DEFAULT_PER_PAGE)).with_term(term.unwrap_or_default());
    query.to_address()
}
