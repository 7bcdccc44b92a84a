//! Card and detail rendering.

use chrono::{DateTime, Utc};
use colored::Colorize;
use job_feed::{Job, JobDetail, JobFeed};
use lazy_static::lazy_static;
use regex::Regex;

/// Longest snippet shown on a card, in characters.
const SNIPPET_MAX: usize = 200;

/// A snippet is only cut at a word boundary past this many characters.
const MIN_WORD_CUT: usize = 80;

lazy_static! {
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
    static ref CODE: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref HEADING: Regex = Regex::new(r"(?m)^#{1,6}\s+").unwrap();
    static ref BULLET: Regex = Regex::new(r"(?m)^[-*+]\s+").unwrap();
    static ref EMPHASIS: Regex = Regex::new(r"[*_~]+").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Reduce markdown to a single line of plain text.
pub fn strip_markdown(text: &str) -> String {
    let text = LINK.replace_all(text, "$1");
    let text = CODE.replace_all(&text, "$1");
    let text = HEADING.replace_all(&text, "");
    let text = BULLET.replace_all(&text, "");
    let text = EMPHASIS.replace_all(&text, "");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Plain-text preview of at most `max` characters plus an ellipsis.
pub fn snippet(raw: &str, max: usize) -> String {
    let clean = strip_markdown(raw);
    if clean.chars().count() <= max {
        return clean;
    }

    let sliced: String = clean.chars().take(max).collect();
    let cut = match sliced.rfind(' ') {
        Some(i) if sliced[..i].chars().count() > MIN_WORD_CUT => &sliced[..i],
        _ => sliced.as_str(),
    };
    format!("{}…", cut.trim())
}

pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%a, %d %b %Y").to_string()
}

pub fn print_card(job: &Job) {
    println!("{}", job.name.bold());
    if let Some(body) = job.body() {
        let text = snippet(body, SNIPPET_MAX);
        if !text.is_empty() {
            println!("  {text}");
        }
    }

    let date = job.published_at().map(format_date).unwrap_or_default();
    let path = job.detail_path().unwrap_or_default();
    println!(
        "  {}  {}  {}",
        date.dimmed(),
        format!("#{}", job.id).dimmed(),
        path.cyan()
    );
    println!();
}

pub fn print_summary(feed: &JobFeed) {
    if feed.is_empty() {
        println!("{}", "No jobs found.".yellow());
        return;
    }

    let more = if feed.has_more() {
        "more available".green()
    } else {
        "end of results".dimmed()
    };
    println!("{} jobs loaded, {}", feed.len().to_string().bold(), more);
}

pub fn print_detail(job: &JobDetail) {
    println!("{}", job.position_title.bold());
    println!("{}", job.company_name);
    if let Some(rate) = &job.hourly_rate {
        println!("{}", rate.green());
    }
    if let Some(url) = &job.apply_url {
        println!("{} {}", "Apply:".bold(), url.cyan());
    }

    if !job.skills.is_empty() {
        println!();
        println!("{}", "Skills".bold());
        println!("  {}", job.skills.join(", "));
    }
    if let Some(description) = &job.description {
        println!();
        println!("{}", "About the role".bold());
        println!("  {}", strip_markdown(description));
    }
    if let Some(about) = &job.company_description {
        println!();
        println!("{}", format!("About {}", job.company_name).bold());
        println!("  {about}");
    }
}
