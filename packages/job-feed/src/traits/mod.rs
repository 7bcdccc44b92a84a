//! Trait seams between the feed and its collaborators.

pub mod source;

pub use source::{single_match, JobSource};
