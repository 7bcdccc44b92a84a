//! Backend implementations of [`JobSource`](crate::traits::JobSource).
//!
//! Users can use these directly or implement their own; the feed only sees
//! canonical [`Page`](crate::types::Page)s.

#[cfg(feature = "xano")]
mod xano;

#[cfg(feature = "xano")]
pub use xano::{xano_source, XanoClient};
