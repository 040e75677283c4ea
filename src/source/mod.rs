//! External data source for the initial item collection
//!
//! Provides a unified interface over wherever the lists come from, so
//! the core and the tests can share the same load path.

mod http;

pub use http::HttpListSource;

use crate::error::Result;
use crate::types::Item;
use async_trait::async_trait;

/// Data source trait for fetching the full item collection
///
/// This trait abstracts the read endpoint, allowing the same load
/// logic to work against the real HTTP service or a test double. No
/// write endpoint exists: commit is local-only.
#[async_trait]
pub trait ListSource: Send + Sync {
    /// Fetch every item from the source
    ///
    /// Resolves exactly once with either the populated collection or a
    /// [`crate::error::Error::Fetch`].
    async fn fetch_lists(&self) -> Result<Vec<Item>>;

    /// The endpoint this source reads from (for display)
    fn endpoint(&self) -> &str;
}
