use async_trait::async_trait;

use crate::types::{FetchOutcome, Result};

/// Boundary to the remote content source.
///
/// The two operations map directly onto the source's random-sample and
/// fetch-by-title calls; implementations perform no retries of their own.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Requests `count` random candidate titles.
    async fn random_titles(&self, count: usize) -> Result<Vec<String>>;

    /// Fetches the plain-text extract for one exact title, with no redirect
    /// following and no title correction.
    async fn fetch_extract(&self, title: &str) -> Result<FetchOutcome>;
}
