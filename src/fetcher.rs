use std::sync::Arc;
use std::time::Duration;

use tracing::{error, warn};

use crate::traits::ArticleSource;
use crate::types::{FetchOutcome, HarvesterError, Result};

/// Wraps a source with bounded retry-with-backoff for batch sampling.
///
/// Only the sampling path retries. Fetch failures are per-item and left to
/// the worker to skip, so one bad title cannot stall a whole batch.
pub struct RetryingSource {
    source: Arc<dyn ArticleSource>,
    max_retries: u32,
    retry_delay: Duration,
}

impl RetryingSource {
    pub fn new(source: Arc<dyn ArticleSource>, max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            source,
            max_retries,
            retry_delay,
        }
    }

    /// Requests a batch of random titles, retrying transient failures with
    /// a linearly increasing delay (attempt k waits k * retry_delay).
    /// Permanent failures abort immediately; exhausting every attempt
    /// yields `RetriesExhausted`, after which the caller is expected to
    /// cool down before sampling again.
    pub async fn sample_batch(&self, count: usize) -> Result<Vec<String>> {
        for attempt in 1..=self.max_retries {
            match self.source.random_titles(count).await {
                Ok(titles) => return Ok(titles),
                Err(e) if e.is_transient() => {
                    warn!(
                        "Sampling error (attempt {}/{}): {}",
                        attempt, self.max_retries, e
                    );
                    if attempt < self.max_retries {
                        tokio::time::sleep(self.retry_delay * attempt).await;
                    }
                }
                Err(e) => {
                    error!("Non-retryable sampling error: {}", e);
                    return Err(e);
                }
            }
        }
        Err(HarvesterError::RetriesExhausted {
            attempts: self.max_retries,
        })
    }

    /// Fetches one title's extract. Never retried.
    pub async fn fetch_extract(&self, title: &str) -> Result<FetchOutcome> {
        self.source.fetch_extract(title).await
    }
}
