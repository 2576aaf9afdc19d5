use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::cleaner::{clean_text, word_count};
use crate::config::HarvestConfig;
use crate::fetcher::RetryingSource;
use crate::sink::CorpusSink;
use crate::state::HarvestState;
use crate::types::{FetchOutcome, HarvesterError, StopReason};

/// One harvest worker: sample a batch, claim the unseen titles, fetch and
/// clean each one, write what passes the word gate, loop until a stop
/// condition is observed.
pub async fn run_worker(
    worker_id: usize,
    source: Arc<RetryingSource>,
    state: Arc<HarvestState>,
    sink: Arc<CorpusSink>,
    config: HarvestConfig,
) -> StopReason {
    let threshold = state.empty_batch_threshold();

    loop {
        if let Some(reason) = state.should_stop() {
            info!("[worker {}] Stopping ({})", worker_id, reason);
            return reason;
        }

        let batch = match source.sample_batch(config.batch_size).await {
            Ok(batch) => batch,
            Err(HarvesterError::RetriesExhausted { attempts }) => {
                warn!(
                    "[worker {}] Sampling failed after {} attempts, cooling down",
                    worker_id, attempts
                );
                tokio::time::sleep(config.cooldown()).await;
                continue;
            }
            Err(e) => {
                // A permanent sampling failure produced nothing new; it
                // counts as an empty batch.
                let empty = state.record_empty_batch();
                error!(
                    "[worker {}] Sampling failed: {} | consecutive empty: {}/{}",
                    worker_id, e, empty, threshold
                );
                continue;
            }
        };

        let new_titles = state.try_claim(batch);
        if new_titles.is_empty() {
            let snapshot = state.snapshot();
            debug!(
                "[worker {}] No new titles in batch | consecutive empty: {}/{}",
                worker_id, snapshot.consecutive_empty_batches, threshold
            );
            continue;
        }

        let mut accepted_in_batch = 0usize;
        for title in &new_titles {
            if state.target_reached() {
                break;
            }
            match source.fetch_extract(title).await {
                Ok(FetchOutcome::Content(raw)) => {
                    let text = clean_text(&raw);
                    let words = word_count(&text);
                    if words <= config.min_word_count {
                        debug!(
                            "[worker {}] Skipped short: {} ({} words)",
                            worker_id, title, words
                        );
                        continue;
                    }
                    if let Err(e) = sink.append_article(&text) {
                        error!(
                            "[worker {}] Corpus write failed for {}: {}",
                            worker_id, title, e
                        );
                        continue;
                    }
                    let total = state.record_write();
                    accepted_in_batch += 1;
                    info!(
                        "[worker {}] Written: {} ({} words) [total: {}]",
                        worker_id, title, words, total
                    );
                }
                Ok(outcome) => {
                    debug!(
                        "[worker {}] Skipped special page: {} ({:?})",
                        worker_id, title, outcome
                    );
                }
                Err(HarvesterError::Api { code, info }) => {
                    warn!(
                        "[worker {}] Source error for {}: [{}] {}",
                        worker_id, title, code, info
                    );
                }
                Err(e) => {
                    warn!(
                        "[worker {}] Unexpected fetch error for {}: {}",
                        worker_id, title, e
                    );
                }
            }
        }

        // The batch had new titles, but none survived fetching and the word
        // gate; that still counts toward the no-new-articles stop.
        if accepted_in_batch == 0 {
            let empty = state.record_empty_batch();
            warn!(
                "[worker {}] Batch had no usable articles | consecutive empty: {}/{}",
                worker_id, empty, threshold
            );
        }
    }
}
