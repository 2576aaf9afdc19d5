use std::sync::Arc;

use tracing::{error, info};

use crate::config::HarvestConfig;
use crate::fetcher::RetryingSource;
use crate::monitor::run_monitor;
use crate::seen_titles::SeenTitleStore;
use crate::sink::CorpusSink;
use crate::state::HarvestState;
use crate::traits::ArticleSource;
use crate::types::{Result, SessionSummary, StopReason};
use crate::worker::run_worker;

/// Runs one harvest session to completion: hydrates the seen set, starts
/// the worker pool and the monitor, joins them all, and reports the result.
pub async fn run_harvest(
    config: &HarvestConfig,
    source: Arc<dyn ArticleSource>,
) -> Result<SessionSummary> {
    let (store, seen, report) = SeenTitleStore::open(&config.seen_titles_path)?;
    if report.preloaded > 0 {
        info!("Preloaded {} titles from disk", report.preloaded);
        info!(
            "Filtered {} invalid titles, {} valid articles remain",
            report.filtered, report.valid
        );
    } else {
        info!("No seen-titles file found, starting fresh");
    }

    let state = Arc::new(HarvestState::new(
        seen,
        store,
        config.target_articles,
        config.empty_batch_threshold,
    ));
    let existing = state.snapshot().total_written;

    let sink = Arc::new(CorpusSink::open(&config.corpus_path)?);
    sink.write_session_header(config.target_articles, existing)?;

    let retrying = Arc::new(RetryingSource::new(
        source,
        config.max_retries,
        config.retry_delay(),
    ));

    info!(
        "Starting collection with {} workers ({} existing valid articles)",
        config.workers, existing
    );

    let monitor_handle = tokio::spawn(run_monitor(
        state.clone(),
        sink.clone(),
        config.monitor_interval(),
    ));

    let mut worker_handles = Vec::with_capacity(config.workers);
    for worker_id in 0..config.workers {
        let handle = tokio::spawn(run_worker(
            worker_id,
            retrying.clone(),
            state.clone(),
            sink.clone(),
            config.clone(),
        ));
        info!("Started worker {}", worker_id);
        worker_handles.push(handle);
    }

    let mut stop_reason = None;
    for handle in worker_handles {
        match handle.await {
            Ok(reason) => stop_reason = Some(reason),
            Err(e) => error!("Worker task failed: {}", e),
        }
    }
    if let Err(e) = monitor_handle.await {
        error!("Monitor task failed: {}", e);
    }

    let stop_reason = stop_reason
        .or_else(|| state.should_stop())
        .unwrap_or(StopReason::NoNewArticles);

    Ok(SessionSummary {
        total_written: state.snapshot().total_written,
        corpus_bytes: sink.size_bytes().unwrap_or(0),
        stop_reason,
    })
}
