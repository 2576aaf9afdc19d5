use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::sink::CorpusSink;
use crate::state::HarvestState;

const BYTES_PER_MB: f64 = (1024 * 1024) as f64;

/// Periodically reports throughput from counter snapshots and the corpus
/// file size. Read-only with respect to harvest state; exits on the same
/// stop conditions as the workers.
pub async fn run_monitor(state: Arc<HarvestState>, sink: Arc<CorpusSink>, interval: Duration) {
    let start = Instant::now();
    let mut last_mb = 0.0f64;
    let mut last_count = 0u64;
    let threshold = state.empty_batch_threshold();
    let target_text = match state.target() {
        Some(n) => n.to_string(),
        None => "unbounded".to_string(),
    };

    loop {
        if let Some(reason) = state.should_stop() {
            info!("Monitoring stopped ({})", reason);
            return;
        }
        let snapshot = state.snapshot();

        match sink.size_bytes() {
            Ok(bytes) => {
                let current_mb = bytes as f64 / BYTES_PER_MB;
                let elapsed_hours = start.elapsed().as_secs_f64() / 3600.0;
                let rate = if elapsed_hours > 0.0 {
                    snapshot.total_written as f64 / elapsed_hours
                } else {
                    0.0
                };
                info!(
                    "Corpus: {:.2} MB | Articles: {}/{} | Rate: {:.1}/hour | Growth: +{} articles, +{:.2} MB | Empty batches: {}/{}",
                    current_mb,
                    snapshot.total_written,
                    target_text,
                    rate,
                    snapshot.total_written - last_count,
                    current_mb - last_mb,
                    snapshot.consecutive_empty_batches,
                    threshold
                );
                last_mb = current_mb;
                last_count = snapshot.total_written;
            }
            Err(e) => error!("Monitor error: {}", e),
        }

        tokio::time::sleep(interval).await;
    }
}
