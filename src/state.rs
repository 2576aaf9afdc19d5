use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, error};

use crate::seen_titles::SeenTitleStore;
use crate::types::{ProgressSnapshot, StopReason};

struct StateInner {
    seen: HashSet<String>,
    store: SeenTitleStore,
    total_written: u64,
    consecutive_empty_batches: u64,
}

/// Shared state for one harvest run: the seen set, both stop counters, and
/// the durable registry handle, all guarded by a single lock so membership
/// decisions and counter updates stay atomic across workers.
///
/// Callers never see the raw fields; every method takes and releases the
/// lock internally and is safe to call from any worker or the monitor.
pub struct HarvestState {
    inner: Mutex<StateInner>,
    target: Option<u64>,
    empty_batch_threshold: u64,
}

impl HarvestState {
    /// `target = None` disables the count-based stop condition.
    pub fn new(
        seen: HashSet<String>,
        store: SeenTitleStore,
        target: Option<u64>,
        empty_batch_threshold: u64,
    ) -> Self {
        // Previously collected valid articles count toward the target.
        let total_written = seen.len() as u64;
        Self {
            inner: Mutex::new(StateInner {
                seen,
                store,
                total_written,
                consecutive_empty_batches: 0,
            }),
            target,
            empty_batch_threshold,
        }
    }

    fn lock(&self) -> MutexGuard<'_, StateInner> {
        self.inner.lock().expect("harvest state lock poisoned")
    }

    /// Claims the unseen titles of a batch in one critical section: inserts
    /// them into the seen set, updates the empty-batch counter, and records
    /// them in the durable registry. Returns the titles this caller now
    /// owns; titles any worker has claimed before are dropped.
    pub fn try_claim(&self, batch: Vec<String>) -> Vec<String> {
        let mut inner = self.lock();
        let mut new_titles = Vec::new();
        for title in batch {
            if !inner.seen.contains(&title) {
                inner.seen.insert(title.clone());
                new_titles.push(title);
            }
        }

        if new_titles.is_empty() {
            inner.consecutive_empty_batches += 1;
        } else {
            inner.consecutive_empty_batches = 0;
            match inner.store.append(&new_titles) {
                Ok(()) => debug!("Recorded {} new titles in the seen store", new_titles.len()),
                // The in-memory claim stands even when the durable write
                // fails; this run will not reprocess the titles.
                Err(e) => error!(
                    "Failed to record {} titles in the seen store: {}",
                    new_titles.len(),
                    e
                ),
            }
        }
        new_titles
    }

    /// Registers one accepted article; returns the new total.
    pub fn record_write(&self) -> u64 {
        let mut inner = self.lock();
        inner.total_written += 1;
        inner.total_written
    }

    /// Registers a batch that produced nothing usable; returns the new
    /// consecutive-empty count.
    pub fn record_empty_batch(&self) -> u64 {
        let mut inner = self.lock();
        inner.consecutive_empty_batches += 1;
        inner.consecutive_empty_batches
    }

    /// Evaluates both stop conditions under the lock.
    pub fn should_stop(&self) -> Option<StopReason> {
        let inner = self.lock();
        if let Some(target) = self.target {
            if inner.total_written >= target {
                return Some(StopReason::TargetReached);
            }
        }
        if inner.consecutive_empty_batches >= self.empty_batch_threshold {
            return Some(StopReason::NoNewArticles);
        }
        None
    }

    /// Target check alone, for the per-article recheck inside a batch.
    pub fn target_reached(&self) -> bool {
        match self.target {
            Some(target) => self.lock().total_written >= target,
            None => false,
        }
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        let inner = self.lock();
        ProgressSnapshot {
            total_written: inner.total_written,
            consecutive_empty_batches: inner.consecutive_empty_batches,
        }
    }

    pub fn target(&self) -> Option<u64> {
        self.target
    }

    pub fn empty_batch_threshold(&self) -> u64 {
        self.empty_batch_threshold
    }
}
