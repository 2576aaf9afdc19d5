use std::collections::HashSet;
use std::sync::Arc;

use corpus_harvester::{HarvestState, SeenTitleStore, StopReason};

fn fresh_state(dir: &tempfile::TempDir, target: Option<u64>, threshold: u64) -> HarvestState {
    let path = dir.path().join("seen.txt");
    let (store, seen, _) = SeenTitleStore::open(&path).unwrap();
    HarvestState::new(seen, store, target, threshold)
}

#[test]
fn claim_partitions_new_and_already_seen() {
    let dir = tempfile::tempdir().unwrap();
    let state = fresh_state(&dir, None, 10);

    let first = state.try_claim(vec!["अहमदनगर".into(), "सातारा".into()]);
    assert_eq!(first.len(), 2);

    let second = state.try_claim(vec!["सातारा".into(), "सोलापूर".into()]);
    assert_eq!(second, vec!["सोलापूर".to_string()]);
}

#[test]
fn empty_claim_increments_counter_and_new_claim_resets_it() {
    let dir = tempfile::tempdir().unwrap();
    let state = fresh_state(&dir, None, 10);

    state.try_claim(vec!["नागपूर".into()]);
    assert_eq!(state.snapshot().consecutive_empty_batches, 0);

    state.try_claim(vec!["नागपूर".into()]);
    assert_eq!(state.snapshot().consecutive_empty_batches, 1);
    state.try_claim(vec!["नागपूर".into()]);
    assert_eq!(state.snapshot().consecutive_empty_batches, 2);

    state.try_claim(vec!["अमरावती".into()]);
    assert_eq!(state.snapshot().consecutive_empty_batches, 0);
}

#[test]
fn total_written_is_monotone() {
    let dir = tempfile::tempdir().unwrap();
    let state = fresh_state(&dir, None, 10);

    let mut last = state.snapshot().total_written;
    for _ in 0..5 {
        let total = state.record_write();
        assert!(total > last);
        last = total;
    }
}

#[test]
fn stops_when_target_is_reached() {
    let dir = tempfile::tempdir().unwrap();
    let state = fresh_state(&dir, Some(2), 10);

    assert!(state.should_stop().is_none());
    assert!(!state.target_reached());
    state.record_write();
    assert!(state.should_stop().is_none());
    state.record_write();
    assert_eq!(state.should_stop(), Some(StopReason::TargetReached));
    assert!(state.target_reached());
}

#[test]
fn stops_when_empty_batch_threshold_is_hit() {
    let dir = tempfile::tempdir().unwrap();
    let state = fresh_state(&dir, None, 3);

    for _ in 0..2 {
        state.record_empty_batch();
        assert!(state.should_stop().is_none());
    }
    state.record_empty_batch();
    assert_eq!(state.should_stop(), Some(StopReason::NoNewArticles));
}

#[test]
fn unbounded_target_never_stops_on_count() {
    let dir = tempfile::tempdir().unwrap();
    let state = fresh_state(&dir, None, 100);

    for _ in 0..1000 {
        state.record_write();
    }
    assert!(state.should_stop().is_none());
    assert!(!state.target_reached());
}

#[test]
fn preloaded_valid_titles_count_toward_the_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seen.txt");
    std::fs::write(&path, "रत्नागिरी\nसिंधुदुर्ग\n").unwrap();

    let (store, seen, _) = SeenTitleStore::open(&path).unwrap();
    let state = HarvestState::new(seen, store, Some(2), 10);
    assert_eq!(state.should_stop(), Some(StopReason::TargetReached));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_claims_never_hand_out_the_same_title_twice() {
    let dir = tempfile::tempdir().unwrap();
    let state = Arc::new(fresh_state(&dir, None, 100_000));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            let mut mine = Vec::new();
            for i in 0..50usize {
                let batch: Vec<String> = (0..20usize)
                    .map(|j| format!("शीर्षक-{}", (i * 20 + j) % 400))
                    .collect();
                mine.extend(state.try_claim(batch));
            }
            mine
        }));
    }

    let mut all = Vec::new();
    for handle in handles {
        all.extend(handle.await.unwrap());
    }

    let unique: HashSet<&String> = all.iter().collect();
    assert_eq!(unique.len(), all.len(), "a title was claimed twice");
    assert_eq!(unique.len(), 400);
}
