//! Per-hash hydration cache for the results view.
//!
//! Each results-view lifetime is one hydration round, identified by an
//! epoch. Entering the view starts a round and issues exactly one fetch
//! per distinct hash; leaving it invalidates the round, so responses
//! that straggle in afterwards are dropped instead of mutating state
//! that no longer has a view attached to it.

use std::collections::HashMap;

use crate::interactive::domain::models::{FetchOutcome, FetchRequest, HydrationStatus};

#[derive(Default)]
pub struct Hydrator {
    records: HashMap<String, HydrationStatus>,
    epoch: u64,
}

impl Hydrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a fresh round for `hashes`. Returns the fetch requests to
    /// issue: one per distinct hash, duplicates collapse into a single
    /// Pending entry.
    pub fn begin(&mut self, hashes: &[String]) -> Vec<FetchRequest> {
        self.epoch += 1;
        self.records.clear();

        let mut requests = Vec::new();
        for hash in hashes {
            if self.records.contains_key(hash) {
                continue;
            }
            self.records
                .insert(hash.clone(), HydrationStatus::Pending);
            requests.push(FetchRequest {
                epoch: self.epoch,
                file_hash: hash.clone(),
            });
        }
        requests
    }

    /// Apply one fetch outcome. Returns false (and touches nothing) when
    /// the outcome belongs to an earlier round.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.epoch != self.epoch {
            tracing::trace!("dropping stale fetch for {}", outcome.file_hash);
            return false;
        }

        let status = match outcome.result {
            Ok(record) => HydrationStatus::Loaded(record),
            Err(e) => HydrationStatus::Failed(e.message),
        };
        self.records.insert(outcome.file_hash, status);
        true
    }

    /// Tear down the current round. Pending fetches keep running on the
    /// workers but their outcomes no longer match the epoch.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
        self.records.clear();
    }

    pub fn status(&self, hash: &str) -> Option<&HydrationStatus> {
        self.records.get(hash)
    }
}
