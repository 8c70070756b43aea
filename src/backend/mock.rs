//! Programmable in-memory engine used by tests.

use std::collections::HashMap;
use std::sync::{Condvar, Mutex};

use crate::backend::TagBackend;
use crate::backend::error::{FetchError, SearchError};
use crate::backend::protocol::FileRecord;

/// Test double for [`TagBackend`]. Stub responses per query/hash and
/// inspect the calls that were made.
#[derive(Default)]
pub struct MockBackend {
    searches: Mutex<HashMap<String, Result<Vec<String>, String>>>,
    records: Mutex<HashMap<String, Result<FileRecord, String>>>,
    search_calls: Mutex<Vec<String>>,
    fetch_calls: Mutex<Vec<String>>,
    fetch_hold: Mutex<bool>,
    fetch_gate: Condvar,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stub_search(&self, query: &str, hashes: &[&str]) {
        self.searches.lock().unwrap().insert(
            query.to_string(),
            Ok(hashes.iter().map(|h| h.to_string()).collect()),
        );
    }

    pub fn fail_search(&self, query: &str, message: &str) {
        self.searches
            .lock()
            .unwrap()
            .insert(query.to_string(), Err(message.to_string()));
    }

    pub fn stub_record(&self, file_hash: &str, file_name: &str, image_path: &str) {
        self.records.lock().unwrap().insert(
            file_hash.to_string(),
            Ok(FileRecord {
                image_path: image_path.to_string(),
                file_name: file_name.to_string(),
            }),
        );
    }

    pub fn fail_record(&self, file_hash: &str, message: &str) {
        self.records
            .lock()
            .unwrap()
            .insert(file_hash.to_string(), Err(message.to_string()));
    }

    /// Queries passed to `do_search`, in call order.
    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    /// Hashes passed to `get_result`, in call order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }

    /// Park every `get_result` call until released, so tests can line up
    /// in-flight fetches against navigation.
    pub fn hold_fetches(&self) {
        *self.fetch_hold.lock().unwrap() = true;
    }

    pub fn release_fetches(&self) {
        *self.fetch_hold.lock().unwrap() = false;
        self.fetch_gate.notify_all();
    }
}

impl TagBackend for MockBackend {
    fn do_search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        self.search_calls.lock().unwrap().push(query.to_string());
        match self.searches.lock().unwrap().get(query) {
            Some(Ok(hashes)) => Ok(hashes.clone()),
            Some(Err(message)) => Err(SearchError::new(message.clone())),
            None => Ok(Vec::new()),
        }
    }

    fn get_result(&self, file_hash: &str) -> Result<FileRecord, FetchError> {
        let mut held = self.fetch_hold.lock().unwrap();
        while *held {
            held = self.fetch_gate.wait(held).unwrap();
        }
        drop(held);

        self.fetch_calls.lock().unwrap().push(file_hash.to_string());
        match self.records.lock().unwrap().get(file_hash) {
            Some(Ok(record)) => Ok(record.clone()),
            Some(Err(message)) => Err(FetchError::new(file_hash, message.clone())),
            None => Err(FetchError::new(file_hash, "unknown hash")),
        }
    }
}
