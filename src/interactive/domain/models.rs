use crate::backend::error::{FetchError, SearchError};
use crate::backend::protocol::FileRecord;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Search,
    Results,
    Add,
}

impl Mode {
    /// Tab-bar order, used for cycling with Tab / Shift+Tab.
    pub const ALL: [Mode; 3] = [Mode::Search, Mode::Results, Mode::Add];

    pub fn next(self) -> Mode {
        let index = Mode::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Mode::ALL[(index + 1) % Mode::ALL.len()]
    }

    pub fn previous(self) -> Mode {
        let index = Mode::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Mode::ALL[(index + Mode::ALL.len() - 1) % Mode::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Mode::Search => "Search",
            Mode::Results => "Results",
            Mode::Add => "Add",
        }
    }
}

// Search worker wire types. The id tags one submission; responses whose
// id no longer matches the newest submission are discarded unseen.
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub id: u64,
    pub result: Result<Vec<String>, SearchError>,
}

// Fetch worker wire types. The epoch tags one results-view lifetime;
// responses from a torn-down view carry a stale epoch and are dropped
// before they can touch any state.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub epoch: u64,
    pub file_hash: String,
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub epoch: u64,
    pub file_hash: String,
    pub result: Result<FileRecord, FetchError>,
}

/// Lifecycle of one result tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HydrationStatus {
    Pending,
    Loaded(FileRecord),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_cycling_covers_all_tabs() {
        assert_eq!(Mode::Search.next(), Mode::Results);
        assert_eq!(Mode::Results.next(), Mode::Add);
        assert_eq!(Mode::Add.next(), Mode::Search);

        assert_eq!(Mode::Search.previous(), Mode::Add);
        assert_eq!(Mode::Add.previous(), Mode::Results);
        assert_eq!(Mode::Results.previous(), Mode::Search);
    }
}
