use crate::interactive::domain::models::{Mode, SearchOutcome};

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // Search flow
    QueryChanged(String),
    SearchSubmitted,
    SearchCompleted { id: u64, hashes: Vec<String> },
    SearchFailed { id: u64, message: String },

    // Results view
    SelectResult(usize),

    // Navigation
    SwitchTab(Mode),
    NavigateBack,
}

impl Message {
    /// Fold a search worker outcome into the message the update loop
    /// understands.
    pub fn from_search(outcome: SearchOutcome) -> Self {
        match outcome.result {
            Ok(hashes) => Message::SearchCompleted {
                id: outcome.id,
                hashes,
            },
            Err(e) => Message::SearchFailed {
                id: outcome.id,
                message: e.message,
            },
        }
    }
}
