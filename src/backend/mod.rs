//! Gateway to the external tag archive engine.
//!
//! The engine is an opaque collaborator reached through exactly two
//! commands: `do_search` (query → content hashes) and `get_result`
//! (content hash → displayable record). This module owns the typed
//! contract, the wire protocol and the process transport; it performs no
//! tag matching of its own.

pub mod error;
pub mod mock;
pub mod process;
pub mod protocol;

pub use error::{FetchError, SearchError};
pub use mock::MockBackend;
pub use process::ProcessBackend;
pub use protocol::FileRecord;

/// Two-command contract exposed by the tag archive engine.
///
/// `get_result` must be safe to call concurrently for distinct hashes;
/// implementations make no ordering promises across calls.
pub trait TagBackend: Send + Sync {
    /// Run a tag query and return the matching content hashes, in the
    /// engine's display order.
    fn do_search(&self, query: &str) -> Result<Vec<String>, SearchError>;

    /// Resolve one content hash into its displayable record.
    fn get_result(&self, file_hash: &str) -> Result<FileRecord, FetchError>;
}
