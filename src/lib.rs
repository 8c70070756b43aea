pub mod backend;
pub mod interactive;
pub mod telemetry;

pub use backend::{FetchError, FileRecord, MockBackend, ProcessBackend, SearchError, TagBackend};
pub use interactive::InteractiveApp;
