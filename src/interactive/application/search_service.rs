use std::sync::Arc;

use crate::backend::TagBackend;
use crate::interactive::domain::models::{
    FetchOutcome, FetchRequest, SearchOutcome, SearchRequest,
};

/// Runs engine calls on behalf of the worker threads. Requests come in
/// tagged (search id / hydration epoch) and the tag is echoed on the
/// outcome, so the event loop can tell fresh responses from stale ones.
pub struct SearchService {
    backend: Arc<dyn TagBackend>,
}

impl SearchService {
    pub fn new(backend: Arc<dyn TagBackend>) -> Self {
        Self { backend }
    }

    pub fn search(&self, request: SearchRequest) -> SearchOutcome {
        let result = self.backend.do_search(&request.query);
        if let Err(e) = &result {
            tracing::debug!("search #{} failed: {e}", request.id);
        }
        SearchOutcome {
            id: request.id,
            result,
        }
    }

    pub fn fetch(&self, request: FetchRequest) -> FetchOutcome {
        let result = self.backend.get_result(&request.file_hash);
        if let Err(e) = &result {
            tracing::debug!("fetch failed: {e}");
        }
        FetchOutcome {
            epoch: request.epoch,
            file_hash: request.file_hash,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;

    #[test]
    fn test_search_echoes_request_id() {
        let backend = Arc::new(MockBackend::new());
        backend.stub_search("cat", &["h1"]);
        let service = SearchService::new(backend);

        let outcome = service.search(SearchRequest {
            id: 7,
            query: "cat".to_string(),
        });
        assert_eq!(outcome.id, 7);
        assert_eq!(outcome.result.unwrap(), vec!["h1"]);
    }

    #[test]
    fn test_fetch_echoes_epoch_and_hash() {
        let backend = Arc::new(MockBackend::new());
        backend.fail_record("h9", "thumbnail unreadable");
        let service = SearchService::new(backend);

        let outcome = service.fetch(FetchRequest {
            epoch: 3,
            file_hash: "h9".to_string(),
        });
        assert_eq!(outcome.epoch, 3);
        assert_eq!(outcome.file_hash, "h9");
        assert!(outcome.result.is_err());
    }
}
