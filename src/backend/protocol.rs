//! Serde types for the engine's JSON-lines wire protocol.
//!
//! One request per line on the engine's stdin, one response per line on
//! its stdout. Responses are externally tagged: `{"ok": …}` carries the
//! payload, `{"err": "…"}` carries a human-readable failure message.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EngineRequest {
    DoSearch { query: String },
    GetResult { file_hash: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineResponse<T> {
    Ok(T),
    Err(String),
}

/// Displayable record for one archived file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub image_path: String,
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_wire_shape() {
        let request = EngineRequest::DoSearch {
            query: "landscape -wip".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"command":"do_search","query":"landscape -wip"}"#
        );
    }

    #[test]
    fn test_fetch_request_wire_shape() {
        let request = EngineRequest::GetResult {
            file_hash: "a1b2".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"command":"get_result","file_hash":"a1b2"}"#
        );
    }

    #[test]
    fn test_ok_response_parses() {
        let response: EngineResponse<Vec<String>> =
            serde_json::from_str(r#"{"ok":["h1","h2"]}"#).unwrap();
        assert_eq!(
            response,
            EngineResponse::Ok(vec!["h1".to_string(), "h2".to_string()])
        );
    }

    #[test]
    fn test_err_response_parses() {
        let response: EngineResponse<FileRecord> =
            serde_json::from_str(r#"{"err":"no such hash"}"#).unwrap();
        assert_eq!(response, EngineResponse::Err("no such hash".to_string()));
    }

    #[test]
    fn test_file_record_parses_engine_field_names() {
        let record: FileRecord =
            serde_json::from_str(r#"{"image_path":"/thumbs/a1.png","file_name":"a1.png"}"#)
                .unwrap();
        assert_eq!(record.file_name, "a1.png");
        assert_eq!(record.image_path, "/thumbs/a1.png");
    }
}
