//! Transport that speaks the engine protocol over a spawned process.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;

use crate::backend::error::{FetchError, SearchError};
use crate::backend::protocol::{EngineRequest, EngineResponse, FileRecord};
use crate::backend::TagBackend;

/// Engine reached over its stdio. Requests are serialized through a
/// mutex so concurrent callers interleave whole request/response pairs,
/// never partial lines.
pub struct ProcessBackend {
    session: Mutex<EngineSession>,
}

struct EngineSession {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl ProcessBackend {
    /// Spawn the engine from a shell-less command line ("prog arg1 arg2").
    pub fn spawn(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts
            .next()
            .context("backend command is empty")?;

        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to spawn backend engine `{program}`"))?;

        let stdin = child.stdin.take().context("backend engine has no stdin")?;
        let stdout = child.stdout.take().context("backend engine has no stdout")?;

        tracing::debug!("spawned backend engine `{command_line}`");

        Ok(Self {
            session: Mutex::new(EngineSession {
                child,
                stdin,
                stdout: BufReader::new(stdout),
            }),
        })
    }

    /// One request/response round trip. Every transport failure comes
    /// back as an error message; a dead pipe is reported, never waited on.
    fn call<T: DeserializeOwned>(&self, request: &EngineRequest) -> Result<T> {
        let mut session = match self.session.lock() {
            Ok(session) => session,
            Err(poisoned) => poisoned.into_inner(),
        };

        let mut line = serde_json::to_string(request).context("failed to encode request")?;
        line.push('\n');
        session
            .stdin
            .write_all(line.as_bytes())
            .context("failed to write to backend engine")?;
        session
            .stdin
            .flush()
            .context("failed to write to backend engine")?;

        let mut response_line = String::new();
        let read = session
            .stdout
            .read_line(&mut response_line)
            .context("failed to read from backend engine")?;
        if read == 0 {
            bail!("backend engine closed its output");
        }

        match serde_json::from_str::<EngineResponse<T>>(response_line.trim_end()) {
            Ok(EngineResponse::Ok(value)) => Ok(value),
            Ok(EngineResponse::Err(message)) => bail!("{message}"),
            Err(e) => bail!("malformed response from backend engine: {e}"),
        }
    }
}

impl TagBackend for ProcessBackend {
    fn do_search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let request = EngineRequest::DoSearch {
            query: query.to_string(),
        };
        self.call(&request)
            .map_err(|e| SearchError::new(format!("{e:#}")))
    }

    fn get_result(&self, file_hash: &str) -> Result<FileRecord, FetchError> {
        let request = EngineRequest::GetResult {
            file_hash: file_hash.to_string(),
        };
        self.call(&request)
            .map_err(|e| FetchError::new(file_hash, format!("{e:#}")))
    }
}

impl Drop for ProcessBackend {
    fn drop(&mut self) {
        if let Ok(mut session) = self.session.lock() {
            let _ = session.child.kill();
            let _ = session.child.wait();
        }
    }
}
