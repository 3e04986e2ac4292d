//! In-memory test doubles for the API client and the config writer.
//!
//! Let commands run end to end without a Lisk node or a writable disk.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use lisky_core::{ApiClient, LiskyError, Result};

use crate::persist::ConfigWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCall {
    SetTestnet(bool),
    SetSsl(bool),
}

/// Records every call. Optionally fails every call with a fixed message.
#[derive(Debug, Default)]
pub struct MockApiClient {
    pub calls: Vec<ApiCall>,
    fail_with: Option<String>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: vec![],
            fail_with: Some(message.into()),
        }
    }

    fn record(&mut self, call: ApiCall) -> Result<()> {
        self.calls.push(call);
        match &self.fail_with {
            Some(msg) => Err(LiskyError::Api(msg.clone())),
            None => Ok(()),
        }
    }
}

impl ApiClient for MockApiClient {
    fn set_testnet(&mut self, testnet: bool) -> Result<()> {
        self.record(ApiCall::SetTestnet(testnet))
    }

    fn set_ssl(&mut self, ssl: bool) -> Result<()> {
        self.record(ApiCall::SetSsl(ssl))
    }
}

/// Keeps written documents in memory.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    pub writes: Mutex<Vec<(PathBuf, Value)>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Value> {
        self.writes
            .lock()
            .ok()
            .and_then(|w| w.last().map(|(_, v)| v.clone()))
    }

    pub fn count(&self) -> usize {
        self.writes.lock().map(|w| w.len()).unwrap_or(0)
    }
}

#[async_trait]
impl ConfigWriter for MemoryWriter {
    async fn write(&self, path: &Path, config: &Value) -> std::io::Result<()> {
        self.writes
            .lock()
            .map_err(|_| std::io::Error::other("writer lock poisoned"))?
            .push((path.to_path_buf(), config.clone()));
        Ok(())
    }
}

/// Fails every write with the given error kind.
#[derive(Debug, Clone, Copy)]
pub struct FailingWriter {
    kind: std::io::ErrorKind,
}

impl FailingWriter {
    pub fn new(kind: std::io::ErrorKind) -> Self {
        Self { kind }
    }
}

impl Default for FailingWriter {
    fn default() -> Self {
        Self::new(std::io::ErrorKind::PermissionDenied)
    }
}

#[async_trait]
impl ConfigWriter for FailingWriter {
    async fn write(&self, path: &Path, _config: &Value) -> std::io::Result<()> {
        Err(std::io::Error::new(
            self.kind,
            format!("cannot write {}", path.display()),
        ))
    }
}
