use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

use crate::loader::ConfigState;

pub const WRITE_FAIL_WARNING: &str =
    "Config file could not be written: your changes will not be persisted.";

/// Writes the whole config document to a path.
#[async_trait]
pub trait ConfigWriter: Send + Sync {
    async fn write(&self, path: &Path, config: &Value) -> std::io::Result<()>;
}

/// Writes pretty-printed JSON, creating the parent directory if needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileWriter;

#[async_trait]
impl ConfigWriter for JsonFileWriter {
    async fn write(&self, path: &Path, config: &Value) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let mut body = serde_json::to_string_pretty(config)?;
        body.push('\n');
        tokio::fs::write(path, body).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistOutcome {
    pub success: bool,
}

/// Single write attempt. Errors are logged and folded into the outcome; the
/// caller decides whether a failed write is fatal.
pub async fn persist(writer: &dyn ConfigWriter, state: &ConfigState) -> PersistOutcome {
    match writer.write(state.path(), state.value()).await {
        Ok(()) => {
            debug!(path = %state.path().display(), "config file written");
            PersistOutcome { success: true }
        }
        Err(e) => {
            warn!(path = %state.path().display(), error = %e, "failed to write config file");
            PersistOutcome { success: false }
        }
    }
}
