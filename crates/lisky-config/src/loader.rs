use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use lisky_core::{LiskyError, Result};

use crate::path::{VariablePath, lookup};
use crate::schema::default_config;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "LISKY_CONFIG_DIR";

/// The live configuration document and the file it is persisted to.
///
/// Owned by the command being run and passed to it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    value: Value,
    path: PathBuf,
}

impl ConfigState {
    pub fn new(value: Value, path: impl Into<PathBuf>) -> Self {
        Self { value, path: path.into() }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a variable by its dot-notation name.
    pub fn get(&self, variable: &str) -> Option<&Value> {
        let path = VariablePath::parse(variable).ok()?;
        lookup(&self.value, &path)
    }

    /// Boolean variable, `false` when absent or not a boolean.
    pub fn flag(&self, variable: &str) -> bool {
        self.get(variable).and_then(Value::as_bool).unwrap_or(false)
    }
}

/// Locates and reads `config.json`.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve the config directory: explicit path > LISKY_CONFIG_DIR env > ~/.lisky
    pub fn resolve_dir(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var(CONFIG_DIR_ENV) {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lisky")
    }

    pub fn resolve_path(explicit_dir: Option<&Path>) -> PathBuf {
        Self::resolve_dir(explicit_dir).join(CONFIG_FILE_NAME)
    }

    /// Load the config from the resolved directory, on top of the defaults.
    pub fn load(explicit_dir: Option<&Path>) -> Result<ConfigState> {
        Self::load_from(&Self::resolve_path(explicit_dir))
    }

    /// Load `config_path`, deep-merged over [`default_config`]. A missing file
    /// yields the defaults.
    pub fn load_from(config_path: &Path) -> Result<ConfigState> {
        let mut config = default_config();

        if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(config_path)?;
            let user: Value = serde_json::from_str(&raw).map_err(|e| {
                LiskyError::Config(format!("failed to parse {}: {}", config_path.display(), e))
            })?;
            if !user.is_object() {
                return Err(LiskyError::Config(format!(
                    "{} must contain a JSON object",
                    config_path.display()
                )));
            }
            merge(&mut config, user);
        } else {
            warn!(?config_path, "config file not found, using defaults");
        }

        Ok(ConfigState::new(config, config_path))
    }
}

/// Deep-merge `overlay` into `base`. Objects merge key by key; any other
/// overlay value replaces what is in `base`.
pub fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
