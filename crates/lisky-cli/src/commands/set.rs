use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use lisky_config::{
    ConfigSchema, ConfigState, ConfigWriter, VariablePath, WRITE_FAIL_WARNING, coerce_value,
    dispatch_effects, lookup_entry, persist, resolve_path,
};
use lisky_core::{ApiClient, LiskyError, Result};

pub const ERROR_PREFIX: &str = "Could not set config variable";
pub const NON_INTERACTIVE_ENV: &str = "NON_INTERACTIVE_MODE";

/// Whether a failed config write aborts the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Failed writes become a warning on the result.
    #[default]
    Interactive,
    /// Failed writes are fatal.
    NonInteractive,
}

impl ExecutionMode {
    /// Mode selected by `NON_INTERACTIVE_MODE`.
    pub fn from_env() -> Self {
        Self::from_flag(std::env::var(NON_INTERACTIVE_ENV).ok().as_deref())
    }

    /// Only the exact value `true` selects non-interactive mode.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("true") => Self::NonInteractive,
            _ => Self::Interactive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetInput {
    pub variable: String,
    pub value: String,
}

impl SetInput {
    pub fn new(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetOutcome {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// `lisky set <variable> <value>`.
#[derive(Debug, Clone)]
pub struct SetCommand {
    schema: ConfigSchema,
    mode: ExecutionMode,
}

impl SetCommand {
    pub fn new(schema: ConfigSchema, mode: ExecutionMode) -> Self {
        Self { schema, mode }
    }

    /// Validate, assign, run the variable's side effect, then write the config once.
    ///
    /// Unsupported names and badly formatted values fail before anything is
    /// touched. A failed write is a warning in interactive mode and a
    /// [`LiskyError::FileSystem`] otherwise; in both cases the in-memory config
    /// and the API client already hold the new value.
    pub async fn execute(
        &self,
        state: &mut ConfigState,
        api: &mut dyn ApiClient,
        writer: &dyn ConfigWriter,
        input: SetInput,
    ) -> Result<SetOutcome> {
        let SetInput { variable, value } = input;
        debug!(%variable, %value, mode = ?self.mode, "setting config variable");

        let entry = lookup_entry(&self.schema, &variable)?;
        let typed = coerce_value(&variable, entry, &value)?;
        let path = VariablePath::parse(&variable)?;

        resolve_path(state.value_mut(), &path, typed.to_json())?;
        info!(%variable, value = %typed, "config variable updated");

        dispatch_effects(&variable, entry, api, &typed)?;

        let written = persist(writer, state).await.success;
        if !written && self.mode == ExecutionMode::NonInteractive {
            warn!(%variable, "config write failed in non-interactive mode");
            return Err(LiskyError::FileSystem(WRITE_FAIL_WARNING.to_string()));
        }

        Ok(SetOutcome {
            message: format!("Successfully set {variable} to {value}."),
            warning: (!written).then(|| WRITE_FAIL_WARNING.to_string()),
        })
    }
}
