use thiserror::Error;

/// Unified error type for the Lisky workspace.
#[derive(Error, Debug)]
pub enum LiskyError {
    // ── Variable errors ────────────────────────────────────────
    /// The variable name has no schema entry. Raised before any mutation.
    #[error("Unsupported variable name.")]
    UnsupportedVariable(String),

    #[error("{0}")]
    Validation(String),

    // ── Persistence errors ─────────────────────────────────────
    /// The config could not be written and the command runs non-interactively.
    #[error("{0}")]
    FileSystem(String),

    // ── Lisk API errors ────────────────────────────────────────
    #[error("lisk api error: {0}")]
    Api(String),

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Command errors ─────────────────────────────────────────
    /// A command failure, prefixed with what the command was trying to do.
    #[error("{prefix}: {source}")]
    Command {
        prefix: &'static str,
        #[source]
        source: Box<LiskyError>,
    },

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl LiskyError {
    /// Wrap `self` with a command-level prefix, e.g. "Could not set config variable".
    pub fn in_command(self, prefix: &'static str) -> Self {
        Self::Command {
            prefix,
            source: Box::new(self),
        }
    }

    /// The offending variable name, for errors that carry one.
    pub fn variable(&self) -> Option<&str> {
        match self {
            Self::UnsupportedVariable(name) => Some(name),
            Self::Command { source, .. } => source.variable(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LiskyError>;
