//! # lisky-config
//!
//! Configuration system for Lisky. The live configuration is a JSON document
//! (`config.json`) addressed by dot-notation variable names such as
//! `liskJS.testnet`. Every settable variable is declared in a [`ConfigSchema`]
//! together with its value type and, optionally, an effect on the Lisk API client.

pub mod effects;
pub mod loader;
pub mod path;
pub mod persist;
pub mod sanitize;
pub mod schema;
pub mod testing;

pub use effects::{EffectHandler, dispatch_effects};
pub use loader::{ConfigLoader, ConfigState};
pub use path::{VariablePath, lookup, resolve_path};
pub use persist::{ConfigWriter, JsonFileWriter, PersistOutcome, WRITE_FAIL_WARNING, persist};
pub use sanitize::{coerce_value, lookup_entry, validate_and_coerce};
pub use schema::{ConfigSchema, SchemaEntry, TypedValue, ValueType, default_config};
