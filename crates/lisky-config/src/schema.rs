use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use lisky_core::{LiskyError, Result};

use crate::effects::{self, EffectHandler};

pub const JSON_VARIABLE: &str = "json";
pub const NAME_VARIABLE: &str = "name";
pub const PRETTY_VARIABLE: &str = "pretty";
pub const TESTNET_VARIABLE: &str = "liskJS.testnet";
pub const SSL_VARIABLE: &str = "liskJS.ssl";
pub const NODE_VARIABLE: &str = "liskJS.node";
pub const PORT_VARIABLE: &str = "liskJS.port";

// ── Value types ────────────────────────────────────────────────

/// Primitive type a config variable must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
    String,
    Number,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = LiskyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "boolean" => Ok(Self::Boolean),
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            other => Err(LiskyError::Config(format!("unknown value type '{other}'"))),
        }
    }
}

/// A raw command-line value after coercion to its schema type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Bool(bool),
    Str(String),
    /// A `number` value written as a whole number that fits in an `i64`.
    Integer(i64),
    Number(f64),
}

impl TypedValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// JSON form stored in the config document.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Str(s) => Value::String(s.clone()),
            Self::Integer(i) => json!(*i),
            Self::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

// ── Schema ─────────────────────────────────────────────────────

/// Declaration of one settable variable.
#[derive(Clone, Copy)]
pub struct SchemaEntry {
    pub value_type: ValueType,
    /// Called with the coerced value after it has been assigned in memory.
    pub effect: Option<EffectHandler>,
}

impl SchemaEntry {
    pub fn new(value_type: ValueType) -> Self {
        Self { value_type, effect: None }
    }

    pub fn with_effect(mut self, effect: EffectHandler) -> Self {
        self.effect = Some(effect);
        self
    }
}

impl fmt::Debug for SchemaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaEntry")
            .field("value_type", &self.value_type)
            .field("has_effect", &self.effect.is_some())
            .finish()
    }
}

/// Registry of every variable `lisky set` accepts.
#[derive(Debug, Clone, Default)]
pub struct ConfigSchema {
    entries: BTreeMap<String, SchemaEntry>,
}

impl ConfigSchema {
    /// The built-in variable table.
    pub fn builtin() -> Self {
        Self::default()
            .with_entry(JSON_VARIABLE, SchemaEntry::new(ValueType::Boolean))
            .with_entry(NAME_VARIABLE, SchemaEntry::new(ValueType::String))
            .with_entry(PRETTY_VARIABLE, SchemaEntry::new(ValueType::Boolean))
            .with_entry(
                TESTNET_VARIABLE,
                SchemaEntry::new(ValueType::Boolean).with_effect(effects::apply_testnet),
            )
            .with_entry(
                SSL_VARIABLE,
                SchemaEntry::new(ValueType::Boolean).with_effect(effects::apply_ssl),
            )
            .with_entry(NODE_VARIABLE, SchemaEntry::new(ValueType::String))
            .with_entry(PORT_VARIABLE, SchemaEntry::new(ValueType::String))
    }

    /// Build a schema from a flat JSON table of `{ "dot.name": "type" }`.
    ///
    /// Variables with a built-in effect (`liskJS.testnet`, `liskJS.ssl`) keep it
    /// as long as the table declares them boolean.
    pub fn from_json(raw: &str) -> Result<Self> {
        let table: BTreeMap<String, String> = serde_json::from_str(raw)
            .map_err(|e| LiskyError::Config(format!("invalid schema table: {e}")))?;

        let mut schema = Self::default();
        for (name, tag) in table {
            let value_type: ValueType = tag.parse()?;
            let mut entry = SchemaEntry::new(value_type);
            if value_type == ValueType::Boolean {
                entry.effect = effects::builtin_effect(&name);
            }
            schema = schema.with_entry(name, entry);
        }
        Ok(schema)
    }

    pub fn with_entry(mut self, name: impl Into<String>, entry: SchemaEntry) -> Self {
        self.entries.insert(name.into(), entry);
        self
    }

    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Variable names in sorted order.
    pub fn variables(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Default config document. Contains every object the built-in schema addresses.
pub fn default_config() -> Value {
    json!({
        "name": "lisky",
        "json": false,
        "pretty": false,
        "liskJS": {
            "testnet": false,
            "ssl": false,
            "node": "",
            "port": ""
        }
    })
}
