use serde_json::Value;
use std::fmt;

use lisky_core::{LiskyError, Result};

/// A dot-notation variable name split into its segments, e.g.
/// `liskJS.testnet` → `["liskJS", "testnet"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariablePath {
    segments: Vec<String>,
}

impl VariablePath {
    /// Empty names and empty segments (`a..b`, `.a`) are unsupported.
    pub fn parse(name: &str) -> Result<Self> {
        let segments: Vec<String> = name.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(LiskyError::UnsupportedVariable(name.to_string()));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Final segment, the key that is assigned.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Segments that must already resolve to objects.
    pub fn parents(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }
}

impl fmt::Display for VariablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Assign `leaf` at `path` inside `root` and return the mutated root.
///
/// Every intermediate segment must already exist as an object; nothing is
/// created along the way.
pub fn resolve_path<'a>(root: &'a mut Value, path: &VariablePath, leaf: Value) -> Result<&'a mut Value> {
    let mut cursor = &mut *root;
    for segment in path.parents() {
        cursor = match cursor.get_mut(segment.as_str()) {
            Some(next) if next.is_object() => next,
            _ => {
                return Err(LiskyError::Config(format!(
                    "cannot resolve {path}: {segment} is not an object"
                )));
            }
        };
    }

    let Some(map) = cursor.as_object_mut() else {
        return Err(LiskyError::Config(format!(
            "cannot resolve {path}: config root is not an object"
        )));
    };
    map.insert(path.leaf().to_string(), leaf);
    Ok(root)
}

/// Read the value at `path`, if every segment exists.
pub fn lookup<'a>(root: &'a Value, path: &VariablePath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |node, segment| node.get(segment.as_str()))
}
