use lisky_core::{LiskyError, Result};

use crate::schema::{ConfigSchema, SchemaEntry, TypedValue, ValueType};

/// Coerce the raw command-line `value` of `variable` into its schema type.
///
/// Booleans accept only the literal tokens `true` and `false`; strings pass
/// through unchanged; numbers parse as an `i64` when whole, otherwise as a
/// finite float.
pub fn validate_and_coerce(schema: &ConfigSchema, variable: &str, value: &str) -> Result<TypedValue> {
    coerce_value(variable, lookup_entry(schema, variable)?, value)
}

/// Schema entry for `variable`, or [`LiskyError::UnsupportedVariable`].
pub fn lookup_entry<'a>(schema: &'a ConfigSchema, variable: &str) -> Result<&'a SchemaEntry> {
    schema
        .get(variable)
        .ok_or_else(|| LiskyError::UnsupportedVariable(variable.to_string()))
}

/// Coerce `value` against an entry that has already been looked up.
pub fn coerce_value(variable: &str, entry: &SchemaEntry, value: &str) -> Result<TypedValue> {
    coerce(entry.value_type, value).ok_or_else(|| {
        LiskyError::Validation(format!(
            "Wrong format for {variable} - {value}. Expected {}.",
            entry.value_type
        ))
    })
}

fn coerce(value_type: ValueType, raw: &str) -> Option<TypedValue> {
    match value_type {
        ValueType::Boolean => match raw {
            "true" => Some(TypedValue::Bool(true)),
            "false" => Some(TypedValue::Bool(false)),
            _ => None,
        },
        ValueType::String => Some(TypedValue::Str(raw.to_string())),
        ValueType::Number => match raw.parse::<i64>() {
            Ok(i) => Some(TypedValue::Integer(i)),
            Err(_) => raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(TypedValue::Number),
        },
    }
}
