use tracing::debug;

use lisky_core::{ApiClient, LiskyError, Result};

use crate::schema::{SSL_VARIABLE, SchemaEntry, TESTNET_VARIABLE, TypedValue};

/// Side effect attached to a schema entry, run after the value is assigned.
pub type EffectHandler = fn(&mut dyn ApiClient, &TypedValue) -> Result<()>;

pub fn apply_testnet(api: &mut dyn ApiClient, value: &TypedValue) -> Result<()> {
    api.set_testnet(expect_bool(TESTNET_VARIABLE, value)?)
}

pub fn apply_ssl(api: &mut dyn ApiClient, value: &TypedValue) -> Result<()> {
    api.set_ssl(expect_bool(SSL_VARIABLE, value)?)
}

/// Effect that ships with the named variable, if any.
pub fn builtin_effect(variable: &str) -> Option<EffectHandler> {
    match variable {
        TESTNET_VARIABLE => Some(apply_testnet as EffectHandler),
        SSL_VARIABLE => Some(apply_ssl as EffectHandler),
        _ => None,
    }
}

/// Run the entry's effect against the API client. No-op for plain variables.
pub fn dispatch_effects(
    variable: &str,
    entry: &SchemaEntry,
    api: &mut dyn ApiClient,
    value: &TypedValue,
) -> Result<()> {
    if let Some(effect) = entry.effect {
        debug!(variable, %value, "applying config side effect");
        effect(api, value)?;
    }
    Ok(())
}

fn expect_bool(variable: &str, value: &TypedValue) -> Result<bool> {
    value.as_bool().ok_or_else(|| {
        LiskyError::Validation(format!(
            "Wrong format for {variable} - {value}. Expected boolean."
        ))
    })
}
