//! # lisky-core
//!
//! Shared vocabulary for the Lisky workspace: the unified error type and the
//! capability traits that commands call out to.

pub mod api;
pub mod error;

pub use api::ApiClient;
pub use error::{LiskyError, Result};
