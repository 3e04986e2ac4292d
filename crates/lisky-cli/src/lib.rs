//! # lisky-cli
//!
//! Command-line interface for Lisky.
//!
//! ## Commands
//!
//! - `lisky set <variable> <value>` — Set a config variable (dot notation)
//! - `lisky config` — Show the current configuration
//! - `lisky variables` — List settable variables and their types
//! - `lisky completions <shell>` — Generate shell completions

pub mod api;
pub mod commands;

pub use api::LiskApiClient;
pub use commands::Cli;
pub use commands::set::{ExecutionMode, SetCommand, SetInput, SetOutcome};
