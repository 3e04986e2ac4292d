use anyhow::Context;
use clap::builder::{PossibleValue, StringValueParser, TypedValueParser};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use lisky_config::{ConfigLoader, ConfigSchema, ConfigState, JsonFileWriter};
use lisky_core::LiskyError;

use crate::api::LiskApiClient;

pub mod output;
pub mod set;

use output::OutputFormat;
use set::{ERROR_PREFIX, ExecutionMode, SetCommand, SetInput};

/// Lisky — command-line tool for Lisk
#[derive(Parser)]
#[command(name = "lisky", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding config.json (default: ~/.lisky)
    #[arg(short, long, global = true)]
    config_dir: Option<PathBuf>,

    /// JSON schema table of settable variables ({"dot.name": "boolean" | "string" | "number"})
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    /// Print results as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Treat a failed config write as an error (also: NON_INTERACTIVE_MODE=true)
    #[arg(long, global = true)]
    non_interactive: bool,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true, env = "LISKY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set configuration <variable> to <value>. Nested variables are separated by a dot
    /// (e.g. `set json true`, `set name my_custom_lisky`, `set liskJS.testnet true`).
    Set {
        /// Config variable in dot notation (see `lisky variables`)
        #[arg(value_parser = VariableNameParser, hide_possible_values = true)]
        variable: String,
        /// Value to set
        value: String,
    },
    /// Show current configuration
    Config,
    /// List settable variables and their types
    Variables,
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub async fn run(self) -> lisky_core::Result<()> {
        // Resolve log level: --verbose > --quiet > --log-level > warn
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level.as_deref().unwrap_or("warn")
        };

        // Logs go to stderr so stdout stays machine-readable
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .ok();

        if let Commands::Completions { shell } = self.command {
            return Self::cmd_completions(shell);
        }

        let mut state = ConfigLoader::load(self.config_dir.as_deref())?;
        let schema = load_schema(self.schema.as_deref())?;
        let format = OutputFormat::resolve(&state, self.json, self.pretty);

        match self.command {
            Commands::Set { variable, value } => {
                let mode = if self.non_interactive {
                    ExecutionMode::NonInteractive
                } else {
                    ExecutionMode::from_env()
                };
                Self::cmd_set(&mut state, schema, mode, format, SetInput::new(variable, value)).await
            }
            Commands::Config => Self::cmd_config(&state, format),
            Commands::Variables => Self::cmd_variables(&schema, format),
            Commands::Completions { shell } => Self::cmd_completions(shell),
        }
    }

    /// Config directory and schema file are not read.
    fn cmd_completions(shell: Shell) -> lisky_core::Result<()> {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "lisky", &mut std::io::stdout());
        Ok(())
    }

    async fn cmd_set(
        state: &mut ConfigState,
        schema: ConfigSchema,
        mode: ExecutionMode,
        format: OutputFormat,
        input: SetInput,
    ) -> lisky_core::Result<()> {
        let mut api = LiskApiClient::from_config(state);
        let command = SetCommand::new(schema, mode);

        let outcome = command
            .execute(state, &mut api, &JsonFileWriter, input)
            .await
            .map_err(|e| e.in_command(ERROR_PREFIX))?;

        println!("{}", format.render_outcome(&outcome)?);
        Ok(())
    }

    fn cmd_config(state: &ConfigState, format: OutputFormat) -> lisky_core::Result<()> {
        if format.json {
            println!("{}", format.render_json(state.value())?);
        } else {
            println!("# {}", state.path().display());
            println!("{}", serde_json::to_string_pretty(state.value())?);
        }
        Ok(())
    }

    fn cmd_variables(schema: &ConfigSchema, format: OutputFormat) -> lisky_core::Result<()> {
        if format.json {
            let table: serde_json::Map<String, serde_json::Value> = schema
                .iter()
                .map(|(name, entry)| (name.to_string(), entry.value_type.as_str().into()))
                .collect();
            println!("{}", format.render_json(&table)?);
            return Ok(());
        }

        if schema.is_empty() {
            return Err(LiskyError::Config("schema declares no variables".into()));
        }
        let width = schema.variables().iter().map(|n| n.len()).max().unwrap_or(0);
        for (name, entry) in schema.iter() {
            let marker = if entry.effect.is_some() { "  (updates API client)" } else { "" };
            println!("{name:<width$}  {}{marker}", entry.value_type);
        }
        Ok(())
    }
}

/// `--schema` table when given, otherwise the built-in variables.
fn load_schema(path: Option<&Path>) -> lisky_core::Result<ConfigSchema> {
    let Some(path) = path else {
        return Ok(ConfigSchema::builtin());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read schema file {}", path.display()))?;
    ConfigSchema::from_json(&raw)
}

/// Accepts any variable name so `--schema` tables can add their own; offers
/// the built-in names to shell completion.
#[derive(Clone)]
struct VariableNameParser;

impl TypedValueParser for VariableNameParser {
    type Value = String;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        StringValueParser::new().parse_ref(cmd, arg, value)
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        let names: Vec<PossibleValue> = ConfigSchema::builtin()
            .variables()
            .into_iter()
            .map(|name| PossibleValue::new(name.to_string()))
            .collect();
        Some(Box::new(names.into_iter()))
    }
}
