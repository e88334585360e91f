//! Binary entry point for the phast CLI.
//!
//! Reads a syntax tree in its interchange JSON form and runs one of the
//! stock visitors over it.
//!
//! ## Usage
//!
//! ```bash
//! # Indented listing with primitive values
//! phast dump tree.json --values
//!
//! # Hook sequence of a traversal, reading stdin
//! cat tree.json | phast events
//!
//! # Node counts per kind
//! phast stats tree.json
//!
//! # Canonical JSON, without variant tags
//! phast json tree.json
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use phast::ast::DumpOptions;
use phast::cli::{load_tree, run_dump, run_events, run_json, run_stats};
use phast::error::{OutputErrorCode, PhastError};
use phast::output::{emit_response, ErrorResponse};

// ============================================================================
// CLI Structure
// ============================================================================

/// Inspect and traverse PHP syntax trees.
#[derive(Parser, Debug)]
#[command(name = "phast", version, about = "Inspect and traverse PHP syntax trees")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

/// Global arguments shared by all subcommands.
#[derive(Parser, Debug)]
struct GlobalArgs {
    /// Log level for tracing output.
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tree as an indented listing.
    Dump {
        /// Tree file (JSON). Reads stdin when omitted or `-`.
        input: Option<PathBuf>,
        /// Show primitive field values.
        #[arg(long)]
        values: bool,
        /// Show node positions.
        #[arg(long)]
        positions: bool,
        /// Hide role lines.
        #[arg(long)]
        no_roles: bool,
        /// Stop printing below this node depth.
        #[arg(long)]
        max_depth: Option<usize>,
        /// Indentation unit, as a number of spaces.
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Print the hook sequence a traversal produces.
    Events {
        /// Tree file (JSON). Reads stdin when omitted or `-`.
        input: Option<PathBuf>,
        /// Emit events as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// Re-emit the tree in canonical JSON, or with `--tagged` in interchange JSON.
    Json {
        /// Tree file (JSON). Reads stdin when omitted or `-`.
        input: Option<PathBuf>,
        /// Single-line output.
        #[arg(long)]
        compact: bool,
        /// Keep the `Kind` tag on every record so the output reads back.
        #[arg(long)]
        tagged: bool,
    },
    /// Report node counts per kind.
    Stats {
        /// Tree file (JSON). Reads stdin when omitted or `-`.
        input: Option<PathBuf>,
    },
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.global.log_level);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let error_code = OutputErrorCode::from(&err);
            let response = ErrorResponse::from_error(&err);

            // Errors go to stdout as JSON, like every other response.
            let _ = emit_response(&response, &mut io::stdout());
            let _ = io::stdout().flush();

            ExitCode::from(error_code.code())
        }
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Execute the CLI command.
fn execute(cli: Cli) -> Result<(), PhastError> {
    debug!(command = ?cli.command, "executing");
    match cli.command {
        Command::Dump {
            input,
            values,
            positions,
            no_roles,
            max_depth,
            indent,
        } => {
            let options = dump_options(values, positions, no_roles, max_depth, indent)?;
            let root = load_tree(input.as_deref())?;
            write_stdout(&run_dump(&root, options))
        }
        Command::Events { input, json } => {
            let root = load_tree(input.as_deref())?;
            write_stdout(&run_events(&root, json)?)
        }
        Command::Json {
            input,
            compact,
            tagged,
        } => {
            let root = load_tree(input.as_deref())?;
            let mut text = run_json(&root, compact, tagged)?;
            text.push('\n');
            write_stdout(&text)
        }
        Command::Stats { input } => {
            let root = load_tree(input.as_deref())?;
            let response = run_stats(&root);
            emit_response(&response, &mut io::stdout())?;
            let _ = io::stdout().flush();
            Ok(())
        }
    }
}

fn dump_options(
    values: bool,
    positions: bool,
    no_roles: bool,
    max_depth: Option<usize>,
    indent: usize,
) -> Result<DumpOptions, PhastError> {
    if indent > 16 {
        return Err(PhastError::invalid_args(format!(
            "--indent must be at most 16, got {}",
            indent
        )));
    }
    Ok(DumpOptions {
        indent: " ".repeat(indent),
        show_roles: !no_roles,
        show_values: values,
        show_positions: positions,
        max_depth,
    })
}

fn write_stdout(text: &str) -> Result<(), PhastError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
