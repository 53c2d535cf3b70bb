// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! gcpenv - resolve Google Cloud secret references in the environment, then
//! run a command.
//!
//! This is the binary entry point.

mod exec;
mod resolve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gcpenv_core::GcpEnvError;

/// Resolve kms:// and sm:// environment variables before running a command.
#[derive(Parser, Debug)]
#[command(name = "gcpenv", version, about, long_about = None)]
struct Cli {
    /// Read configuration from PATH instead of the usual gcpenv.toml locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Populate the environment, then replace this process with COMMAND.
    Exec {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
        command: Vec<String>,
    },
    /// Resolve each VALUE and print the results, one per line.
    Resolve {
        #[arg(value_name = "VALUE")]
        values: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => gcpenv_config::load_and_validate_path(path),
        None => gcpenv_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            gcpenv_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_level);

    let result = match cli.command {
        Commands::Exec { command } => exec::run(&config, &command).map_err(|e| e.to_string()),
        Commands::Resolve { values } => resolve::run(&config, &values).map_err(|e| e.to_string()),
    };

    if let Err(message) = result {
        eprintln!("gcpenv: {message}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so that `resolve` output and the child's stdout stay clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gcpenv={},warn", log_level.to_lowercase())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Resolution runs on a single thread; the runtime is dropped before the
/// process environment is touched.
pub(crate) fn build_runtime() -> Result<tokio::runtime::Runtime, GcpEnvError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| GcpEnvError::Internal(format!("failed to start async runtime: {e}")))
}
