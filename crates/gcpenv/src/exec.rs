// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `gcpenv exec`: populate the real environment, then become the command.

use std::os::unix::process::CommandExt;
use std::process::Command;

use gcpenv_config::GcpEnvConfig;
use gcpenv_core::GcpEnvError;
use gcpenv_env::{EnvironmentPopulator, ProcessEnvironment};
use gcpenv_gcp::GcpClients;
use gcpenv_secrets::SecretProvider;
use thiserror::Error;
use tracing::{debug, info};

use crate::build_runtime;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("please supply a command to run")]
    MissingCommand,

    #[error("failed to validate command `{program}`: {source}")]
    InvalidCommand {
        program: String,
        source: which::Error,
    },

    #[error(transparent)]
    Populate(#[from] GcpEnvError),

    #[error("failed to execute `{program}`: {source}")]
    Exec {
        program: String,
        source: std::io::Error,
    },
}

/// Only returns on failure. On success the process image is replaced.
///
/// The command is resolved against `PATH` before any secret is fetched.
pub fn run(config: &GcpEnvConfig, argv: &[String]) -> Result<(), ExecError> {
    let (program, args) = argv.split_first().ok_or(ExecError::MissingCommand)?;
    let path = which::which(program).map_err(|source| ExecError::InvalidCommand {
        program: program.clone(),
        source,
    })?;

    let clients = GcpClients::from_config(config)?;
    let provider = SecretProvider::from_config(config, clients.kms, clients.secret_manager);
    let mut populator = EnvironmentPopulator::new(provider, ProcessEnvironment::new());

    let runtime = build_runtime()?;
    let plan = runtime.block_on(populator.scan())?;
    drop(runtime);

    let count = populator.apply(plan)?;
    info!(count, "environment populated");

    debug!(program = %program, path = %path.display(), "executing command");
    let source = Command::new(&path).arg0(program).args(args).exec();
    Err(ExecError::Exec {
        program: program.clone(),
        source,
    })
}
