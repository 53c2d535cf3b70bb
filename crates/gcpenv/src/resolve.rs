// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `gcpenv resolve`: print the plaintext of each argument.

use std::io::Write;

use gcpenv_config::GcpEnvConfig;
use gcpenv_core::GcpEnvError;
use gcpenv_gcp::GcpClients;
use gcpenv_secrets::SecretProvider;

use crate::build_runtime;

/// Every result is printed, failed slots as empty lines, before any error
/// is returned.
pub fn run(config: &GcpEnvConfig, values: &[String]) -> Result<(), GcpEnvError> {
    let clients = GcpClients::from_config(config)?;
    let provider = SecretProvider::from_config(config, clients.kms, clients.secret_manager);

    let runtime = build_runtime()?;
    let batch = runtime.block_on(provider.resolve_secrets(values));

    let mut stdout = std::io::stdout().lock();
    for value in &batch.values {
        writeln!(stdout, "{value}")
            .map_err(|e| GcpEnvError::Internal(format!("failed to write output: {e}")))?;
    }

    match batch.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
