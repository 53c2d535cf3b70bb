// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key/value view of an environment table.

use crate::error::GcpEnvError;
use crate::types::EnvironmentEntry;

/// The environment table a populate pass reads from and writes back to.
///
/// Injected rather than global so tests can run against an in-memory table.
pub trait EnvironmentStore {
    /// Returns a snapshot of every entry in the table.
    fn entries(&self) -> Vec<EnvironmentEntry>;

    /// Overwrites (or creates) a single variable.
    fn set(&mut self, name: &str, value: &str) -> Result<(), GcpEnvError>;
}
