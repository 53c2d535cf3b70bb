// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The real process environment.

use gcpenv_core::{EnvironmentEntry, EnvironmentStore, GcpEnvError};
use tracing::warn;

/// [`EnvironmentStore`] over `std::env`.
///
/// Writes go through `std::env::set_var`, so [`EnvironmentStore::set`] must
/// only be called while no other thread reads or writes the environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentStore for ProcessEnvironment {
    fn entries(&self) -> Vec<EnvironmentEntry> {
        std::env::vars_os()
            .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some(EnvironmentEntry::new(name, value)),
                (name, _) => {
                    let name = match name {
                        Ok(name) => name,
                        Err(raw) => raw.to_string_lossy().into_owned(),
                    };
                    warn!(name = %name, "skipping non UTF-8 environment variable");
                    None
                }
            })
            .collect()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), GcpEnvError> {
        if name.is_empty() || name.contains('=') || name.contains('\0') {
            return Err(GcpEnvError::Environment(format!(
                "invalid environment variable name `{name}`"
            )));
        }
        if value.contains('\0') {
            return Err(GcpEnvError::Environment(format!(
                "value for `{name}` contains a NUL byte"
            )));
        }

        // SAFETY: callers apply overwrites from a single thread after the
        // async runtime has shut down.
        unsafe { std::env::set_var(name, value) };
        Ok(())
    }
}
