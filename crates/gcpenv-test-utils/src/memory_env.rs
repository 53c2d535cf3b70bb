// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory environment table.

use std::collections::BTreeMap;

use gcpenv_core::{EnvironmentEntry, EnvironmentStore, GcpEnvError};

/// An environment table backed by a sorted map.
///
/// Writes are applied and also appended to a log so tests can assert on
/// exactly which variables were touched.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnvironment {
    vars: BTreeMap<String, String>,
    writes: Vec<(String, String)>,
    reject_writes_to: Option<String>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `NAME=VALUE` strings, the same shape as `environ`.
    pub fn from_environ<S: AsRef<str>>(entries: &[S]) -> Result<Self, GcpEnvError> {
        let mut env = Self::new();
        for raw in entries {
            let entry: EnvironmentEntry = raw.as_ref().parse()?;
            env.vars.insert(entry.name, entry.raw_value);
        }
        Ok(env)
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Make `set` fail for `name`.
    pub fn rejecting_writes_to(mut self, name: &str) -> Self {
        self.reject_writes_to = Some(name.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Every successful write, in order.
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }
}

impl EnvironmentStore for MemoryEnvironment {
    fn entries(&self) -> Vec<EnvironmentEntry> {
        self.vars
            .iter()
            .map(|(name, value)| EnvironmentEntry::new(name, value))
            .collect()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), GcpEnvError> {
        if self.reject_writes_to.as_deref() == Some(name) {
            return Err(GcpEnvError::Environment(format!(
                "cannot set variable `{name}`"
            )));
        }
        self.vars.insert(name.to_string(), value.to_string());
        self.writes.push((name.to_string(), value.to_string()));
        Ok(())
    }
}
