// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rewrites an environment table in place, replacing every secret reference
//! with its plaintext.

use std::collections::HashMap;

use gcpenv_core::{EnvironmentStore, GcpEnvError};
use gcpenv_secrets::{SecretProvider, has_reference_prefix, parse_reference};
use tracing::{debug, info};

/// Overwrites computed by a successful scan, not yet applied.
pub struct PopulatePlan {
    overwrites: HashMap<String, String>,
}

impl PopulatePlan {
    pub fn len(&self) -> usize {
        self.overwrites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overwrites.is_empty()
    }

    /// Names of the variables that will be overwritten, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.overwrites.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for PopulatePlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopulatePlan")
            .field("names", &self.names())
            .finish_non_exhaustive()
    }
}

/// Resolves references found in an [`EnvironmentStore`] and writes the
/// plaintexts back.
pub struct EnvironmentPopulator<E> {
    provider: SecretProvider,
    store: E,
}

impl<E: EnvironmentStore> EnvironmentPopulator<E> {
    pub fn new(provider: SecretProvider, store: E) -> Self {
        Self { provider, store }
    }

    pub fn store(&self) -> &E {
        &self.store
    }

    pub fn into_store(self) -> E {
        self.store
    }

    /// Resolve every prefixed entry without touching the store.
    ///
    /// Stops at the first failure and reports the variable that caused it.
    pub async fn scan(&self) -> Result<PopulatePlan, GcpEnvError> {
        let entries = self.store.entries();
        let mut overwrites = HashMap::new();

        for entry in &entries {
            if !has_reference_prefix(&entry.raw_value) {
                continue;
            }

            let kind = parse_reference(&entry.raw_value).kind();
            let plaintext = self
                .provider
                .resolve_secret(&entry.raw_value)
                .await
                .map_err(|source| GcpEnvError::Populate {
                    name: entry.name.clone(),
                    source: Box::new(source),
                })?;

            debug!(name = %entry.name, %kind, "resolved environment variable");
            overwrites.insert(entry.name.clone(), plaintext);
        }

        info!(
            scanned = entries.len(),
            resolved = overwrites.len(),
            "environment scan complete"
        );
        Ok(PopulatePlan { overwrites })
    }

    /// Write a plan into the store.
    ///
    /// Not transactional: if a write fails, variables written before it keep
    /// their new values. The error names the variable that failed.
    pub fn apply(&mut self, plan: PopulatePlan) -> Result<usize, GcpEnvError> {
        let count = plan.len();
        for (name, value) in plan.overwrites {
            self.store
                .set(&name, &value)
                .map_err(|source| GcpEnvError::Populate {
                    name: name.clone(),
                    source: Box::new(source),
                })?;
        }
        Ok(count)
    }

    /// [`scan`](Self::scan) then [`apply`](Self::apply). Returns the number
    /// of variables overwritten.
    pub async fn populate(&mut self) -> Result<usize, GcpEnvError> {
        let plan = self.scan().await?;
        self.apply(plan)
    }
}
