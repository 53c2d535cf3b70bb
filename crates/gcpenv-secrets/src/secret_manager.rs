// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolution of `sm://` managed-secret references.

use std::sync::Arc;

use gcpenv_core::{GcpEnvError, SecretManagerApi};
use zeroize::Zeroizing;

/// Fetches secret payloads. Every call is a fresh request.
pub struct ManagedSecretResolver {
    client: Arc<dyn SecretManagerApi>,
}

impl ManagedSecretResolver {
    pub fn new(client: Arc<dyn SecretManagerApi>) -> Self {
        Self { client }
    }

    /// `resource_path` must already carry its `/versions/` segment.
    pub async fn access(&self, resource_path: &str) -> Result<String, GcpEnvError> {
        let payload = Zeroizing::new(
            self.client
                .access_secret_version(resource_path)
                .await
                .map_err(|e| e.into_backend("failed to access secret from Secret Manager"))?,
        );
        Ok(String::from_utf8_lossy(&payload).into_owned())
    }
}

impl std::fmt::Debug for ManagedSecretResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagedSecretResolver")
            .field("client", &self.client.name())
            .finish()
    }
}
