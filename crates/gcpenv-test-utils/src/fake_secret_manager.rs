// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory Secret Manager for deterministic tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use gcpenv_core::{Backend, GcpEnvError, SecretManagerApi};

/// A Secret Manager stand-in keyed by full version resource name.
pub struct FakeSecretManager {
    payloads: HashMap<String, Vec<u8>>,
    failures: HashMap<String, String>,
    accessed: Mutex<Vec<String>>,
}

impl FakeSecretManager {
    /// Create a fake with no secrets.
    pub fn new() -> Self {
        Self {
            payloads: HashMap::new(),
            failures: HashMap::new(),
            accessed: Mutex::new(Vec::new()),
        }
    }

    /// Register a payload. `name` must include its `/versions/` segment.
    pub fn with_secret(mut self, name: &str, payload: impl AsRef<[u8]>) -> Self {
        self.payloads
            .insert(name.to_string(), payload.as_ref().to_vec());
        self
    }

    /// Make access to `name` fail with `message`.
    pub fn failing_for(mut self, name: &str, message: &str) -> Self {
        self.failures.insert(name.to_string(), message.to_string());
        self
    }

    /// Every resource name accessed so far, in call order.
    pub async fn accessed(&self) -> Vec<String> {
        self.accessed.lock().await.clone()
    }
}

impl Default for FakeSecretManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for FakeSecretManager {
    fn name(&self) -> &str {
        "fake-secret-manager"
    }
}

#[async_trait]
impl SecretManagerApi for FakeSecretManager {
    async fn access_secret_version(&self, name: &str) -> Result<Vec<u8>, GcpEnvError> {
        self.accessed.lock().await.push(name.to_string());

        if let Some(message) = self.failures.get(name) {
            return Err(GcpEnvError::backend(message.clone()));
        }

        self.payloads
            .get(name)
            .cloned()
            .ok_or_else(|| GcpEnvError::backend(format!("secret version {name} not found")))
    }
}
