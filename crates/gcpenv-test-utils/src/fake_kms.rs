// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory Cloud KMS for deterministic tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use gcpenv_core::{Backend, GcpEnvError, KeyManagementApi};

/// A KMS stand-in that "decrypts" by table lookup.
///
/// Ciphertexts are keyed by `(key_id, bytes)`, so decrypting with the wrong
/// key fails the same way the real service does. Every call is recorded.
pub struct FakeKeyManagement {
    plaintexts: HashMap<(String, Vec<u8>), Vec<u8>>,
    failure: Option<String>,
    calls: Mutex<Vec<(String, Vec<u8>)>>,
}

impl FakeKeyManagement {
    /// Create a fake with no known ciphertexts.
    pub fn new() -> Self {
        Self {
            plaintexts: HashMap::new(),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Register the plaintext returned for `ciphertext` under `key_id`.
    pub fn with_plaintext(
        mut self,
        key_id: &str,
        ciphertext: impl AsRef<[u8]>,
        plaintext: impl AsRef<[u8]>,
    ) -> Self {
        self.plaintexts.insert(
            (key_id.to_string(), ciphertext.as_ref().to_vec()),
            plaintext.as_ref().to_vec(),
        );
        self
    }

    /// Make every decrypt call fail with `message`.
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Every `(key_id, ciphertext)` pair seen so far, in call order.
    pub async fn calls(&self) -> Vec<(String, Vec<u8>)> {
        self.calls.lock().await.clone()
    }
}

impl Default for FakeKeyManagement {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for FakeKeyManagement {
    fn name(&self) -> &str {
        "fake-kms"
    }
}

#[async_trait]
impl KeyManagementApi for FakeKeyManagement {
    async fn decrypt(&self, key_id: &str, ciphertext: &[u8]) -> Result<Vec<u8>, GcpEnvError> {
        self.calls
            .lock()
            .await
            .push((key_id.to_string(), ciphertext.to_vec()));

        if let Some(message) = &self.failure {
            return Err(GcpEnvError::backend(message.clone()));
        }

        self.plaintexts
            .get(&(key_id.to_string(), ciphertext.to_vec()))
            .cloned()
            .ok_or_else(|| GcpEnvError::backend(format!("decryption failed with key {key_id}")))
    }
}
