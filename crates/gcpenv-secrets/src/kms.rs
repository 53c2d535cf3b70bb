// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolution of `kms://` ciphertext references.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use gcpenv_config::KMS_KEY_ID_ENV_VAR;
use gcpenv_core::{GcpEnvError, KeyManagementApi};
use zeroize::Zeroizing;

/// Decrypts base64 ciphertext with the configured key.
pub struct DecryptionResolver {
    client: Arc<dyn KeyManagementApi>,
    key_id: Option<String>,
}

impl DecryptionResolver {
    pub fn new(client: Arc<dyn KeyManagementApi>, key_id: Option<String>) -> Self {
        Self { client, key_id }
    }

    /// Decode, look up the key, decrypt, trim.
    ///
    /// The checks run in that order: a malformed blob is reported as a
    /// decode error even when no key is configured.
    pub async fn decrypt(&self, blob: &str) -> Result<String, GcpEnvError> {
        let ciphertext = STANDARD.decode(blob).map_err(|e| GcpEnvError::Decode {
            source: Box::new(e),
        })?;

        let key_id = self
            .key_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                GcpEnvError::Config(format!(
                    "missing required key id to decrypt: set {KMS_KEY_ID_ENV_VAR} or kms.key_id"
                ))
            })?;

        let plaintext = Zeroizing::new(
            self.client
                .decrypt(key_id, &ciphertext)
                .await
                .map_err(|e| e.into_backend("failed to decrypt with Cloud KMS"))?,
        );

        Ok(String::from_utf8_lossy(&plaintext).trim().to_string())
    }
}

impl std::fmt::Debug for DecryptionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecryptionResolver")
            .field("client", &self.client.name())
            .field("key_id", &self.key_id)
            .finish()
    }
}
