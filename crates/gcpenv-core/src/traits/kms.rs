// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decrypt capability backing `kms://` references.

use async_trait::async_trait;

use crate::error::GcpEnvError;
use crate::traits::backend::Backend;

/// Envelope decryption with an externally managed key.
#[async_trait]
pub trait KeyManagementApi: Backend {
    /// Decrypts `ciphertext` with the key named by `key_id` and returns the raw
    /// plaintext bytes.
    async fn decrypt(&self, key_id: &str, ciphertext: &[u8]) -> Result<Vec<u8>, GcpEnvError>;
}
