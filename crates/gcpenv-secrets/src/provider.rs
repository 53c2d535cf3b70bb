// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single entry point for resolving one or many secret references.

use std::sync::Arc;

use gcpenv_config::GcpEnvConfig;
use gcpenv_core::{GcpEnvError, KeyManagementApi, SecretManagerApi, SecretReference};
use tracing::{debug, warn};

use crate::kms::DecryptionResolver;
use crate::reference::parse_reference;
use crate::secret_manager::ManagedSecretResolver;

/// Outcome of a batch resolution.
///
/// `values` is always the same length as the input. Failed slots hold an
/// empty string and every failure is named in `error`.
#[derive(Debug)]
pub struct BatchResolution {
    pub values: Vec<String>,
    pub error: Option<GcpEnvError>,
}

impl BatchResolution {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Discard partial results if anything failed.
    pub fn into_result(self) -> Result<Vec<String>, GcpEnvError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.values),
        }
    }
}

/// Dispatches references to the KMS or Secret Manager resolver.
#[derive(Debug)]
pub struct SecretProvider {
    kms: DecryptionResolver,
    secret_manager: ManagedSecretResolver,
}

impl SecretProvider {
    pub fn new(
        kms: Arc<dyn KeyManagementApi>,
        secret_manager: Arc<dyn SecretManagerApi>,
        key_id: Option<String>,
    ) -> Self {
        Self {
            kms: DecryptionResolver::new(kms, key_id),
            secret_manager: ManagedSecretResolver::new(secret_manager),
        }
    }

    /// Build a provider whose key id comes from `config.kms.key_id`.
    pub fn from_config(
        config: &GcpEnvConfig,
        kms: Arc<dyn KeyManagementApi>,
        secret_manager: Arc<dyn SecretManagerApi>,
    ) -> Self {
        Self::new(kms, secret_manager, config.kms.key_id().map(str::to_string))
    }

    /// Resolve a single `kms://` or `sm://` reference to its plaintext.
    pub async fn resolve_secret(&self, value: &str) -> Result<String, GcpEnvError> {
        let reference = parse_reference(value);
        debug!(kind = %reference.kind(), "resolving secret reference");

        let result = match &reference {
            SecretReference::Ciphertext { blob } => self.kms.decrypt(blob).await,
            SecretReference::ManagedSecret { resource_path } => {
                self.secret_manager.access(resource_path).await
            }
            SecretReference::Plain { .. } => {
                return Err(GcpEnvError::UnsupportedReference {
                    reference: value.to_string(),
                });
            }
        };

        result.map_err(|source| GcpEnvError::Resolve {
            reference: value.to_string(),
            source: Box::new(source),
        })
    }

    /// Resolve every value in order, passing plain values through.
    ///
    /// One failure does not stop the rest.
    pub async fn resolve_secrets<S: AsRef<str>>(&self, values: &[S]) -> BatchResolution {
        let mut resolved = Vec::with_capacity(values.len());
        let mut failed = Vec::new();
        let mut last_error = None;

        for value in values {
            let value = value.as_ref();
            if parse_reference(value).is_plain() {
                resolved.push(value.to_string());
                continue;
            }

            match self.resolve_secret(value).await {
                Ok(plaintext) => resolved.push(plaintext),
                Err(err) => {
                    warn!(error = %err.root_cause(), "secret reference failed to resolve");
                    resolved.push(String::new());
                    failed.push(value.to_string());
                    last_error = Some(err);
                }
            }
        }

        let error = last_error.map(|source| GcpEnvError::Batch {
            references: failed,
            source: Box::new(source),
        });

        BatchResolution {
            values: resolved,
            error,
        }
    }
}
