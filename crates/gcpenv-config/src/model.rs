// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for gcpenv.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level gcpenv configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GcpEnvConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Cloud KMS settings for `kms://` references.
    #[serde(default)]
    pub kms: KmsConfig,

    /// Secret Manager settings for `sm://` references.
    #[serde(default)]
    pub secret_manager: SecretManagerConfig,

    /// Access-token sourcing for the Google Cloud APIs.
    #[serde(default)]
    pub auth: AuthConfig,

    /// HTTP client settings shared by both backends.
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for GcpEnvConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            kms: KmsConfig::default(),
            secret_manager: SecretManagerConfig::default(),
            auth: AuthConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Cloud KMS configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KmsConfig {
    /// Full CryptoKey resource name used to decrypt `kms://` values.
    /// `None` is only an error once a `kms://` reference is resolved.
    #[serde(default)]
    pub key_id: Option<String>,

    /// Base URL of the Cloud KMS REST API.
    #[serde(default = "default_kms_endpoint")]
    pub endpoint: String,
}

impl Default for KmsConfig {
    fn default() -> Self {
        Self {
            key_id: None,
            endpoint: default_kms_endpoint(),
        }
    }
}

impl KmsConfig {
    /// The configured key id, treating an empty string as absent.
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

fn default_kms_endpoint() -> String {
    "https://cloudkms.googleapis.com/v1".to_string()
}

/// Secret Manager configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SecretManagerConfig {
    /// Base URL of the Secret Manager REST API.
    #[serde(default = "default_secret_manager_endpoint")]
    pub endpoint: String,
}

impl Default for SecretManagerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_secret_manager_endpoint(),
        }
    }
}

fn default_secret_manager_endpoint() -> String {
    "https://secretmanager.googleapis.com/v1".to_string()
}

/// Access-token configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// OAuth access token, or a path to a file containing one.
    /// `None` falls back to the metadata server.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Base URL of the GCE metadata server.
    #[serde(default = "default_metadata_endpoint")]
    pub metadata_endpoint: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            metadata_endpoint: default_metadata_endpoint(),
        }
    }
}

fn default_metadata_endpoint() -> String {
    "http://metadata.google.internal/computeMetadata/v1".to_string()
}

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
