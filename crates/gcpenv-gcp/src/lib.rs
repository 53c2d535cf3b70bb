// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Cloud REST backends for gcpenv.
//!
//! [`CloudKmsClient`] and [`SecretManagerClient`] implement the capability
//! traits from `gcpenv-core` on top of one shared `reqwest` client and a
//! lazily fetched OAuth token.

pub mod auth;
pub mod http;
pub mod kms;
pub mod secret_manager;

use std::sync::Arc;

use gcpenv_config::GcpEnvConfig;
use gcpenv_core::GcpEnvError;

pub use auth::{TokenProvider, TokenSource, path_or_contents};
pub use http::build_http_client;
pub use kms::CloudKmsClient;
pub use secret_manager::SecretManagerClient;

/// Both backends, sharing one HTTP client and one token.
#[derive(Debug, Clone)]
pub struct GcpClients {
    pub kms: Arc<CloudKmsClient>,
    pub secret_manager: Arc<SecretManagerClient>,
}

impl GcpClients {
    /// Build the clients. No network traffic happens until the first call.
    pub fn from_config(config: &GcpEnvConfig) -> Result<Self, GcpEnvError> {
        let http = build_http_client(config)?;
        let token = Arc::new(TokenProvider::new(TokenSource::from_config(
            config,
            http.clone(),
        )?));

        Ok(Self {
            kms: Arc::new(CloudKmsClient::new(
                http.clone(),
                &config.kms.endpoint,
                token.clone(),
            )),
            secret_manager: Arc::new(SecretManagerClient::new(
                http,
                &config.secret_manager.endpoint,
                token,
            )),
        })
    }
}
