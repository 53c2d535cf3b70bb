// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret Manager `secrets.versions.access` over REST.

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use gcpenv_core::{Backend, GcpEnvError, SecretManagerApi};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::debug;

use crate::auth::TokenProvider;
use crate::http::{check_status, transport_error};

const SERVICE: &str = "Secret Manager";

#[derive(Deserialize)]
struct AccessSecretVersionResponse {
    payload: SecretPayload,
}

#[derive(Deserialize)]
struct SecretPayload {
    #[serde(default)]
    data: String,
}

/// Secret Manager client.
#[derive(Debug, Clone)]
pub struct SecretManagerClient {
    http: reqwest::Client,
    endpoint: String,
    token: Arc<TokenProvider>,
}

impl SecretManagerClient {
    pub fn new(http: reqwest::Client, endpoint: &str, token: Arc<TokenProvider>) -> Self {
        Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token,
        }
    }
}

impl Backend for SecretManagerClient {
    fn name(&self) -> &str {
        "secret-manager"
    }
}

#[async_trait]
impl SecretManagerApi for SecretManagerClient {
    async fn access_secret_version(&self, name: &str) -> Result<Vec<u8>, GcpEnvError> {
        let url = format!("{}/{name}:access", self.endpoint);
        debug!(name, "accessing secret version");

        let token = self.token.token().await?;
        let response = self
            .http
            .get(&url)
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let response = check_status(SERVICE, response).await?;
        let body: AccessSecretVersionResponse = response
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        STANDARD
            .decode(body.payload.data.as_bytes())
            .map_err(|e| GcpEnvError::Backend {
                message: format!("{SERVICE} returned a malformed payload: {e}"),
                source: Some(Box::new(e)),
            })
    }
}
