// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cloud KMS `cryptoKeys.decrypt` over REST.

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use gcpenv_core::{Backend, GcpEnvError, KeyManagementApi};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::TokenProvider;
use crate::http::{check_status, transport_error};

const SERVICE: &str = "Cloud KMS";

#[derive(Serialize)]
struct DecryptRequest {
    ciphertext: String,
}

#[derive(Deserialize)]
struct DecryptResponse {
    #[serde(default)]
    plaintext: String,
}

/// Cloud KMS client.
#[derive(Debug, Clone)]
pub struct CloudKmsClient {
    http: reqwest::Client,
    endpoint: String,
    token: Arc<TokenProvider>,
}

impl CloudKmsClient {
    pub fn new(http: reqwest::Client, endpoint: &str, token: Arc<TokenProvider>) -> Self {
        Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token,
        }
    }
}

impl Backend for CloudKmsClient {
    fn name(&self) -> &str {
        "cloud-kms"
    }
}

#[async_trait]
impl KeyManagementApi for CloudKmsClient {
    async fn decrypt(&self, key_id: &str, ciphertext: &[u8]) -> Result<Vec<u8>, GcpEnvError> {
        let url = format!("{}/{key_id}:decrypt", self.endpoint);
        debug!(key_id, bytes = ciphertext.len(), "decrypting with Cloud KMS");

        let token = self.token.token().await?;
        let response = self
            .http
            .post(&url)
            .bearer_auth(token.expose_secret())
            .json(&DecryptRequest {
                ciphertext: STANDARD.encode(ciphertext),
            })
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let response = check_status(SERVICE, response).await?;
        let body: DecryptResponse = response
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        STANDARD
            .decode(body.plaintext.as_bytes())
            .map_err(|e| GcpEnvError::Backend {
                message: format!("{SERVICE} returned malformed plaintext: {e}"),
                source: Some(Box::new(e)),
            })
    }
}
