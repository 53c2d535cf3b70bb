// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OAuth access tokens for the Google Cloud REST APIs.
//!
//! A token is either supplied up front (`GOOGLE_OAUTH_ACCESS_TOKEN` or
//! `auth.access_token`, as a literal or a path to a file holding it) or
//! fetched from the instance metadata server. Fetching is lazy so that an
//! environment without references never needs credentials.

use std::path::{Path, PathBuf};

use gcpenv_config::GcpEnvConfig;
use gcpenv_core::GcpEnvError;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::http::{check_status, transport_error};

const METADATA_TOKEN_PATH: &str = "instance/service-accounts/default/token";

/// Where the access token comes from.
#[derive(Debug)]
pub enum TokenSource {
    Static(SecretString),
    Metadata {
        client: reqwest::Client,
        endpoint: String,
    },
}

#[derive(Deserialize)]
struct MetadataToken {
    access_token: String,
}

impl TokenSource {
    /// Pick the static token when one is configured, the metadata server otherwise.
    pub fn from_config(config: &GcpEnvConfig, client: reqwest::Client) -> Result<Self, GcpEnvError> {
        match config
            .auth
            .access_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
        {
            Some(value) => Ok(Self::Static(SecretString::from(path_or_contents(value)?))),
            None => Ok(Self::Metadata {
                client,
                endpoint: config.auth.metadata_endpoint.clone(),
            }),
        }
    }

    async fn fetch(&self) -> Result<SecretString, GcpEnvError> {
        match self {
            Self::Static(token) => Ok(SecretString::from(token.expose_secret().to_string())),
            Self::Metadata { client, endpoint } => {
                let url = format!("{}/{METADATA_TOKEN_PATH}", endpoint.trim_end_matches('/'));
                debug!(url = %url, "fetching access token from metadata server");

                let response = client
                    .get(&url)
                    .header("Metadata-Flavor", "Google")
                    .send()
                    .await
                    .map_err(|e| transport_error("metadata server", e))?;
                let response = check_status("metadata server", response).await?;
                let token: MetadataToken = response
                    .json()
                    .await
                    .map_err(|e| transport_error("metadata server", e))?;
                Ok(SecretString::from(token.access_token))
            }
        }
    }
}

/// A token source that fetches at most once.
#[derive(Debug)]
pub struct TokenProvider {
    source: TokenSource,
    cached: OnceCell<SecretString>,
}

impl TokenProvider {
    pub fn new(source: TokenSource) -> Self {
        Self {
            source,
            cached: OnceCell::new(),
        }
    }

    pub async fn token(&self) -> Result<&SecretString, GcpEnvError> {
        self.cached.get_or_try_init(|| self.source.fetch()).await
    }
}

/// Read `value` as a file when it names one, otherwise return it as is.
///
/// A leading `~/` is expanded to the home directory. File contents are trimmed.
pub fn path_or_contents(value: &str) -> Result<String, GcpEnvError> {
    let path = expand_home(value);
    if !path.is_file() {
        return Ok(value.to_string());
    }

    std::fs::read_to_string(&path)
        .map(|contents| contents.trim().to_string())
        .map_err(|e| {
            GcpEnvError::Config(format!("failed to read token file {}: {e}", path.display()))
        })
}

fn expand_home(value: &str) -> PathBuf {
    match (value.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => Path::new(value).to_path_buf(),
    }
}
