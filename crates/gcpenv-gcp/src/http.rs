// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared HTTP plumbing for the REST clients.

use std::time::Duration;

use gcpenv_config::GcpEnvConfig;
use gcpenv_core::GcpEnvError;
use tracing::debug;

/// Build the client shared by every backend.
pub fn build_http_client(config: &GcpEnvConfig) -> Result<reqwest::Client, GcpEnvError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .user_agent(concat!("gcpenv/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GcpEnvError::Backend {
            message: format!("failed to build HTTP client: {e}"),
            source: Some(Box::new(e)),
        })
}

pub(crate) fn transport_error(service: &str, e: reqwest::Error) -> GcpEnvError {
    GcpEnvError::Backend {
        message: format!("{service} request failed: {e}"),
        source: Some(Box::new(e)),
    }
}

/// Pass 2xx responses through; turn anything else into a backend error
/// carrying the status and body.
pub(crate) async fn check_status(
    service: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, GcpEnvError> {
    let status = response.status();
    debug!(service, status = %status, "response received");

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(GcpEnvError::backend(format!(
        "{service} returned {status}: {}",
        body.trim()
    )))
}
