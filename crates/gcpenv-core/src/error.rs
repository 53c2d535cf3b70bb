// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for gcpenv.

use thiserror::Error;

/// The primary error type used across all gcpenv crates.
///
/// The first four variants are the resolution failure kinds. The remaining
/// wrapper variants add context (the reference, the batch, the variable) on
/// top of one of those kinds; [`GcpEnvError::root_cause`] unwraps them.
#[derive(Debug, Error)]
pub enum GcpEnvError {
    /// Malformed base64 ciphertext in a `kms://` reference.
    #[error("failed to decode base64 cipher: {source}")]
    Decode {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration errors (missing decryption key id, bad endpoints, unreadable token file).
    #[error("configuration error: {0}")]
    Config(String),

    /// The external decrypt or secret-access call failed.
    #[error("backend error: {message}")]
    Backend {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A value carries neither `kms://` nor `sm://` where a reference is required.
    #[error("failed to fetch unsupported secret: '{reference}'")]
    UnsupportedReference { reference: String },

    /// A single reference failed to resolve.
    #[error("failed to resolve secret '{reference}': {source}")]
    Resolve {
        reference: String,
        source: Box<GcpEnvError>,
    },

    /// One or more entries of a batch failed. `source` is the last failure seen.
    #[error("failed to resolve secrets: '{}': {source}", references.join(","))]
    Batch {
        references: Vec<String>,
        source: Box<GcpEnvError>,
    },

    /// An environment variable could not be populated.
    #[error("failed to populate environment variable '{name}': {source}")]
    Populate {
        name: String,
        source: Box<GcpEnvError>,
    },

    /// Reading or writing the environment table failed.
    #[error("environment error: {0}")]
    Environment(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GcpEnvError {
    /// Builds a [`GcpEnvError::Backend`] without an underlying source.
    pub fn backend(message: impl Into<String>) -> Self {
        GcpEnvError::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Walks through `Resolve`, `Batch` and `Populate` wrappers to the error
    /// that actually caused the failure.
    pub fn root_cause(&self) -> &GcpEnvError {
        match self {
            GcpEnvError::Resolve { source, .. }
            | GcpEnvError::Batch { source, .. }
            | GcpEnvError::Populate { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Wraps any non-backend error as a [`GcpEnvError::Backend`] so that every
    /// failure surfaced by a backend call has the backend kind.
    pub fn into_backend(self, message: &str) -> Self {
        match self {
            backend @ GcpEnvError::Backend { .. } => backend,
            other => GcpEnvError::Backend {
                message: message.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}
