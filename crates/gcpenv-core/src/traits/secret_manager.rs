// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret-access capability backing `sm://` references.

use async_trait::async_trait;

use crate::error::GcpEnvError;
use crate::traits::backend::Backend;

/// Read access to versioned secrets in a managed secret store.
#[async_trait]
pub trait SecretManagerApi: Backend {
    /// Fetches the payload of a secret version.
    ///
    /// `name` is the full resource path including the version segment, e.g.
    /// `projects/p/secrets/s/versions/latest`.
    async fn access_secret_version(&self, name: &str) -> Result<Vec<u8>, GcpEnvError>;
}
