// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the resolver, the populator and the backends.

use std::str::FromStr;

use strum::Display;

use crate::error::GcpEnvError;

/// Prefix of a Cloud KMS ciphertext reference: `kms://{base64}`.
pub const KMS_PREFIX: &str = "kms://";

/// Prefix of a Secret Manager reference:
/// `sm://projects/{PROJECT}/secrets/{NAME}[/versions/{VERSION|latest}]`.
pub const SM_PREFIX: &str = "sm://";

/// Path segment that marks an explicit secret version.
pub const VERSIONS_SEGMENT: &str = "/versions/";

/// Version used when a Secret Manager reference does not name one.
pub const LATEST_VERSION: &str = "latest";

/// One `NAME=VALUE` entry of an environment table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentEntry {
    pub name: String,
    pub raw_value: String,
}

impl EnvironmentEntry {
    pub fn new(name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: raw_value.into(),
        }
    }
}

impl FromStr for EnvironmentEntry {
    type Err = GcpEnvError;

    /// Splits on the first `=`; everything after it belongs to the value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, raw_value) = s
            .split_once('=')
            .ok_or_else(|| GcpEnvError::Environment(format!("malformed environment entry `{s}`")))?;
        Ok(Self::new(name, raw_value))
    }
}

/// Which backend a value is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ReferenceKind {
    Kms,
    Sm,
    Plain,
}

/// A classified environment value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretReference {
    /// `kms://` payload: base64 ciphertext, not yet decoded.
    Ciphertext { blob: String },
    /// `sm://` payload, always carrying a `/versions/` segment.
    ManagedSecret { resource_path: String },
    /// Anything else, passed through untouched.
    Plain { value: String },
}

impl SecretReference {
    pub fn kind(&self) -> ReferenceKind {
        match self {
            SecretReference::Ciphertext { .. } => ReferenceKind::Kms,
            SecretReference::ManagedSecret { .. } => ReferenceKind::Sm,
            SecretReference::Plain { .. } => ReferenceKind::Plain,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, SecretReference::Plain { .. })
    }
}
