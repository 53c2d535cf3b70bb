// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for gcpenv.
//!
//! This crate provides the error type, the data model of a resolution pass
//! (environment entries and classified secret references), and the capability
//! traits implemented by the Google Cloud clients, the process environment and
//! the test fakes.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::GcpEnvError;
pub use types::{
    EnvironmentEntry, KMS_PREFIX, LATEST_VERSION, ReferenceKind, SM_PREFIX, SecretReference,
    VERSIONS_SEGMENT,
};

pub use traits::{Backend, EnvironmentStore, KeyManagementApi, SecretManagerApi};
