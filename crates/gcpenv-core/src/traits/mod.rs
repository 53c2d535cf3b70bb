// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits for the collaborators the resolver depends on.
//!
//! Network backends extend the [`Backend`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility. Every trait has a
//! real implementation (`gcpenv-gcp`, `gcpenv-env`) and a deterministic fake
//! (`gcpenv-test-utils`).

pub mod backend;
pub mod environment;
pub mod kms;
pub mod secret_manager;

pub use backend::Backend;
pub use environment::EnvironmentStore;
pub use kms::KeyManagementApi;
pub use secret_manager::SecretManagerApi;
