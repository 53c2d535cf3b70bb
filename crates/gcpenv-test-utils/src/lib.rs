// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for gcpenv.
//!
//! Provides in-memory backends and an in-memory environment table for fast,
//! deterministic tests without Google Cloud credentials.
//!
//! # Components
//!
//! - [`FakeKeyManagement`] - KMS stand-in with pre-registered ciphertexts
//! - [`FakeSecretManager`] - Secret Manager stand-in with pre-registered payloads
//! - [`MemoryEnvironment`] - Environment table that records every write

pub mod fake_kms;
pub mod fake_secret_manager;
pub mod memory_env;

pub use fake_kms::FakeKeyManagement;
pub use fake_secret_manager::FakeSecretManager;
pub use memory_env::MemoryEnvironment;
