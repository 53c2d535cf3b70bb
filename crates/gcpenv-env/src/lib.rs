// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment population for gcpenv.
//!
//! [`EnvironmentPopulator`] scans an [`EnvironmentStore`](gcpenv_core::EnvironmentStore)
//! for `kms://` and `sm://` values, resolves all of them, and only then writes
//! the plaintexts back. A single failure leaves the store untouched.

pub mod populator;
pub mod process;

pub use populator::{EnvironmentPopulator, PopulatePlan};
pub use process::ProcessEnvironment;
