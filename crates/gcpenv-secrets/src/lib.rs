// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret reference resolution for gcpenv.
//!
//! Values of the form `kms://<base64 ciphertext>` are decrypted with Cloud KMS
//! and values of the form `sm://<resource path>` are fetched from Secret
//! Manager. [`SecretProvider`] is the facade used by the environment
//! populator and the CLI.

pub mod kms;
pub mod provider;
pub mod reference;
pub mod secret_manager;

pub use kms::DecryptionResolver;
pub use provider::{BatchResolution, SecretProvider};
pub use reference::{has_reference_prefix, normalize_secret_path, parse_reference};
pub use secret_manager::ManagedSecretResolver;
