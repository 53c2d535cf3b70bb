// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait shared by the network backends.

/// Identity of a backend, used in log fields and error messages.
pub trait Backend: Send + Sync + 'static {
    /// Returns the human-readable name of this backend instance.
    fn name(&self) -> &str;
}
