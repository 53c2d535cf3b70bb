// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./gcpenv.toml` > `~/.config/gcpenv/gcpenv.toml` > `/etc/gcpenv/gcpenv.toml`
//! with environment variable overrides via `GCPENV_` prefix, plus the bare
//! `KMS_KEY_ID` and `GOOGLE_OAUTH_ACCESS_TOKEN` variables.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::GcpEnvConfig;

/// Environment variable holding the Cloud KMS key used for `kms://` values.
pub const KMS_KEY_ID_ENV_VAR: &str = "KMS_KEY_ID";

/// Environment variable holding an OAuth access token (or a path to one).
pub const ACCESS_TOKEN_ENV_VAR: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/gcpenv/gcpenv.toml` (system-wide)
/// 3. `~/.config/gcpenv/gcpenv.toml` (user XDG config)
/// 4. `./gcpenv.toml` (local directory)
/// 5. `GCPENV_*` environment variables
/// 6. `KMS_KEY_ID` / `GOOGLE_OAUTH_ACCESS_TOKEN`
pub fn load_config() -> Result<GcpEnvConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<GcpEnvConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(GcpEnvConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one file in place of the XDG hierarchy.
///
/// `GCPENV_*` and the bare variables still override the file. A missing file
/// is treated as empty; callers that require it check first.
pub fn load_config_from_path(path: &Path) -> Result<GcpEnvConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(GcpEnvConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .merge(legacy_env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(GcpEnvConfig::default()))
        .merge(Toml::file("/etc/gcpenv/gcpenv.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("gcpenv/gcpenv.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("gcpenv.toml"))
        .merge(env_provider())
        .merge(legacy_env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `GCPENV_KMS_KEY_ID` must map to `kms.key_id`, not `kms.key.id`.
fn env_provider() -> Env {
    Env::prefixed("GCPENV_").map(|key| {
        // Example: GCPENV_SECRET_MANAGER_ENDPOINT -> "secret_manager_endpoint"
        let key_str = key.as_str().to_ascii_lowercase();
        let mapped = if let Some(rest) = key_str.strip_prefix("secret_manager_") {
            format!("secret_manager.{rest}")
        } else {
            key_str
                .replacen("kms_", "kms.", 1)
                .replacen("auth_", "auth.", 1)
                .replacen("http_", "http.", 1)
        };
        mapped.into()
    })
}

/// The unprefixed variables operators already export for this tool.
fn legacy_env_provider() -> Env {
    Env::raw()
        .only(&[KMS_KEY_ID_ENV_VAR, ACCESS_TOKEN_ENV_VAR])
        .map(|key| match key.as_str().to_ascii_lowercase().as_str() {
            "kms_key_id" => "kms.key_id".into(),
            "google_oauth_access_token" => "auth.access_token".into(),
            other => other.to_string().into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcpenv_prefixed_vars_map_to_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("GCPENV_KMS_KEY_ID", "projects/p/locations/l/keyRings/r/cryptoKeys/k");
            jail.set_env("GCPENV_SECRET_MANAGER_ENDPOINT", "http://localhost:9000/v1");
            jail.set_env("GCPENV_HTTP_TIMEOUT_SECS", "5");
            jail.set_env("GCPENV_LOG_LEVEL", "debug");

            let config: GcpEnvConfig = Figment::new()
                .merge(Serialized::defaults(GcpEnvConfig::default()))
                .merge(env_provider())
                .extract()?;

            assert_eq!(
                config.kms.key_id.as_deref(),
                Some("projects/p/locations/l/keyRings/r/cryptoKeys/k")
            );
            assert_eq!(config.secret_manager.endpoint, "http://localhost:9000/v1");
            assert_eq!(config.http.timeout_secs, 5);
            assert_eq!(config.log_level, "debug");
            Ok(())
        });
    }

    #[test]
    fn legacy_vars_override_files() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "explicit.toml",
                r#"
                [kms]
                key_id = "from-file"
                "#,
            )?;
            jail.set_env(KMS_KEY_ID_ENV_VAR, "from-env");
            jail.set_env(ACCESS_TOKEN_ENV_VAR, "ya29.token");

            jail.create_file("gcpenv.toml", "log_level = \"warn\"")?;
            let config = load_config_from_path(Path::new("explicit.toml"))?;
            assert_eq!(config.kms.key_id.as_deref(), Some("from-env"));
            assert_eq!(config.auth.access_token.as_deref(), Some("ya29.token"));
            assert_eq!(config.log_level, "info");
            Ok(())
        });
    }
}
