// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! A missing `kms.key_id` is deliberately not checked here: it only matters
//! once a `kms://` value is resolved.

use crate::diagnostic::ConfigError;
use crate::model::GcpEnvConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or every collected error
/// (does not fail fast).
pub fn validate_config(config: &GcpEnvConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.log_level.trim().to_ascii_lowercase().as_str()) {
        errors.push(ConfigError::InvalidValue {
            key: "log_level".to_string(),
            message: format!(
                "`{}` is not one of {}",
                config.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    for (key, value) in [
        ("kms.endpoint", &config.kms.endpoint),
        ("secret_manager.endpoint", &config.secret_manager.endpoint),
        ("auth.metadata_endpoint", &config.auth.metadata_endpoint),
    ] {
        if let Err(message) = validate_endpoint(value) {
            errors.push(ConfigError::InvalidValue {
                key: key.to_string(),
                message,
            });
        }
    }

    if config.http.timeout_secs == 0 {
        errors.push(ConfigError::InvalidValue {
            key: "http.timeout_secs".to_string(),
            message: "must be greater than 0".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_endpoint(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("endpoint must not be empty".to_string());
    }
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .ok_or_else(|| format!("`{value}` must start with http:// or https://"))?;
    if rest.is_empty() || rest.starts_with('/') {
        return Err(format!("`{value}` has no host"));
    }
    Ok(())
}
