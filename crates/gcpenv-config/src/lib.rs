// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for gcpenv.
//!
//! Provides TOML configuration parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, environment variable overrides, and miette
//! diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use gcpenv_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("KMS endpoint: {}", config.kms.endpoint);
//! ```

use std::path::Path;

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{
    ACCESS_TOKEN_ENV_VAR, KMS_KEY_ID_ENV_VAR, load_config, load_config_from_path,
    load_config_from_str,
};
pub use model::GcpEnvConfig;

/// Load configuration from the XDG hierarchy and validate it.
///
/// Returns either a valid `GcpEnvConfig` or a list of diagnostic errors.
pub fn load_and_validate() -> Result<GcpEnvConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let toml_sources = collect_toml_sources();
            Err(diagnostic::figment_to_config_errors(err, &toml_sources))
        }
    }
}

/// Load configuration from `path` instead of the XDG hierarchy and validate it.
///
/// Unlike the hierarchy files, an explicit path must exist.
pub fn load_and_validate_path(path: &Path) -> Result<GcpEnvConfig, Vec<ConfigError>> {
    if !path.is_file() {
        return Err(vec![ConfigError::MissingFile {
            path: path.display().to_string(),
        }]);
    }

    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let name = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
            let sources = std::fs::read_to_string(path)
                .map(|content| vec![(name.display().to_string(), content)])
                .unwrap_or_default();
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<GcpEnvConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Collect TOML source file contents for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut sources = Vec::new();

    if let Ok(content) = std::fs::read_to_string("gcpenv.toml") {
        let path = std::env::current_dir()
            .map(|d| d.join("gcpenv.toml").display().to_string())
            .unwrap_or_else(|_| "gcpenv.toml".to_string());
        sources.push((path, content));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("gcpenv/gcpenv.toml");
        if let Ok(content) = std::fs::read_to_string(&path) {
            sources.push((path.display().to_string(), content));
        }
    }

    let system_path = Path::new("/etc/gcpenv/gcpenv.toml");
    if let Ok(content) = std::fs::read_to_string(system_path) {
        sources.push((system_path.display().to_string(), content));
    }

    sources
}
