// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the gcpenv configuration system.

use gcpenv_config::diagnostic::ConfigError;
use gcpenv_config::model::GcpEnvConfig;
use gcpenv_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
log_level = "debug"

[kms]
key_id = "projects/p/locations/global/keyRings/r/cryptoKeys/k"
endpoint = "http://127.0.0.1:9001/v1"

[secret_manager]
endpoint = "http://127.0.0.1:9002/v1"

[auth]
access_token = "ya29.test"
metadata_endpoint = "http://127.0.0.1:9003/computeMetadata/v1"

[http]
timeout_secs = 5
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.log_level, "debug");
    assert_eq!(
        config.kms.key_id(),
        Some("projects/p/locations/global/keyRings/r/cryptoKeys/k")
    );
    assert_eq!(config.kms.endpoint, "http://127.0.0.1:9001/v1");
    assert_eq!(config.secret_manager.endpoint, "http://127.0.0.1:9002/v1");
    assert_eq!(config.auth.access_token.as_deref(), Some("ya29.test"));
    assert_eq!(
        config.auth.metadata_endpoint,
        "http://127.0.0.1:9003/computeMetadata/v1"
    );
    assert_eq!(config.http.timeout_secs, 5);
}

/// Missing optional sections use defaults without error.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.log_level, "info");
    assert!(config.kms.key_id().is_none());
    assert_eq!(config.kms.endpoint, "https://cloudkms.googleapis.com/v1");
    assert_eq!(
        config.secret_manager.endpoint,
        "https://secretmanager.googleapis.com/v1"
    );
    assert_eq!(config.http.timeout_secs, 30);
}

#[test]
fn unknown_field_in_kms_produces_error() {
    let toml = r#"
[kms]
key_di = "k"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("key_di"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

#[test]
fn unknown_key_diagnostic_suggests_correction() {
    let toml = r#"
[kms]
key_di = "k"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "key_di");
            assert_eq!(suggestion.as_deref(), Some("key_id"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn wrong_type_produces_invalid_type_diagnostic() {
    let toml = r#"
[http]
timeout_secs = "soon"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("timeout_secs"))),
        "got: {errors:?}"
    );
}

#[test]
fn validation_runs_after_successful_parse() {
    let toml = r#"
[http]
timeout_secs = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("zero timeout is invalid");
    match &errors[0] {
        ConfigError::InvalidValue { key, .. } => assert_eq!(key, "http.timeout_secs"),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

/// Env overrides are merged on top of files using dotted keys.
#[test]
fn dotted_override_sets_kms_key_id() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: GcpEnvConfig = Figment::new()
        .merge(Serialized::defaults(GcpEnvConfig::default()))
        .merge(Toml::string("[kms]\nkey_id = \"from-toml\"\n"))
        .merge(("kms.key_id", "from-env"))
        .extract()
        .expect("should merge override");

    assert_eq!(config.kms.key_id(), Some("from-env"));
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: GcpEnvConfig = Figment::new()
        .merge(Serialized::defaults(GcpEnvConfig::default()))
        .merge(Toml::file("/nonexistent/path/gcpenv.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.log_level, "info");
}

/// An explicit config path replaces `./gcpenv.toml`.
#[test]
fn explicit_path_replaces_local_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("gcpenv.toml", "log_level = \"warn\"")?;
        jail.create_file("ci.toml", "log_level = \"debug\"")?;

        let config = load_and_validate_path(&jail.directory().join("ci.toml"))
            .expect("explicit config should load");
        assert_eq!(config.log_level, "debug");
        Ok(())
    });
}

/// A missing explicit path is an error, not an empty config.
#[test]
fn missing_explicit_path_is_reported() {
    let errors = load_and_validate_path(std::path::Path::new("/nonexistent/gcpenv/ci.toml"))
        .expect_err("missing explicit file should fail");
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], ConfigError::MissingFile { path } if path.ends_with("ci.toml")));
}

/// Values from an explicit file still go through validation.
#[test]
fn explicit_path_is_validated() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("ci.toml", "[http]\ntimeout_secs = 0\n")?;

        let errors = load_and_validate_path(&jail.directory().join("ci.toml"))
            .expect_err("zero timeout should fail validation");
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ConfigError::InvalidValue { key, .. } if key.contains("timeout_secs")))
        );
        Ok(())
    });
}
