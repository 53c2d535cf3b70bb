// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for populating an environment table.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use gcpenv_core::GcpEnvError;
use gcpenv_env::{EnvironmentPopulator, ProcessEnvironment};
use gcpenv_secrets::SecretProvider;
use gcpenv_test_utils::{FakeKeyManagement, FakeSecretManager, MemoryEnvironment};
use serial_test::serial;

const KEY: &str = "projects/p/locations/global/keyRings/r/cryptoKeys/k";

fn provider(kms: FakeKeyManagement, sm: FakeSecretManager) -> SecretProvider {
    SecretProvider::new(Arc::new(kms), Arc::new(sm), Some(KEY.to_string()))
}

#[tokio::test]
async fn references_are_replaced_and_plain_values_untouched() {
    let kms = FakeKeyManagement::new().with_plaintext(KEY, b"cipher", b"api-key\n");
    let sm = FakeSecretManager::new().with_secret("projects/p/secrets/db/versions/3", "pg-pass");
    let env = MemoryEnvironment::from_environ(&[
        format!("API_KEY=kms://{}", STANDARD.encode(b"cipher")),
        "DB_PASSWORD=sm://projects/p/secrets/db/versions/3".to_string(),
        "HOME=/home/app".to_string(),
        "URL=https://example.com/?a=b".to_string(),
    ])
    .unwrap();

    let mut populator = EnvironmentPopulator::new(provider(kms, sm), env);
    let written = populator.populate().await.unwrap();
    assert_eq!(written, 2);

    let env = populator.into_store();
    assert_eq!(env.get("API_KEY"), Some("api-key"));
    assert_eq!(env.get("DB_PASSWORD"), Some("pg-pass"));
    assert_eq!(env.get("HOME"), Some("/home/app"));
    assert_eq!(env.get("URL"), Some("https://example.com/?a=b"));

    let mut touched: Vec<&str> = env.writes().iter().map(|(n, _)| n.as_str()).collect();
    touched.sort_unstable();
    assert_eq!(touched, vec!["API_KEY", "DB_PASSWORD"]);
}

#[tokio::test]
async fn malformed_kms_value_aborts_without_writes() {
    let sm = FakeSecretManager::new().with_secret("projects/p/secrets/ok/versions/latest", "fine");
    let env = MemoryEnvironment::from_environ(&[
        "A_GOOD=sm://projects/p/secrets/ok",
        "B_BAD=kms://this is not base64",
    ])
    .unwrap();

    let mut populator = EnvironmentPopulator::new(provider(FakeKeyManagement::new(), sm), env);
    let err = populator.populate().await.unwrap_err();

    match &err {
        GcpEnvError::Populate { name, .. } => assert_eq!(name, "B_BAD"),
        other => panic!("expected populate error, got {other:?}"),
    }
    assert!(matches!(err.root_cause(), GcpEnvError::Decode { .. }));

    let env = populator.into_store();
    assert!(env.writes().is_empty());
    assert_eq!(env.get("A_GOOD"), Some("sm://projects/p/secrets/ok"));
}

#[tokio::test]
async fn first_failure_stops_the_scan() {
    let sm = FakeSecretManager::new()
        .failing_for("projects/p/secrets/a/versions/latest", "denied")
        .with_secret("projects/p/secrets/b/versions/latest", "b");
    let sm = Arc::new(sm);
    let provider = SecretProvider::new(
        Arc::new(FakeKeyManagement::new()),
        sm.clone(),
        Some(KEY.to_string()),
    );
    let env = MemoryEnvironment::from_environ(&[
        "A=sm://projects/p/secrets/a",
        "B=sm://projects/p/secrets/b",
    ])
    .unwrap();

    let mut populator = EnvironmentPopulator::new(provider, env);
    assert!(populator.populate().await.is_err());
    assert_eq!(
        sm.accessed().await,
        vec!["projects/p/secrets/a/versions/latest".to_string()]
    );
}

#[tokio::test]
async fn environment_without_references_is_a_no_op() {
    let env = MemoryEnvironment::from_environ(&["PATH=/usr/bin", "EMPTY="]).unwrap();
    let mut populator =
        EnvironmentPopulator::new(provider(FakeKeyManagement::new(), FakeSecretManager::new()), env);

    assert_eq!(populator.populate().await.unwrap(), 0);
    assert!(populator.store().writes().is_empty());
}

#[tokio::test]
#[serial]
async fn process_environment_is_populated() {
    const VAR: &str = "GCPENV_POPULATE_TEST_SECRET";
    unsafe { std::env::set_var(VAR, "sm://projects/p/secrets/proc") };

    let sm = FakeSecretManager::new().with_secret("projects/p/secrets/proc/versions/latest", "resolved");
    let mut populator = EnvironmentPopulator::new(
        provider(FakeKeyManagement::new(), sm),
        ProcessEnvironment::new(),
    );

    let plan = populator.scan().await.unwrap();
    assert!(plan.names().contains(&VAR));
    populator.apply(plan).unwrap();
    assert_eq!(std::env::var(VAR).unwrap(), "resolved");

    unsafe { std::env::remove_var(VAR) };
}
