// SPDX-FileCopyrightText: 2026 gcpenv Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classification of raw environment values into secret references.
//!
//! Purely prefix based and infallible: anything that is not `kms://` or
//! `sm://` is a plain value.

use gcpenv_core::{
    KMS_PREFIX, LATEST_VERSION, SM_PREFIX, SecretReference, VERSIONS_SEGMENT,
};

/// Classify `value` by its prefix.
pub fn parse_reference(value: &str) -> SecretReference {
    if let Some(blob) = value.strip_prefix(KMS_PREFIX) {
        SecretReference::Ciphertext {
            blob: blob.to_string(),
        }
    } else if let Some(path) = value.strip_prefix(SM_PREFIX) {
        SecretReference::ManagedSecret {
            resource_path: normalize_secret_path(path),
        }
    } else {
        SecretReference::Plain {
            value: value.to_string(),
        }
    }
}

/// Whether `value` starts with one of the recognized reference prefixes.
pub fn has_reference_prefix(value: &str) -> bool {
    value.starts_with(KMS_PREFIX) || value.starts_with(SM_PREFIX)
}

/// Append `/versions/latest` unless the path already names a version.
pub fn normalize_secret_path(path: &str) -> String {
    if path.contains(VERSIONS_SEGMENT) {
        path.to_string()
    } else {
        format!("{path}{VERSIONS_SEGMENT}{LATEST_VERSION}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn kms_payload_is_everything_after_prefix() {
        assert_eq!(
            parse_reference("kms://CiQAbc+/=="),
            SecretReference::Ciphertext {
                blob: "CiQAbc+/==".to_string()
            }
        );
    }

    #[test]
    fn sm_without_version_defaults_to_latest() {
        assert_eq!(
            parse_reference("sm://projects/p/secrets/s"),
            SecretReference::ManagedSecret {
                resource_path: "projects/p/secrets/s/versions/latest".to_string()
            }
        );
    }

    #[test]
    fn sm_with_version_is_kept() {
        assert_eq!(
            parse_reference("sm://projects/p/secrets/s/versions/5"),
            SecretReference::ManagedSecret {
                resource_path: "projects/p/secrets/s/versions/5".to_string()
            }
        );
    }

    #[test]
    fn prefixes_are_case_sensitive() {
        assert!(parse_reference("KMS://abc").is_plain());
        assert!(parse_reference("Sm://projects/p/secrets/s").is_plain());
        assert!(!has_reference_prefix("SM://x"));
    }

    #[test]
    fn bare_prefixes_still_classify() {
        assert_eq!(
            parse_reference("kms://"),
            SecretReference::Ciphertext { blob: String::new() }
        );
        assert_eq!(
            parse_reference("sm://"),
            SecretReference::ManagedSecret {
                resource_path: "/versions/latest".to_string()
            }
        );
    }

    #[test]
    fn unsupported_scheme_is_plain() {
        assert_eq!(
            parse_reference("unsupported://x"),
            SecretReference::Plain {
                value: "unsupported://x".to_string()
            }
        );
        assert!(!has_reference_prefix("unsupported://x"));
    }

    proptest! {
        #[test]
        fn unprefixed_values_are_plain_and_unchanged(value in ".*") {
            prop_assume!(!has_reference_prefix(&value));
            prop_assert_eq!(parse_reference(&value), SecretReference::Plain { value: value.clone() });
        }

        #[test]
        fn sm_paths_without_versions_get_latest(path in "[a-z0-9/_-]{0,40}") {
            prop_assume!(!path.contains(VERSIONS_SEGMENT));
            let reference = parse_reference(&format!("sm://{path}"));
            prop_assert_eq!(
                reference,
                SecretReference::ManagedSecret { resource_path: format!("{path}/versions/latest") }
            );
        }

        #[test]
        fn sm_paths_with_versions_are_unchanged(
            path in "projects/[a-z0-9-]{1,12}/secrets/[a-z0-9_-]{1,12}",
            version in "(latest|[1-9][0-9]{0,3})",
        ) {
            let full = format!("{path}/versions/{version}");
            let reference = parse_reference(&format!("sm://{full}"));
            prop_assert_eq!(reference, SecretReference::ManagedSecret { resource_path: full });
        }
    }
}
