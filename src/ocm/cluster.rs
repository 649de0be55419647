//! Cluster key validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Cluster key error type
#[derive(Debug, Error)]
pub enum ClusterKeyError {
    #[error("cluster key {0:?} is invalid, expected up to {MAX_CLUSTER_KEY_LEN} alphanumeric, '_' or '-' characters")]
    Invalid(String),
}

const MAX_CLUSTER_KEY_LEN: usize = 50;

static CLUSTER_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w|-)+$").expect("cluster key pattern"));

/// Check that a cluster key is safe to embed in a request path.
///
/// Keys are plain identifiers; anything with path or query metacharacters
/// is rejected before a request is ever composed.
pub fn validate_cluster_key(key: &str) -> Result<(), ClusterKeyError> {
    if key.is_empty() || key.len() > MAX_CLUSTER_KEY_LEN || !CLUSTER_KEY.is_match(key) {
        return Err(ClusterKeyError::Invalid(key.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_identifiers() {
        validate_cluster_key("1a2b3c4d5e6f7g8h").unwrap();
        validate_cluster_key("my-cluster_01").unwrap();
    }

    #[test]
    fn test_rejects_metacharacters() {
        for key in ["../etc", "a/b", "a b", "a%2f", "a.b", ""] {
            assert!(
                validate_cluster_key(key).is_err(),
                "expected {key:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_overlong_keys() {
        let key = "a".repeat(MAX_CLUSTER_KEY_LEN + 1);
        assert!(validate_cluster_key(&key).is_err());

        let key = "a".repeat(MAX_CLUSTER_KEY_LEN);
        assert!(validate_cluster_key(&key).is_ok());
    }
}
