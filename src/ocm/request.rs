//! Request composition for the limited support reasons resource

use thiserror::Error;

use crate::template::{SupportReason, TemplateError};

/// Request composition error type
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("cannot build the post request: {0}")]
    Serialize(#[from] TemplateError),
}

const CLUSTERS_PREFIX: &str = "/api/clusters_mgmt/v1/clusters/";
const LIMITED_SUPPORT_SUFFIX: &str = "/limited_support_reasons";

/// A composed request: target path plus serialized body, ready for a
/// [`Connection`](super::Connection) to execute.
#[derive(Debug, Clone)]
pub struct SupportReasonRequest {
    pub path: String,
    pub body: Vec<u8>,
}

/// Compose the post request for a cluster's limited support reasons.
///
/// The cluster id must already have passed
/// [`validate_cluster_key`](super::validate_cluster_key); the path is plain
/// concatenation.
pub fn compose(cluster_id: &str, reason: &SupportReason) -> Result<SupportReasonRequest, RequestError> {
    Ok(SupportReasonRequest {
        path: format!("{CLUSTERS_PREFIX}{cluster_id}{LIMITED_SUPPORT_SUFFIX}"),
        body: reason.serialize()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_path_embeds_cluster_id() {
        let reason = SupportReason::parse(br#"{"summary":"s"}"#).unwrap();
        let request = compose("1a2b3c", &reason).unwrap();

        assert_eq!(
            request.path,
            "/api/clusters_mgmt/v1/clusters/1a2b3c/limited_support_reasons"
        );
    }

    #[test]
    fn test_compose_body_is_serialized_reason() {
        let reason = SupportReason::parse(br#"{"summary":"s","details":"d"}"#).unwrap();
        let request = compose("1a2b3c", &reason).unwrap();

        assert_eq!(request.body, reason.serialize().unwrap());
    }
}
