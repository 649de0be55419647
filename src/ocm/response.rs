//! Classification of management API responses.
//!
//! The API answers a post with one of two mutually exclusive body shapes,
//! distinguished by status code: 201 carries the created reason, every
//! other status carries the error schema.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Response classification error type
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("server returned an invalid created-reason body: {0}")]
    InvalidSuccessBody(#[source] serde_json::Error),

    #[error("server returned an invalid error body: {0}")]
    InvalidErrorBody(#[source] serde_json::Error),
}

/// Success schema: the reason record the server created.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedReason {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Error schema: the server's explanation for a rejected post.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub operation_id: Option<String>,
}

/// Outcome of a classified response.
#[derive(Debug)]
pub enum ClassifiedResponse {
    /// The reason was created.
    Created(CreatedReason),

    /// The server rejected the post; carries the decoded reason.
    Rejected(ApiError),
}

/// Classify a raw response by status code and decode the matching schema.
///
/// Only 201 selects the success branch; every other status is decoded as
/// the error schema with no per-status special cases.
pub fn classify(status: u16, body: &[u8]) -> Result<ClassifiedResponse, ResponseError> {
    if status == StatusCode::CREATED.as_u16() {
        let created = serde_json::from_slice(body).map_err(ResponseError::InvalidSuccessBody)?;
        return Ok(ClassifiedResponse::Created(created));
    }

    let error = serde_json::from_slice(body).map_err(ResponseError::InvalidErrorBody)?;
    Ok(ClassifiedResponse::Rejected(error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_with_valid_body() {
        let outcome = classify(201, br#"{"id":"ls-1","kind":"LimitedSupportReason"}"#).unwrap();

        match outcome {
            ClassifiedResponse::Created(reply) => {
                assert_eq!(reply.id, "ls-1");
                assert_eq!(reply.kind.as_deref(), Some("LimitedSupportReason"));
            }
            other => panic!("expected Created, got {other:?}"),
        }
    }

    #[test]
    fn test_created_with_malformed_body() {
        assert!(matches!(
            classify(201, b"not json at all"),
            Err(ResponseError::InvalidSuccessBody(_))
        ));
    }

    #[test]
    fn test_rejected_carries_reason_verbatim() {
        let body = br#"{"kind":"Error","code":"CLUSTERS-MGMT-400","reason":"cluster is archived"}"#;
        let outcome = classify(400, body).unwrap();

        match outcome {
            ClassifiedResponse::Rejected(err) => {
                assert_eq!(err.reason, "cluster is archived");
                assert_eq!(err.code.as_deref(), Some("CLUSTERS-MGMT-400"));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_rejected_with_malformed_body() {
        assert!(matches!(
            classify(500, b"<html>gateway error</html>"),
            Err(ResponseError::InvalidErrorBody(_))
        ));
    }

    #[test]
    fn test_all_non_created_statuses_take_the_failure_branch() {
        let body = br#"{"reason":"nope"}"#;

        for status in [200u16, 202, 400, 401, 404, 409, 418, 500, 503] {
            match classify(status, body).unwrap() {
                ClassifiedResponse::Rejected(err) => assert_eq!(err.reason, "nope"),
                other => panic!("status {status} should classify as Rejected, got {other:?}"),
            }
        }
    }
}
