//! Clusters-management API layer.
//!
//! This module provides:
//! - The mockable [`Connection`] seam and its reqwest-backed implementation
//! - Request composition for the limited support reasons resource
//! - Response classification into the success or error schema
//! - Cluster key validation

mod cluster;
mod connection;
mod request;
mod response;

pub use cluster::{validate_cluster_key, ClusterKeyError};
pub use connection::{ApiResponse, Connection, ConnectionError, HttpConnection};
pub use request::{compose, RequestError, SupportReasonRequest};
pub use response::{classify, ApiError, ClassifiedResponse, CreatedReason, ResponseError};
