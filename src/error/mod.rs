use thiserror::Error;

use crate::ocm::{ClusterKeyError, ConnectionError, RequestError, ResponseError};
use crate::params::ParamError;
use crate::source::SourceError;
use crate::template::{SubstitutionError, TemplateError};

/// Top-level error for a post invocation.
///
/// Every variant is terminal: validation errors abort before the network
/// call, decode errors abort immediately after the response, and a
/// rejection carries the server's decoded reason. Nothing is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("template error: {0}")]
    Source(#[from] SourceError),

    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("parameter error: {0}")]
    Param(#[from] ParamError),

    #[error("parameter error: {0}")]
    Substitution(#[from] SubstitutionError),

    #[error("validation error: {0}")]
    ClusterKey(#[from] ClusterKeyError),

    #[error("request error: {0}")]
    Request(#[from] RequestError),

    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    #[error("response error: {0}")]
    Response(#[from] ResponseError),

    #[error("bad response reason is: {0}")]
    Rejected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
