//! Parsing of `-p NAME=VALUE` template parameters.

use thiserror::Error;

/// Parameter-specific error type
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("wrong syntax of '-p' flag {0:?}, use it like this: '-p FOO=BAR'")]
    Malformed(String),
}

/// Result type for parameter operations
pub type ParamResult<T> = Result<T, ParamError>;

/// A single template parameter, with its name already normalized to the
/// `${NAME}` token form it is matched under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Placeholder token, e.g. `${REASON}`
    pub token: String,

    /// Replacement value
    pub value: String,
}

/// Parse raw `NAME=VALUE` entries into parameters.
///
/// Each entry is split on the first `=`, so values may themselves contain
/// `=`. An entry without a separator, or with an empty name or value, is
/// rejected. Order is preserved and duplicate names are kept as separate
/// entries; they are applied sequentially downstream.
pub fn parse(raw: &[String]) -> ParamResult<Vec<Parameter>> {
    raw.iter()
        .map(|entry| {
            let (name, value) = entry
                .split_once('=')
                .ok_or_else(|| ParamError::Malformed(entry.clone()))?;

            if name.is_empty() || value.is_empty() {
                return Err(ParamError::Malformed(entry.clone()));
            }

            Ok(Parameter {
                token: format!("${{{name}}}"),
                value: value.to_string(),
            })
        })
        .collect()
}
