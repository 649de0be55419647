//! Parameter substitution engine for support reason templates

use tracing::debug;

use super::types::SupportReason;
use crate::params::Parameter;

/// Substitution-specific error type
#[derive(Debug, thiserror::Error)]
pub enum SubstitutionError {
    #[error("the template is not using the {0:?} parameter, do not pass the matching '-p' flag")]
    UnusedParameter(String),
}

/// Result type for substitution operations
pub type SubstitutionResult<T> = Result<T, SubstitutionError>;

/// Apply parameters to the support reason, in the order they were parsed.
///
/// Every parameter must match at least one placeholder in the document;
/// the first one that does not aborts the whole run, leaving later
/// parameters unapplied. The reverse does not hold: a placeholder with no
/// matching parameter stays in the text, and callers surface leftovers via
/// [`SupportReason::unresolved_placeholders`] before anything is sent.
pub fn apply(reason: &mut SupportReason, params: &[Parameter]) -> SubstitutionResult<()> {
    for param in params {
        if !reason.contains_placeholder(&param.token) {
            return Err(SubstitutionError::UnusedParameter(param.token.clone()));
        }

        debug!(token = %param.token, "replacing placeholder");
        reason.replace(&param.token, &param.value);
    }

    Ok(())
}
