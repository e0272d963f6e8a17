//! Error types for the dependent requirement engine.

use roumu_shared::types::DependentId;
use roumu_shared::AppError;
use thiserror::Error;

/// Errors that can occur while deriving dependent field requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependentRuleError {
    /// An unrecognized change-type tag reached the rule engine.
    ///
    /// This is a programming error in the calling layer, not a user
    /// validation failure; it must never degrade to all-optional.
    #[error("Unrecognized change type tag: {0}")]
    InvalidChangeType(String),

    /// No sub-record is registered under the given ID.
    #[error("Dependent {0} is not registered with this engine")]
    UnknownDependent(DependentId),

    /// The engine has no spouse sub-record.
    #[error("No spouse sub-record is registered with this engine")]
    NoSpouseRecord,
}

impl DependentRuleError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidChangeType(_) => 500,
            Self::UnknownDependent(_) | Self::NoSpouseRecord => 404,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidChangeType(_) => "INVALID_CHANGE_TYPE",
            Self::UnknownDependent(_) => "UNKNOWN_DEPENDENT",
            Self::NoSpouseRecord => "NO_SPOUSE_RECORD",
        }
    }
}

impl From<DependentRuleError> for AppError {
    fn from(err: DependentRuleError) -> Self {
        match err {
            DependentRuleError::InvalidChangeType(_) => Self::Internal(err.to_string()),
            DependentRuleError::UnknownDependent(_) | DependentRuleError::NoSpouseRecord => {
                Self::NotFound(err.to_string())
            }
        }
    }
}
