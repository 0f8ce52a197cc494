//! Error types for design evaluation.

use td_core::TdError;
use thiserror::Error;

/// Errors that can occur while evaluating a design.
#[derive(Error, Debug, Clone)]
pub enum DesignError {
    #[error("Specification error: {what}")]
    Spec { what: String },

    #[error("Operating point error: {what}")]
    OperatingPoint { what: String },
}

impl From<DesignError> for TdError {
    fn from(e: DesignError) -> Self {
        match e {
            DesignError::Spec { what: _ } => TdError::InvalidArg {
                what: "invalid design specification",
            },
            DesignError::OperatingPoint { what: _ } => TdError::InvalidArg {
                what: "invalid operating point",
            },
        }
    }
}
