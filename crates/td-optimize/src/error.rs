//! Error types for optimization runs.

use td_design::DesignError;
use thiserror::Error;

/// Errors that can occur while setting up or running an optimization.
#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("Optimization setup error: {what}")]
    Setup { what: String },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Design error: {0}")]
    Design(#[from] DesignError),
}

pub type OptimizeResult<T> = Result<T, OptimizeError>;
