//! Full design evaluation for power and distribution transformers.
//!
//! This crate ties the individual models together: a validated
//! [`DesignSpec`] plus an operating point (flux density, current
//! density) is evaluated into a [`DesignResult`] covering geometry,
//! windings, losses, thermals, mechanics, fault behavior and cost.
//! Evaluation is a pure function of its arguments; trial points from
//! an optimizer or a parameter scan never touch shared state.

pub mod error;
pub mod pipeline;
pub mod result;
pub mod spec;

pub use error::DesignError;
pub use pipeline::{default_operating_point, evaluate};
pub use result::{DesignResult, WindingRecord};
pub use spec::{DesignLimits, DesignSpec};
