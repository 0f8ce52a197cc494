//! Constrained optimization and parameter scans over the design
//! pipeline.
//!
//! The optimizer adjusts the two free operating variables, core flux
//! density Bm and conductor current density J, inside fixed physical
//! bounds. Every trial point is a fresh, independent pipeline
//! evaluation; nothing is carried between trials, which is also what
//! lets the grid scan fan out across threads.

pub mod error;
pub mod problem;
pub mod scan;
pub mod sqp;

pub use error::{OptimizeError, OptimizeResult};
pub use problem::{
    CURRENT_DENSITY_BOUNDS, FLUX_DENSITY_BOUNDS, OptimizationOutcome, OptimizeTarget, optimize,
};
pub use scan::{ScanConfig, ScanPoint, ScanRange, best_feasible, scan};
pub use sqp::{Constraint, SqpConfig, SqpResult, sqp_solve};
