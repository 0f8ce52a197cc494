//! td-models: the physics stages of the design evaluation.
//!
//! Every function in here is pure: inputs in, result struct out, no
//! retained state. Degenerate inputs (non-positive voltage/power, altitude
//! at or above the 9000 m derating limit) are rejected upstream by spec
//! validation; the models assume they hold.

pub mod acoustic;
pub mod cost;
pub mod dynamics;
pub mod electrical;
pub mod geometry;
pub mod losses;
pub mod mechanical;
pub mod thermal;

pub use acoustic::NoiseResult;
pub use cost::CostBreakdown;
pub use dynamics::{InrushResult, ShortCircuitResult};
pub use electrical::{ConductorSelection, GaugeRecord, LineCurrents, LitzBundle, TurnCounts, WindingDesign};
pub use geometry::{CoreGeometry, WindingLayout};
pub use losses::{CoreLoss, EddyLoss, LossBreakdown};
pub use mechanical::{DryCooling, MechanicalResult};
pub use thermal::ThermalResult;
