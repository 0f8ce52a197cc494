//! Evaluated design output.

use serde::{Deserialize, Serialize};
use td_models::{
    ConductorSelection, CoreGeometry, CostBreakdown, EddyLoss, InrushResult, LossBreakdown,
    MechanicalResult, NoiseResult, ShortCircuitResult, ThermalResult, WindingDesign,
};

/// One winding side: turns, current, conductor choice and the packed
/// electrical build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindingRecord {
    pub turns: f64,
    pub current_a: f64,
    pub conductor: ConductorSelection,
    pub winding: WindingDesign,
    pub eddy: EddyLoss,
}

/// Complete output of one design evaluation at a fixed operating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    pub flux_density_t: f64,
    pub current_density_a_mm2: f64,
    pub core: CoreGeometry,
    pub primary: WindingRecord,
    pub secondary: WindingRecord,
    pub losses: LossBreakdown,
    pub thermal: ThermalResult,
    pub noise: Option<NoiseResult>,
    pub mechanical: MechanicalResult,
    pub short_circuit: ShortCircuitResult,
    pub inrush: InrushResult,
    pub copper_weight_kg: f64,
    pub cost: CostBreakdown,
    pub efficiency: f64,
}

impl DesignResult {
    /// Core steel mass, from the loss model's volume accounting.
    pub fn core_weight_kg(&self) -> f64 {
        self.losses.core.weight_kg
    }

    /// Active-part mass: core steel plus winding copper. This is the
    /// quantity the weight optimization target minimizes.
    pub fn active_weight_kg(&self) -> f64 {
        self.core_weight_kg() + self.copper_weight_kg
    }
}
