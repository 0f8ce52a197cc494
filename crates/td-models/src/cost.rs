//! Mass accounting and material cost estimate.

use serde::{Deserialize, Serialize};
use td_core::constants::DENSITY_COPPER_KG_M3;
use td_materials::{CoolingType, CoreMaterial, TransformerType};

const COPPER_USD_PER_KG: f64 = 9.0;

/// Copper mass of both windings from their conductor volume.
pub fn copper_weight_kg(
    primary_lmt_m: f64,
    primary_turns: f64,
    primary_area_mm2: f64,
    secondary_lmt_m: f64,
    secondary_turns: f64,
    secondary_area_mm2: f64,
) -> f64 {
    let volume_m3 = (primary_lmt_m * primary_turns * primary_area_mm2
        + secondary_lmt_m * secondary_turns * secondary_area_mm2)
        * 1e-6;
    volume_m3 * DENSITY_COPPER_KG_M3
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub core_usd: f64,
    pub winding_usd: f64,
    pub labor_factor: f64,
    pub cooling_usd: f64,
    pub total_usd: f64,
}

impl CostBreakdown {
    /// Material spend for the active part plus the cooling system. The
    /// labor factor scales with how exotic the transformer class is;
    /// the cooling share is a flat rate per VA of the rating.
    pub fn estimate(
        core_weight_kg: f64,
        copper_weight_kg: f64,
        material: CoreMaterial,
        transformer_type: TransformerType,
        cooling: CoolingType,
        power_va: f64,
    ) -> Self {
        let core_usd = core_weight_kg * material.price_usd_per_kg();
        let winding_usd = copper_weight_kg * COPPER_USD_PER_KG;
        let labor_factor = transformer_type.labor_factor();
        let cooling_usd = cooling.cost_usd_per_va() * power_va;

        Self {
            core_usd,
            winding_usd,
            labor_factor,
            cooling_usd,
            total_usd: (core_usd + winding_usd) * labor_factor + cooling_usd,
        }
    }
}
