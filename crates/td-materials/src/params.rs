//! Material parameter join over the design-rule tables.

use crate::{CoolingType, CoreMaterial, DesignStandard, WindingType};
use serde::{Deserialize, Serialize};

/// The four working parameters the whole design evaluation runs on.
/// Flux density and current density are the free optimization variables;
/// stacking and space factors stay fixed per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    pub flux_density_t: f64,
    pub current_density_a_mm2: f64,
    pub stacking_factor: f64,
    pub space_factor: f64,
}

impl MaterialParams {
    /// Join the standard/material/cooling/winding tables into one
    /// parameter set. Total over the enums, so it cannot fail.
    pub fn lookup(
        standard: DesignStandard,
        material: CoreMaterial,
        cooling: CoolingType,
        winding: WindingType,
    ) -> Self {
        Self {
            flux_density_t: material.flux_density_t(standard),
            current_density_a_mm2: material.base_current_density_a_mm2(standard)
                * cooling.current_density_factor(),
            stacking_factor: material.stacking_factor(),
            space_factor: winding.space_factor(),
        }
    }
}

/// Baseline parameters used when no tables apply (and as the seed for
/// tests): Bm = 1.2 T, J = 3.0 A/mm², k = 0.90, kw = 0.3.
impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            flux_density_t: 1.2,
            current_density_a_mm2: 3.0,
            stacking_factor: 0.90,
            space_factor: 0.3,
        }
    }
}
