//! Audible noise estimate from core magnetostriction and fan noise.

use serde::{Deserialize, Serialize};
use td_materials::{CoolingType, CoreMaterial};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseResult {
    pub core_db: f64,
    pub flux_adjusted_db: f64,
    pub frequency_adjusted_db: f64,
    pub cooling_db: Option<f64>,
    pub total_db: f64,
}

/// Sound level referenced to 1.5 T at 50 Hz, corrected for actual flux
/// density and frequency. Forced-air oil cooling adds a fan term that
/// combines with the core on a power basis.
pub fn noise_level(
    core_weight_kg: f64,
    flux_density_t: f64,
    frequency_hz: f64,
    power_va: f64,
    material: CoreMaterial,
    cooling: CoolingType,
) -> NoiseResult {
    let (base, slope) = material.noise_coefficients();
    let core_db = base + slope * core_weight_kg.log10();
    let flux_adjusted_db = core_db + 15.0 * (flux_density_t / 1.5).log10();
    let frequency_adjusted_db = flux_adjusted_db + 10.0 * (frequency_hz / 50.0).log10();

    let (cooling_db, total_db) = match cooling {
        CoolingType::Onaf | CoolingType::Ofaf => {
            let fan_db = 5.0 + (power_va / 1000.0).log10();
            let combined = 10.0
                * (10f64.powf(frequency_adjusted_db / 10.0) + 10f64.powf(fan_db / 10.0)).log10();
            (Some(fan_db), combined)
        }
        _ => (None, frequency_adjusted_db),
    };

    NoiseResult {
        core_db,
        flux_adjusted_db,
        frequency_adjusted_db,
        cooling_db,
        total_db,
    }
}
