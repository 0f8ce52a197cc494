//! Temperature rise from the dissipated loss and cooling surface.

use crate::geometry::CoreGeometry;
use serde::{Deserialize, Serialize};
use td_materials::CoolingType;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalResult {
    pub surface_area_m2: f64,
    pub heat_transfer_w_per_m2_c: f64,
    pub derated_heat_transfer_w_per_m2_c: f64,
    pub temperature_rise_c: f64,
    pub hot_spot_c: f64,
}

/// Steady-state rise of the active part over ambient. The convective
/// coefficient comes from the cooling method and is derated by
/// sqrt(1 - altitude/9000) for thin air; the hot spot sits 20% above
/// the mean rise. Altitude must be below 9000 m, enforced upstream.
pub fn thermal_rise(
    total_loss_w: f64,
    core: &CoreGeometry,
    cooling: CoolingType,
    ambient_c: f64,
    altitude_m: f64,
) -> ThermalResult {
    let surface_area_m2 = core.surface_area_m2();
    let heat_transfer_w_per_m2_c = cooling.heat_transfer_w_per_m2_c();
    let derated = heat_transfer_w_per_m2_c * (1.0 - altitude_m / 9000.0).sqrt();

    let temperature_rise_c = total_loss_w / (derated * surface_area_m2);
    let hot_spot_c = ambient_c + 1.2 * temperature_rise_c;

    ThermalResult {
        surface_area_m2,
        heat_transfer_w_per_m2_c,
        derated_heat_transfer_w_per_m2_c: derated,
        temperature_rise_c,
        hot_spot_c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::size_core;
    use td_materials::CoreShape;

    #[test]
    fn sea_level_keeps_full_coefficient() {
        let core = size_core(100_000.0, 0.95, CoreShape::Ei);
        let t = thermal_rise(2000.0, &core, CoolingType::Onan, 30.0, 0.0);
        assert!((t.derated_heat_transfer_w_per_m2_c - 6.0).abs() < 1e-12);
        let expected = 2000.0 / (6.0 * t.surface_area_m2);
        assert!((t.temperature_rise_c - expected).abs() < 1e-9);
        assert!((t.hot_spot_c - (30.0 + 1.2 * t.temperature_rise_c)).abs() < 1e-9);
    }

    #[test]
    fn forced_cooling_runs_cooler() {
        let core = size_core(100_000.0, 0.95, CoreShape::Ei);
        let onan = thermal_rise(2000.0, &core, CoolingType::Onan, 30.0, 0.0);
        let ofaf = thermal_rise(2000.0, &core, CoolingType::Ofaf, 30.0, 0.0);
        assert!(ofaf.temperature_rise_c < onan.temperature_rise_c);
    }

    #[test]
    fn high_altitude_raises_temperature() {
        let core = size_core(100_000.0, 0.95, CoreShape::Ei);
        let sea = thermal_rise(2000.0, &core, CoolingType::Onan, 30.0, 0.0);
        let alto = thermal_rise(2000.0, &core, CoolingType::Onan, 30.0, 3000.0);
        assert!(alto.temperature_rise_c > sea.temperature_rise_c);
        let factor = (1.0_f64 - 3000.0 / 9000.0).sqrt();
        assert!((alto.derated_heat_transfer_w_per_m2_c - 6.0 * factor).abs() < 1e-12);
    }
}
