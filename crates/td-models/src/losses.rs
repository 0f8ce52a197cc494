//! Core, copper, eddy, stray and harmonic loss models.

use serde::{Deserialize, Serialize};
use td_core::constants::{DENSITY_CORE_G_CM3, RHO_COPPER_OHM_M, SKIN_DEPTH_COEFF_MM};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreLoss {
    pub volume_cm3: f64,
    pub weight_kg: f64,
    pub loss_factor_w_per_kg: f64,
    pub loss_w: f64,
}

/// Core loss from the magnetic path volume. The limb-and-yoke steel is
/// approximated as net cross-section swept along the primary mean turn
/// path. The specific loss scales with (f/50)^1.3 away from mains.
pub fn core_loss(
    net_area_cm2: f64,
    mean_turn_length_m: f64,
    base_loss_w_per_kg: f64,
    frequency_hz: f64,
) -> CoreLoss {
    let volume_cm3 = net_area_cm2 * mean_turn_length_m * 100.0;
    let weight_kg = volume_cm3 * DENSITY_CORE_G_CM3 / 1000.0;
    let loss_factor_w_per_kg = base_loss_w_per_kg * (frequency_hz / 50.0).powf(1.3);

    CoreLoss {
        volume_cm3,
        weight_kg,
        loss_factor_w_per_kg,
        loss_w: weight_kg * loss_factor_w_per_kg,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EddyLoss {
    pub conductor_diameter_um: f64,
    pub skin_depth_um: f64,
    pub loss_ratio: f64,
    pub loss_w: f64,
}

/// Conductor eddy loss for one winding. Thin conductors (diameter below
/// the skin depth) contribute nothing; thicker ones follow the Dowell
/// ratio x⁴/(192 + 0.8 x⁴) applied to the DC ohmic dissipation.
pub fn eddy_loss(
    current_a: f64,
    turns: f64,
    conductor_area_mm2: f64,
    mean_turn_length_m: f64,
    frequency_hz: f64,
) -> EddyLoss {
    let conductor_diameter_um = 2.0 * (conductor_area_mm2 / std::f64::consts::PI).sqrt() * 1000.0;
    let skin_depth_um = SKIN_DEPTH_COEFF_MM / frequency_hz.sqrt() * 1000.0;

    let loss_ratio = if conductor_diameter_um > skin_depth_um {
        let x4 = (conductor_diameter_um / skin_depth_um).powi(4);
        x4 / (192.0 + 0.8 * x4)
    } else {
        0.0
    };

    let dc_loss_w =
        current_a * current_a * turns * mean_turn_length_m * RHO_COPPER_OHM_M
            / (conductor_area_mm2 * 1e-6);

    EddyLoss {
        conductor_diameter_um,
        skin_depth_um,
        loss_ratio,
        loss_w: loss_ratio * dc_loss_w,
    }
}

/// Full loss budget of a design at rated load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossBreakdown {
    pub copper_w: f64,
    pub harmonic_copper_w: f64,
    pub core: CoreLoss,
    pub eddy_primary: EddyLoss,
    pub eddy_secondary: EddyLoss,
    pub harmonic_eddy_w: f64,
    pub stray_w: f64,
    pub total_w: f64,
}

impl LossBreakdown {
    /// Combine the per-winding copper losses with core, eddy and stray
    /// contributions. Stray loss is taken as 15% of the fundamental
    /// copper loss, before any harmonic derating is added on top. A
    /// harmonic factor of 1.0 (clean sine) adds nothing.
    pub fn assemble(
        copper_primary_w: f64,
        copper_secondary_w: f64,
        core: CoreLoss,
        eddy_primary: EddyLoss,
        eddy_secondary: EddyLoss,
        harmonic_factor: f64,
    ) -> Self {
        let copper_w = copper_primary_w + copper_secondary_w;
        let stray_w = 0.15 * copper_w;
        let harmonic_copper_w = 0.05 * (harmonic_factor - 1.0) * copper_w;

        let eddy_w = eddy_primary.loss_w + eddy_secondary.loss_w;
        let harmonic_eddy_w = (harmonic_factor * harmonic_factor - 1.0) * eddy_w;

        let total_w =
            copper_w + harmonic_copper_w + core.loss_w + eddy_w + harmonic_eddy_w + stray_w;

        Self {
            copper_w,
            harmonic_copper_w,
            core,
            eddy_primary,
            eddy_secondary,
            harmonic_eddy_w,
            stray_w,
            total_w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_loss_volume_and_weight() {
        // 347.85 cm² core, 1.2 m mean path: 41742 cm³, 319.3 kg of steel
        let c = core_loss(347.85, 1.2, 1.2, 50.0);
        assert!((c.volume_cm3 - 41_742.0).abs() < 1.0);
        assert!((c.weight_kg - c.volume_cm3 * 7.65 / 1000.0).abs() < 1e-9);
        // at mains frequency the specific loss is unchanged
        assert!((c.loss_factor_w_per_kg - 1.2).abs() < 1e-12);
        assert!((c.loss_w - c.weight_kg * 1.2).abs() < 1e-9);
    }

    #[test]
    fn core_loss_scales_with_frequency() {
        let mains = core_loss(100.0, 1.0, 1.2, 50.0);
        let aero = core_loss(100.0, 1.0, 1.2, 400.0);
        let expected = mains.loss_w * (400.0_f64 / 50.0).powf(1.3);
        assert!((aero.loss_w - expected).abs() < 1e-6);
    }

    #[test]
    fn thin_conductor_has_no_eddy_loss() {
        // 2 mm² wire: diameter 1.6 mm, far below the 9.3 mm skin depth at 50 Hz
        let e = eddy_loss(10.0, 100.0, 2.0, 1.0, 50.0);
        assert_eq!(e.loss_ratio, 0.0);
        assert_eq!(e.loss_w, 0.0);
    }

    #[test]
    fn thick_conductor_eddy_ratio() {
        // 400 mm²: diameter 22.6 mm exceeds the 9.3 mm skin depth
        let e = eddy_loss(1000.0, 20.0, 400.0, 1.5, 50.0);
        assert!(e.conductor_diameter_um > e.skin_depth_um);
        let x4 = (e.conductor_diameter_um / e.skin_depth_um).powi(4);
        assert!((e.loss_ratio - x4 / (192.0 + 0.8 * x4)).abs() < 1e-12);
        assert!(e.loss_w > 0.0);
    }

    #[test]
    fn clean_sine_adds_no_harmonic_loss() {
        let core = core_loss(100.0, 1.0, 1.2, 50.0);
        let e1 = eddy_loss(1000.0, 20.0, 400.0, 1.5, 50.0);
        let e2 = eddy_loss(50.0, 400.0, 20.0, 1.2, 50.0);
        let b = LossBreakdown::assemble(800.0, 700.0, core, e1, e2, 1.0);
        assert_eq!(b.harmonic_copper_w, 0.0);
        assert_eq!(b.harmonic_eddy_w, 0.0);
        assert!((b.stray_w - 0.15 * 1500.0).abs() < 1e-9);
        let sum = 1500.0 + core.loss_w + e1.loss_w + e2.loss_w + b.stray_w;
        assert!((b.total_w - sum).abs() < 1e-9);
    }

    #[test]
    fn harmonic_factor_derates_copper_and_eddy() {
        let core = core_loss(100.0, 1.0, 1.2, 50.0);
        let e1 = eddy_loss(1000.0, 20.0, 400.0, 1.5, 50.0);
        let e2 = eddy_loss(50.0, 400.0, 20.0, 1.2, 50.0);
        let clean = LossBreakdown::assemble(800.0, 700.0, core, e1, e2, 1.0);
        let dirty = LossBreakdown::assemble(800.0, 700.0, core, e1, e2, 1.2);
        assert!(dirty.total_w > clean.total_w);
        assert!((dirty.harmonic_copper_w - 0.05 * 0.2 * 1500.0).abs() < 1e-9);
        let eddy = e1.loss_w + e2.loss_w;
        assert!((dirty.harmonic_eddy_w - (1.44 - 1.0) * eddy).abs() < 1e-9);
        // stray stays pinned to the fundamental copper loss
        assert!((dirty.stray_w - clean.stray_w).abs() < 1e-12);
    }
}
