//! The design evaluation pipeline.

use crate::error::DesignError;
use crate::result::{DesignResult, WindingRecord};
use crate::spec::DesignSpec;
use td_materials::MaterialParams;
use td_models::acoustic::noise_level;
use td_models::cost::{CostBreakdown, copper_weight_kg};
use td_models::dynamics;
use td_models::electrical::{design_winding, line_currents, size_conductor, turn_counts};
use td_models::geometry::size_core;
use td_models::losses::{LossBreakdown, core_loss, eddy_loss};
use td_models::mechanical::mechanical_design;
use td_models::thermal::thermal_rise;

/// Starting operating point (Bm [T], J [A/mm²]) from the material
/// tables for this spec's standard, core material and cooling.
pub fn default_operating_point(spec: &DesignSpec) -> (f64, f64) {
    let params = MaterialParams::lookup(
        spec.standard,
        spec.core_material,
        spec.cooling,
        spec.winding_type,
    );
    (params.flux_density_t, params.current_density_a_mm2)
}

/// Evaluate a validated spec at one operating point. The call is pure:
/// the same spec, flux density and current density always produce the
/// same result, so optimizer trial points can be evaluated in any
/// order or in parallel.
pub fn evaluate(
    spec: &DesignSpec,
    flux_density_t: f64,
    current_density_a_mm2: f64,
) -> Result<DesignResult, DesignError> {
    spec.validate()?;
    check_operating_point("flux_density_t", flux_density_t)?;
    check_operating_point("current_density_a_mm2", current_density_a_mm2)?;

    let core = size_core(
        spec.power_va,
        spec.core_material.stacking_factor(),
        spec.core_shape,
    );

    let turns = turn_counts(
        spec.primary_voltage_v,
        spec.secondary_voltage_v,
        spec.frequency_hz,
        flux_density_t,
        core.net_area_cm2,
        spec.regulation,
        spec.phase,
        spec.connection,
    );
    let currents = line_currents(
        spec.power_va,
        spec.primary_voltage_v,
        spec.secondary_voltage_v,
        spec.phase,
        spec.connection,
    );

    let primary_conductor =
        size_conductor(currents.primary_a, current_density_a_mm2, spec.frequency_hz);
    let secondary_conductor = size_conductor(
        currents.secondary_a,
        current_density_a_mm2,
        spec.frequency_hz,
    );

    let primary_build = design_winding(
        turns.primary,
        currents.primary_a,
        primary_conductor.area_mm2,
        &core,
    );
    let secondary_build = design_winding(
        turns.secondary,
        currents.secondary_a,
        secondary_conductor.area_mm2,
        &core,
    );

    // Core volume follows the primary mean turn path around the limb.
    let iron = core_loss(
        core.net_area_cm2,
        primary_build.mean_turn_length_m,
        spec.core_material.loss_factor_w_per_kg(),
        spec.frequency_hz,
    );
    let primary_eddy = eddy_loss(
        currents.primary_a,
        turns.primary,
        primary_conductor.area_mm2,
        primary_build.mean_turn_length_m,
        spec.frequency_hz,
    );
    let secondary_eddy = eddy_loss(
        currents.secondary_a,
        turns.secondary,
        secondary_conductor.area_mm2,
        secondary_build.mean_turn_length_m,
        spec.frequency_hz,
    );

    let losses = LossBreakdown::assemble(
        primary_build.copper_loss_w,
        secondary_build.copper_loss_w,
        iron,
        primary_eddy,
        secondary_eddy,
        spec.harmonic_factor,
    );

    let thermal = thermal_rise(
        losses.total_w,
        &core,
        spec.cooling,
        spec.ambient_c,
        spec.altitude_m,
    );

    let noise = spec.limits.noise_limit_db.map(|_| {
        noise_level(
            iron.weight_kg,
            flux_density_t,
            spec.frequency_hz,
            spec.power_va,
            spec.core_material,
            spec.cooling,
        )
    });

    let mechanical = mechanical_design(spec.power_va, &core, spec.cooling);
    let short_circuit = dynamics::short_circuit(
        spec.primary_voltage_v,
        turns.primary,
        core.net_area_cm2,
        primary_build.mean_turn_length_m,
        spec.frequency_hz,
    );
    let inrush = dynamics::inrush(
        spec.primary_voltage_v,
        turns.primary,
        core.net_area_cm2,
        flux_density_t,
        spec.frequency_hz,
    );

    let copper_weight_kg = copper_weight_kg(
        primary_build.mean_turn_length_m,
        turns.primary,
        primary_conductor.area_mm2,
        secondary_build.mean_turn_length_m,
        turns.secondary,
        secondary_conductor.area_mm2,
    );
    let cost = CostBreakdown::estimate(
        iron.weight_kg,
        copper_weight_kg,
        spec.core_material,
        spec.transformer_type,
        spec.cooling,
        spec.power_va,
    );

    let efficiency = spec.power_va / (spec.power_va + losses.total_w);

    Ok(DesignResult {
        flux_density_t,
        current_density_a_mm2,
        core,
        primary: WindingRecord {
            turns: turns.primary,
            current_a: currents.primary_a,
            conductor: primary_conductor,
            winding: primary_build,
            eddy: primary_eddy,
        },
        secondary: WindingRecord {
            turns: turns.secondary,
            current_a: currents.secondary_a,
            conductor: secondary_conductor,
            winding: secondary_build,
            eddy: secondary_eddy,
        },
        losses,
        thermal,
        noise,
        mechanical,
        short_circuit,
        inrush,
        copper_weight_kg,
        cost,
        efficiency,
    })
}

fn check_operating_point(name: &'static str, value: f64) -> Result<(), DesignError> {
    td_core::numeric::ensure_positive(value, name).map_err(|_| DesignError::OperatingPoint {
        what: format!("{name} must be positive, got {value}"),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_is_pure() {
        let spec = DesignSpec::new(100_000.0, 11_000.0, 415.0);
        let (bm, j) = default_operating_point(&spec);
        let a = evaluate(&spec, bm, j).unwrap();
        let b = evaluate(&spec, bm, j).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn default_point_reflects_cooling_factor() {
        let onan = DesignSpec::new(100_000.0, 11_000.0, 415.0);
        let mut dry = onan;
        dry.cooling = td_materials::CoolingType::DryType;
        let (_, j_onan) = default_operating_point(&onan);
        let (_, j_dry) = default_operating_point(&dry);
        assert!((j_dry / j_onan - 0.8).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_operating_point() {
        let spec = DesignSpec::new(100_000.0, 11_000.0, 415.0);
        assert!(evaluate(&spec, 0.0, 3.0).is_err());
        assert!(evaluate(&spec, 1.5, f64::NAN).is_err());
    }

    #[test]
    fn noise_present_only_with_limit() {
        let mut spec = DesignSpec::new(100_000.0, 11_000.0, 415.0);
        let (bm, j) = default_operating_point(&spec);
        let silent = evaluate(&spec, bm, j).unwrap();
        assert!(silent.noise.is_none());

        spec.limits.noise_limit_db = Some(75.0);
        let audited = evaluate(&spec, bm, j).unwrap();
        assert!(audited.noise.is_some());
    }
}
