//! Constrained optimization over full design evaluations.

use std::str::FromStr;
use td_design::{DesignSpec, evaluate};
use td_materials::{CoolingType, Phase};
use td_optimize::{CURRENT_DENSITY_BOUNDS, FLUX_DENSITY_BOUNDS, OptimizeTarget, optimize};

/// A rating whose 65°C rise cap is attainable inside the bounds.
fn small_water_cooled() -> DesignSpec {
    let mut spec = DesignSpec::new(1_000.0, 230.0, 115.0);
    spec.phase = Phase::Single;
    spec.cooling = CoolingType::WaterCooled;
    spec
}

#[test]
fn cost_target_respects_temperature_cap() {
    let spec = small_water_cooled();
    let outcome = optimize(&spec, OptimizeTarget::Cost).unwrap();

    println!(
        "Bm = {:.3} T, J = {:.3} A/mm², cost = {:.2} USD after {} iterations",
        outcome.flux_density_t,
        outcome.current_density_a_mm2,
        outcome.objective,
        outcome.iterations
    );
    assert!(outcome.success, "{}", outcome.message);

    let bm = outcome.flux_density_t;
    let j = outcome.current_density_a_mm2;
    assert!(FLUX_DENSITY_BOUNDS.0 <= bm && bm <= FLUX_DENSITY_BOUNDS.1);
    assert!(CURRENT_DENSITY_BOUNDS.0 <= j && j <= CURRENT_DENSITY_BOUNDS.1);

    // Re-evaluating at the returned point reproduces the outcome and
    // stays under the rise cap.
    let check = evaluate(&spec, bm, j).unwrap();
    assert_eq!(check, outcome.result);
    assert!(
        check.thermal.temperature_rise_c <= spec.limits.max_temp_rise_c + 1e-3,
        "rise {} exceeds cap",
        check.thermal.temperature_rise_c
    );
    assert!((outcome.objective - check.cost.total_usd).abs() < 1e-9);
}

#[test]
fn cost_optimum_beats_heavy_conductor_corner() {
    let spec = small_water_cooled();
    let outcome = optimize(&spec, OptimizeTarget::Cost).unwrap();
    assert!(outcome.success, "{}", outcome.message);

    // (1.8, 1.5) is feasible here but spends the most copper
    let corner = evaluate(&spec, 1.8, 1.5).unwrap();
    assert!(outcome.objective <= corner.cost.total_usd + 1e-6);
}

#[test]
fn losses_target_runs_to_thick_copper() {
    let spec = small_water_cooled();
    let outcome = optimize(&spec, OptimizeTarget::Losses).unwrap();

    assert!(outcome.success, "{}", outcome.message);
    // Losses fall with more iron and more copper, so the optimum sits
    // near the high-Bm, low-J corner.
    assert!(outcome.flux_density_t > 1.75, "Bm = {}", outcome.flux_density_t);
    assert!(
        outcome.current_density_a_mm2 < 1.55,
        "J = {}",
        outcome.current_density_a_mm2
    );
    assert!((outcome.objective - outcome.result.losses.total_w).abs() < 1e-9);
}

#[test]
fn weight_target_stops_at_the_rise_cap() {
    let spec = small_water_cooled();
    let outcome = optimize(&spec, OptimizeTarget::Weight).unwrap();

    assert!(outcome.success, "{}", outcome.message);
    // Thinner copper is lighter but hotter; the rise cap pins J below
    // its upper bound.
    assert!(outcome.current_density_a_mm2 < CURRENT_DENSITY_BOUNDS.1);
    assert!(
        outcome.result.thermal.temperature_rise_c <= spec.limits.max_temp_rise_c + 1e-3,
        "rise {}",
        outcome.result.thermal.temperature_rise_c
    );
}

#[test]
fn infeasible_cap_reports_failure_without_error() {
    // An ONAN 100 kVA unit cannot reach a 65°C rise anywhere in the
    // (Bm, J) box; the optimizer must say so rather than blow up.
    let spec = DesignSpec::new(100_000.0, 11_000.0, 415.0);
    let outcome = optimize(&spec, OptimizeTarget::Cost).unwrap();

    assert!(!outcome.success);
    assert!(!outcome.message.is_empty());
    assert!(outcome.result.thermal.temperature_rise_c > spec.limits.max_temp_rise_c);
}

#[test]
fn invalid_spec_is_a_hard_error() {
    let mut spec = small_water_cooled();
    spec.frequency_hz = 0.0;
    assert!(optimize(&spec, OptimizeTarget::Cost).is_err());
}

#[test]
fn target_labels_round_trip() {
    for target in OptimizeTarget::ALL {
        let parsed = OptimizeTarget::from_str(target.display_name()).unwrap();
        assert_eq!(parsed, target);
    }
    assert_eq!(
        OptimizeTarget::from_str(" LOSSES ").unwrap(),
        OptimizeTarget::Losses
    );
    assert!(OptimizeTarget::from_str("speed").is_err());
}
