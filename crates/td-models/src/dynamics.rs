//! Fault-current withstand and energization inrush estimates.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use td_core::constants::MU0_H_PER_M;
use uom::si::area::square_meter;

/// Standard withstand duration for the thermal I²t capacity.
const SHORT_CIRCUIT_DURATION_S: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShortCircuitResult {
    pub reactance_ohm: f64,
    pub current_a: f64,
    pub radial_force_n: f64,
    pub thermal_capacity_a2s: f64,
}

/// Bolted-fault behavior from the air-core reactance of the primary.
/// The radial force uses the energy density of the fault ampere-turns
/// over the per-turn length.
pub fn short_circuit(
    v1: f64,
    primary_turns: f64,
    net_area_cm2: f64,
    mean_turn_length_m: f64,
    frequency_hz: f64,
) -> ShortCircuitResult {
    let area_m2 = td_core::sqcm(net_area_cm2).get::<square_meter>();
    let reactance_ohm =
        2.0 * PI * frequency_hz * MU0_H_PER_M * primary_turns * primary_turns * area_m2
            / mean_turn_length_m;
    let current_a = v1 / reactance_ohm;

    let ampere_turns = primary_turns * current_a;
    let radial_force_n =
        0.5 * MU0_H_PER_M * ampere_turns * ampere_turns / (mean_turn_length_m / primary_turns);

    ShortCircuitResult {
        reactance_ohm,
        current_a,
        radial_force_n,
        thermal_capacity_a2s: current_a * current_a * SHORT_CIRCUIT_DURATION_S,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InrushResult {
    pub residual_flux_t: f64,
    pub peak_current_a: f64,
    pub duration_cycles: f64,
}

/// Worst-case energization at voltage zero with 70% residual flux in
/// the core. The peak is the volt-seconds demanded by (Bm + Br)
/// against the rated voltage slope.
pub fn inrush(
    v1: f64,
    primary_turns: f64,
    net_area_cm2: f64,
    flux_density_t: f64,
    frequency_hz: f64,
) -> InrushResult {
    let area_m2 = td_core::sqcm(net_area_cm2).get::<square_meter>();
    let residual_flux_t = 0.7 * flux_density_t;
    let swing_t = flux_density_t + residual_flux_t;

    let peak_current_a =
        swing_t * area_m2 * 2.0 * PI * frequency_hz * primary_turns / (2.0_f64.sqrt() * v1);
    let duration_cycles = primary_turns * area_m2 * swing_t / v1 * frequency_hz;

    InrushResult {
        residual_flux_t,
        peak_current_a,
        duration_cycles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reactance_limits_fault_current() {
        let sc = short_circuit(11_000.0, 500.0, 347.85, 1.4, 50.0);
        assert!((sc.current_a - 11_000.0 / sc.reactance_ohm).abs() < 1e-9);
        assert!(sc.radial_force_n > 0.0);
        assert!((sc.thermal_capacity_a2s - sc.current_a * sc.current_a * 2.0).abs() < 1e-6);
    }

    #[test]
    fn more_turns_means_less_fault_current() {
        let few = short_circuit(11_000.0, 200.0, 347.85, 1.4, 50.0);
        let many = short_circuit(11_000.0, 800.0, 347.85, 1.4, 50.0);
        assert!(many.reactance_ohm > few.reactance_ohm);
        assert!(many.current_a < few.current_a);
    }

    #[test]
    fn inrush_uses_seventy_percent_residual() {
        let i = inrush(11_000.0, 500.0, 347.85, 1.5, 50.0);
        assert!((i.residual_flux_t - 1.05).abs() < 1e-12);
        let area = 347.85e-4;
        let expected =
            (1.5 + 1.05) * area * 2.0 * PI * 50.0 * 500.0 / (2.0_f64.sqrt() * 11_000.0);
        assert!((i.peak_current_a - expected).abs() < 1e-9);
    }

    #[test]
    fn higher_flux_means_harder_inrush() {
        let low = inrush(11_000.0, 500.0, 347.85, 1.2, 50.0);
        let high = inrush(11_000.0, 500.0, 347.85, 1.6, 50.0);
        assert!(high.peak_current_a > low.peak_current_a);
        assert!(high.duration_cycles > low.duration_cycles);
    }
}
