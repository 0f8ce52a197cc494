//! Tank, enclosure and auxiliary cooling hardware sizing.

use crate::geometry::CoreGeometry;
use serde::{Deserialize, Serialize};
use td_materials::{CoolingFamily, CoolingType};

/// Auxiliary cooling provision for dry-type enclosures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum DryCooling {
    ForcedAir { air_flow_m3_s: f64, fan_count: u32 },
    Vented { vent_area_m2: f64 },
}

/// Physical build around the active part. Oil-immersed designs get a
/// tank, oil fill and radiators; dry designs get an enclosure with
/// either forced-air fans or passive vents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "arrangement")]
pub enum MechanicalResult {
    OilImmersed {
        tank_width_m: f64,
        tank_depth_m: f64,
        tank_height_m: f64,
        oil_volume_l: f64,
        radiator_area_m2: f64,
        tank_weight_kg: f64,
        conservator_l: Option<f64>,
    },
    DryType {
        enclosure_width_m: f64,
        enclosure_depth_m: f64,
        enclosure_height_m: f64,
        cooling: DryCooling,
    },
}

/// Size the tank or enclosure from the core envelope. Tank walls are
/// taken at 5 kg/m² of steel, the oil fill at 70% of tank volume, and
/// units above 10 kVA get a conservator at 10% of the oil volume.
pub fn mechanical_design(
    power_va: f64,
    core: &CoreGeometry,
    cooling: CoolingType,
) -> MechanicalResult {
    let core_width_m = core.width_mm / 1000.0;
    let core_depth_m = core.depth_mm / 1000.0;
    let window_height_m = core.window_height_mm / 1000.0;

    match cooling.family() {
        CoolingFamily::OilImmersed => {
            let tank_width_m = core_width_m * 1.5;
            let tank_depth_m = core_depth_m * 1.5;
            let tank_height_m = window_height_m * 1.8;

            let oil_volume_l = tank_width_m * tank_depth_m * tank_height_m * 1000.0 * 0.7;
            let radiator_area_m2 = (power_va / 500.0).max(0.5);
            let tank_weight_kg = (2.0 * (tank_width_m + tank_depth_m) * tank_height_m
                + tank_width_m * tank_depth_m)
                * 5.0;

            let conservator_l = (power_va > 10_000.0).then(|| oil_volume_l * 0.1);

            MechanicalResult::OilImmersed {
                tank_width_m,
                tank_depth_m,
                tank_height_m,
                oil_volume_l,
                radiator_area_m2,
                tank_weight_kg,
                conservator_l,
            }
        }
        CoolingFamily::Dry => {
            let enclosure_width_m = core_width_m * 1.3;
            let enclosure_depth_m = core_depth_m * 1.3;
            let enclosure_height_m = window_height_m * 1.5;

            let cooling = if cooling == CoolingType::AirForced {
                let air_flow_m3_s = (power_va / 1000.0).max(0.1);
                DryCooling::ForcedAir {
                    air_flow_m3_s,
                    // one fan moves 0.05 m³/s
                    fan_count: (air_flow_m3_s / 0.05).ceil() as u32,
                }
            } else {
                DryCooling::Vented {
                    vent_area_m2: (power_va / 2000.0).max(0.1),
                }
            };

            MechanicalResult::DryType {
                enclosure_width_m,
                enclosure_depth_m,
                enclosure_height_m,
                cooling,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::size_core;
    use td_materials::CoreShape;

    #[test]
    fn onan_gets_tank_and_conservator() {
        let core = size_core(100_000.0, 0.95, CoreShape::Ei);
        let m = mechanical_design(100_000.0, &core, CoolingType::Onan);
        match m {
            MechanicalResult::OilImmersed {
                tank_width_m,
                oil_volume_l,
                radiator_area_m2,
                conservator_l,
                ..
            } => {
                assert!((tank_width_m - core.width_mm / 1000.0 * 1.5).abs() < 1e-12);
                assert!((radiator_area_m2 - 200.0).abs() < 1e-9);
                let c = conservator_l.expect("100 kVA unit needs a conservator");
                assert!((c - 0.1 * oil_volume_l).abs() < 1e-9);
            }
            MechanicalResult::DryType { .. } => panic!("ONAN is oil-immersed"),
        }
    }

    #[test]
    fn small_unit_skips_conservator() {
        let core = size_core(5_000.0, 0.95, CoreShape::Ei);
        let m = mechanical_design(5_000.0, &core, CoolingType::Onan);
        match m {
            MechanicalResult::OilImmersed { conservator_l, .. } => {
                assert!(conservator_l.is_none());
            }
            MechanicalResult::DryType { .. } => panic!("ONAN is oil-immersed"),
        }
    }

    #[test]
    fn forced_air_dry_counts_fans() {
        let core = size_core(50_000.0, 0.95, CoreShape::Ei);
        let m = mechanical_design(50_000.0, &core, CoolingType::AirForced);
        match m {
            MechanicalResult::DryType { cooling, .. } => match cooling {
                DryCooling::ForcedAir {
                    air_flow_m3_s,
                    fan_count,
                } => {
                    assert!((air_flow_m3_s - 50.0).abs() < 1e-9);
                    assert_eq!(fan_count, 1000);
                }
                DryCooling::Vented { .. } => panic!("AF uses fans"),
            },
            MechanicalResult::OilImmersed { .. } => panic!("AF is dry-type"),
        }
    }

    #[test]
    fn natural_air_gets_vents() {
        let core = size_core(50_000.0, 0.95, CoreShape::Ei);
        let m = mechanical_design(50_000.0, &core, CoolingType::AirNatural);
        match m {
            MechanicalResult::DryType { cooling, .. } => match cooling {
                DryCooling::Vented { vent_area_m2 } => {
                    assert!((vent_area_m2 - 25.0).abs() < 1e-9);
                }
                DryCooling::ForcedAir { .. } => panic!("AN is passively vented"),
            },
            MechanicalResult::OilImmersed { .. } => panic!("AN is dry-type"),
        }
    }

    #[test]
    fn water_cooled_lands_in_dry_family() {
        let core = size_core(50_000.0, 0.95, CoreShape::Ei);
        let m = mechanical_design(50_000.0, &core, CoolingType::WaterCooled);
        assert!(matches!(m, MechanicalResult::DryType { .. }));
    }
}
