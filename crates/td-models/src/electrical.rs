//! Turns, currents, conductor sizing and winding electrical build.

use crate::geometry::{self, CoreGeometry, WindingLayout};
use serde::{Deserialize, Serialize};
use td_core::constants::{EMF_FORM_CONST, RHO_COPPER_OHM_M, SKIN_DEPTH_COEFF_MM};
use td_materials::{ConnectionType, Phase, WireGauge, nearest_gauge};
use uom::si::area::square_meter;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnCounts {
    pub primary: f64,
    pub secondary: f64,
}

/// Turns from the EMF equation N = V/(4.44 f Bm Ac). The secondary is
/// wound long by the regulation allowance; wye-side connections divide
/// both by sqrt(3) since each limb sees phase voltage.
pub fn turn_counts(
    v1: f64,
    v2: f64,
    frequency_hz: f64,
    flux_density_t: f64,
    net_area_cm2: f64,
    regulation: f64,
    phase: Phase,
    connection: ConnectionType,
) -> TurnCounts {
    let area_m2 = td_core::sqcm(net_area_cm2).get::<square_meter>();
    let volts_per_turn = EMF_FORM_CONST * frequency_hz * flux_density_t * area_m2;

    let mut primary = v1 / volts_per_turn;
    let mut secondary = v2 * (1.0 + regulation) / volts_per_turn;

    if phase == Phase::Three {
        let factor = connection.line_to_phase_factor();
        primary /= factor;
        secondary /= factor;
    }

    TurnCounts { primary, secondary }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineCurrents {
    pub primary_a: f64,
    pub secondary_a: f64,
}

/// Winding currents from rated power. Wye-side connections carry the
/// sqrt(3) line-to-phase factor back onto the conductor current.
pub fn line_currents(
    power_va: f64,
    v1: f64,
    v2: f64,
    phase: Phase,
    connection: ConnectionType,
) -> LineCurrents {
    let per_phase = phase.phase_factor();
    let mut primary_a = power_va / (v1 * per_phase);
    let mut secondary_a = power_va / (v2 * per_phase);

    if phase == Phase::Three {
        let factor = connection.line_to_phase_factor();
        primary_a *= factor;
        secondary_a *= factor;
    }

    LineCurrents {
        primary_a,
        secondary_a,
    }
}

/// Owned snapshot of a catalog gauge row, kept in result records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeRecord {
    pub designation: String,
    pub diameter_mm: f64,
    pub area_mm2: f64,
    pub resistance_ohm_per_km: f64,
}

impl From<&WireGauge> for GaugeRecord {
    fn from(gauge: &WireGauge) -> Self {
        Self {
            designation: gauge.designation.to_string(),
            diameter_mm: gauge.diameter_mm,
            area_mm2: gauge.area_mm2,
            resistance_ohm_per_km: gauge.resistance_ohm_per_km,
        }
    }
}

/// Litz construction for conductors too thick for the skin depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LitzBundle {
    pub strands: u32,
    pub strand_area_mm2: f64,
    pub strand_gauge: GaugeRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConductorSelection {
    pub area_mm2: f64,
    pub gauge: GaugeRecord,
    pub skin_depth_mm: f64,
    pub effective_radius_mm: f64,
    pub litz: Option<LitzBundle>,
}

/// Size a conductor for the given current: bare area from the current
/// density, snapped to the nearest catalog gauge. When the effective
/// radius exceeds twice the skin depth the conductor is split into a
/// Litz bundle of ceil((r/delta)²) strands, each re-snapped.
pub fn size_conductor(
    current_a: f64,
    current_density_a_mm2: f64,
    frequency_hz: f64,
) -> ConductorSelection {
    let area_mm2 = current_a / current_density_a_mm2;
    let gauge = nearest_gauge(area_mm2);

    let skin_depth_mm = SKIN_DEPTH_COEFF_MM / frequency_hz.sqrt();
    let effective_radius_mm = (area_mm2 / std::f64::consts::PI).sqrt();

    let litz = if effective_radius_mm > 2.0 * skin_depth_mm {
        let strands = ((effective_radius_mm / skin_depth_mm).powi(2)).ceil();
        let strand_area_mm2 = area_mm2 / strands;
        Some(LitzBundle {
            strands: strands as u32,
            strand_area_mm2,
            strand_gauge: nearest_gauge(strand_area_mm2).into(),
        })
    } else {
        None
    };

    ConductorSelection {
        area_mm2,
        gauge: gauge.into(),
        skin_depth_mm,
        effective_radius_mm,
        litz,
    }
}

/// Electrical build of one winding side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindingDesign {
    pub layout: WindingLayout,
    pub mean_turn_length_m: f64,
    pub resistance_ohm: f64,
    pub copper_loss_w: f64,
}

/// Lay the winding into the window and compute its DC resistance and
/// copper loss at the rated current.
pub fn design_winding(
    turns: f64,
    current_a: f64,
    conductor_area_mm2: f64,
    core: &CoreGeometry,
) -> WindingDesign {
    let layout = geometry::pack_winding(
        turns,
        conductor_area_mm2,
        core.window_width_mm,
        core.window_height_mm,
    );
    let mean_turn_length_m = geometry::mean_turn_length_m(
        core.shape,
        core.window_width_mm,
        core.window_height_mm,
        conductor_area_mm2,
    );

    let area_m2 = conductor_area_mm2 * 1e-6;
    let resistance_ohm = RHO_COPPER_OHM_M * mean_turn_length_m * turns / area_m2;
    let copper_loss_w = current_a * current_a * resistance_ohm;

    WindingDesign {
        layout,
        mean_turn_length_m,
        resistance_ohm,
        copper_loss_w,
    }
}
