//! Core dimension synthesis and winding-space layout.

use serde::{Deserialize, Serialize};
use td_materials::CoreShape;
use uom::si::length::meter;

/// Synthesized core geometry. Linear dimensions are strictly positive for
/// any positive power; `yoke_height_mm` is zero only for toroids.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreGeometry {
    pub shape: CoreShape,
    pub net_area_cm2: f64,
    pub gross_area_cm2: f64,
    pub width_mm: f64,
    pub depth_mm: f64,
    pub window_width_mm: f64,
    pub window_height_mm: f64,
    pub yoke_height_mm: f64,
    pub building_factor: f64,
}

impl CoreGeometry {
    /// Exposed cooling surface of the core box [m²]: the three face pairs
    /// of width x depth x window height.
    pub fn surface_area_m2(&self) -> f64 {
        let w = td_core::mm(self.width_mm).get::<meter>();
        let d = td_core::mm(self.depth_mm).get::<meter>();
        let h = td_core::mm(self.window_height_mm).get::<meter>();
        2.0 * (w * d + w * h + d * h)
    }
}

/// Empirical sizing rule: net core area scales with the square root of
/// rated power, with a smaller constant below 1 kVA.
pub fn size_core(power_va: f64, stacking_factor: f64, shape: CoreShape) -> CoreGeometry {
    let k_area = if power_va < 1000.0 { 0.9 } else { 1.1 };
    let net_area_cm2 = k_area * power_va.sqrt();
    let gross_area_cm2 = net_area_cm2 / stacking_factor;

    // Per-shape proportionality constants, all referenced to the central
    // limb width (or the mean diameter for toroids). Empirical design
    // rules, not derived quantities.
    let (width_mm, depth_mm, window_width_mm, window_height_mm, yoke_height_mm, building_factor) =
        match shape {
            CoreShape::Ei => {
                let w = gross_area_cm2.sqrt() * 10.0;
                (w, w, 0.6 * w, 1.8 * w, 0.7 * w, 1.15)
            }
            CoreShape::Ui => {
                let w = (gross_area_cm2 * 1.2).sqrt() * 10.0;
                (w, 0.8 * w, 0.5 * w, 1.5 * w, 0.6 * w, 1.20)
            }
            CoreShape::C => {
                let w = gross_area_cm2.sqrt() * 10.0;
                (w, 0.7 * w, 0.4 * w, 1.3 * w, 0.5 * w, 1.25)
            }
            CoreShape::Toroidal => {
                let mean_diameter = (4.0 * net_area_cm2 / std::f64::consts::PI).sqrt() * 10.0;
                let w = 0.3 * mean_diameter;
                // window height doubles as the axial build
                (w, w, 0.7 * mean_diameter, w, 0.0, 1.00)
            }
            CoreShape::Shell => {
                let w = (gross_area_cm2 * 1.5).sqrt() * 10.0;
                (w, 0.6 * w, 0.4 * w, 1.2 * w, 0.5 * w, 1.30)
            }
            CoreShape::Berry => {
                let w = (gross_area_cm2 * 2.0).sqrt() * 10.0;
                (w, 0.5 * w, 0.3 * w, 1.0 * w, 0.4 * w, 1.40)
            }
        };

    CoreGeometry {
        shape,
        net_area_cm2,
        gross_area_cm2,
        width_mm,
        depth_mm,
        window_width_mm,
        window_height_mm,
        yoke_height_mm,
        building_factor,
    }
}

/// Winding layout inside the core window. Vertical stacks layers along
/// the window height; horizontal runs rows across the window width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "orientation")]
pub enum WindingLayout {
    Vertical {
        turns_per_layer: u32,
        layers: u32,
        height_mm: f64,
        radial_build_mm: f64,
    },
    Horizontal {
        turns_per_row: u32,
        rows: u32,
        height_mm: f64,
        radial_build_mm: f64,
    },
}

impl WindingLayout {
    pub fn height_mm(&self) -> f64 {
        match self {
            WindingLayout::Vertical { height_mm, .. } => *height_mm,
            WindingLayout::Horizontal { height_mm, .. } => *height_mm,
        }
    }

    pub fn radial_build_mm(&self) -> f64 {
        match self {
            WindingLayout::Vertical {
                radial_build_mm, ..
            } => *radial_build_mm,
            WindingLayout::Horizontal {
                radial_build_mm, ..
            } => *radial_build_mm,
        }
    }
}

/// Pack `turns` conductors of the given bare area into the window.
/// 90% of each window dimension is usable; the 1.1 factor covers turn
/// insulation. Vertical layering is preferred whenever it fits both ways.
pub fn pack_winding(
    turns: f64,
    conductor_area_mm2: f64,
    window_width_mm: f64,
    window_height_mm: f64,
) -> WindingLayout {
    let wire_mm = conductor_area_mm2.sqrt();

    let turns_per_layer = ((0.9 * window_height_mm) / wire_mm).floor().max(1.0);
    let layers = (turns / turns_per_layer).ceil();
    let stack_height_mm = layers * wire_mm * 1.1;

    let turns_per_row = ((0.9 * window_width_mm) / wire_mm).floor().max(1.0);
    let rows = (turns / turns_per_row).ceil();
    let stack_thickness_mm = rows * wire_mm * 1.1;

    if stack_height_mm <= window_height_mm && stack_thickness_mm <= window_width_mm {
        WindingLayout::Vertical {
            turns_per_layer: turns_per_layer as u32,
            layers: layers as u32,
            height_mm: stack_height_mm,
            radial_build_mm: wire_mm * 1.1,
        }
    } else {
        WindingLayout::Horizontal {
            turns_per_row: turns_per_row as u32,
            rows: rows as u32,
            height_mm: wire_mm * 1.1,
            radial_build_mm: stack_thickness_mm,
        }
    }
}

/// Mean length of one turn [m]. Toroids wrap around the window plus the
/// conductor itself; every other shape approximates the window perimeter.
pub fn mean_turn_length_m(
    shape: CoreShape,
    window_width_mm: f64,
    window_height_mm: f64,
    conductor_area_mm2: f64,
) -> f64 {
    match shape {
        CoreShape::Toroidal => {
            let mean_diameter_m = (window_width_mm + conductor_area_mm2.sqrt()) / 1000.0;
            std::f64::consts::PI * mean_diameter_m
        }
        _ => 2.0 * (window_width_mm + window_height_mm) / 1000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ei_core_proportions() {
        let g = size_core(100_000.0, 0.95, CoreShape::Ei);
        // Ac = 1.1 * sqrt(100000)
        assert!((g.net_area_cm2 - 347.85).abs() < 0.01);
        assert!((g.gross_area_cm2 - g.net_area_cm2 / 0.95).abs() < 1e-9);
        assert_eq!(g.width_mm, g.depth_mm);
        assert!((g.window_width_mm - 0.6 * g.width_mm).abs() < 1e-9);
        assert!((g.window_height_mm - 1.8 * g.width_mm).abs() < 1e-9);
        assert!((g.yoke_height_mm - 0.7 * g.width_mm).abs() < 1e-9);
        assert_eq!(g.building_factor, 1.15);
    }

    #[test]
    fn small_power_uses_smaller_area_constant() {
        let g = size_core(900.0, 0.90, CoreShape::Ei);
        assert!((g.net_area_cm2 - 0.9 * 30.0).abs() < 1e-9);
    }

    #[test]
    fn gross_always_exceeds_net() {
        for shape in CoreShape::ALL {
            for k in [0.90, 0.95] {
                let g = size_core(50_000.0, k, shape);
                assert!(g.gross_area_cm2 >= g.net_area_cm2);
                assert!(g.width_mm > 0.0);
                assert!(g.depth_mm > 0.0);
                assert!(g.window_width_mm > 0.0);
                assert!(g.window_height_mm > 0.0);
            }
        }
    }

    #[test]
    fn toroid_has_no_yoke() {
        let g = size_core(25_000.0, 0.95, CoreShape::Toroidal);
        assert_eq!(g.yoke_height_mm, 0.0);
        assert_eq!(g.building_factor, 1.0);
        assert_eq!(g.window_height_mm, g.depth_mm);
    }

    #[test]
    fn berry_has_highest_building_factor() {
        let factors: Vec<f64> = CoreShape::ALL
            .iter()
            .map(|&s| size_core(10_000.0, 0.95, s).building_factor)
            .collect();
        let max = factors.iter().cloned().fold(f64::MIN, f64::max);
        assert_eq!(
            size_core(10_000.0, 0.95, CoreShape::Berry).building_factor,
            max
        );
    }

    #[test]
    fn surface_area_of_unit_box() {
        let g = CoreGeometry {
            shape: CoreShape::Ei,
            net_area_cm2: 1.0,
            gross_area_cm2: 1.0,
            width_mm: 1000.0,
            depth_mm: 1000.0,
            window_width_mm: 1.0,
            window_height_mm: 1000.0,
            yoke_height_mm: 1.0,
            building_factor: 1.15,
        };
        assert!((g.surface_area_m2() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn packing_prefers_vertical_when_it_fits() {
        // 100 turns of 4 mm² wire in a 100 x 300 window:
        // 135 turns/layer -> 1 layer, 2.2 mm stack, easily vertical
        let layout = pack_winding(100.0, 4.0, 100.0, 300.0);
        match layout {
            WindingLayout::Vertical {
                turns_per_layer,
                layers,
                ..
            } => {
                assert_eq!(turns_per_layer, 135);
                assert_eq!(layers, 1);
            }
            WindingLayout::Horizontal { .. } => panic!("expected vertical layout"),
        }
    }

    #[test]
    fn packing_falls_back_to_horizontal() {
        // Tall stack of thick conductor in a wide shallow window.
        let layout = pack_winding(2000.0, 100.0, 400.0, 60.0);
        match layout {
            WindingLayout::Horizontal { turns_per_row, rows, .. } => {
                // floor(0.9*400/10) = 36 per row
                assert_eq!(turns_per_row, 36);
                assert_eq!(rows, 56);
            }
            WindingLayout::Vertical { .. } => panic!("expected horizontal layout"),
        }
    }

    #[test]
    fn mean_turn_length_window_perimeter() {
        let lmt = mean_turn_length_m(CoreShape::Ei, 60.0, 180.0, 4.0);
        assert!((lmt - 0.48).abs() < 1e-12);
        // shell uses the same perimeter rule
        assert_eq!(
            mean_turn_length_m(CoreShape::Shell, 60.0, 180.0, 4.0),
            lmt
        );
    }

    #[test]
    fn mean_turn_length_toroidal() {
        let lmt = mean_turn_length_m(CoreShape::Toroidal, 70.0, 30.0, 4.0);
        let expected = std::f64::consts::PI * (70.0 + 2.0) / 1000.0;
        assert!((lmt - expected).abs() < 1e-12);
    }
}
