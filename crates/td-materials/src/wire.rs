/// One row of the standard wire gauge table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireGauge {
    pub designation: &'static str,
    pub diameter_mm: f64,
    pub area_mm2: f64,
    pub resistance_ohm_per_km: f64,
}

const SWG_CATALOG: [WireGauge; 34] = [
    WireGauge { designation: "4/0", diameter_mm: 11.684, area_mm2: 107.22, resistance_ohm_per_km: 0.160 },
    WireGauge { designation: "3/0", diameter_mm: 10.404, area_mm2: 85.01, resistance_ohm_per_km: 0.202 },
    WireGauge { designation: "2/0", diameter_mm: 9.266, area_mm2: 67.43, resistance_ohm_per_km: 0.255 },
    WireGauge { designation: "1/0", diameter_mm: 8.252, area_mm2: 53.48, resistance_ohm_per_km: 0.322 },
    WireGauge { designation: "1", diameter_mm: 7.348, area_mm2: 42.41, resistance_ohm_per_km: 0.406 },
    WireGauge { designation: "2", diameter_mm: 6.544, area_mm2: 33.63, resistance_ohm_per_km: 0.512 },
    WireGauge { designation: "3", diameter_mm: 5.827, area_mm2: 26.67, resistance_ohm_per_km: 0.646 },
    WireGauge { designation: "4", diameter_mm: 5.189, area_mm2: 21.15, resistance_ohm_per_km: 0.815 },
    WireGauge { designation: "5", diameter_mm: 4.621, area_mm2: 16.77, resistance_ohm_per_km: 1.028 },
    WireGauge { designation: "6", diameter_mm: 4.115, area_mm2: 13.30, resistance_ohm_per_km: 1.296 },
    WireGauge { designation: "7", diameter_mm: 3.665, area_mm2: 10.55, resistance_ohm_per_km: 1.634 },
    WireGauge { designation: "8", diameter_mm: 3.264, area_mm2: 8.37, resistance_ohm_per_km: 2.060 },
    WireGauge { designation: "9", diameter_mm: 2.906, area_mm2: 6.63, resistance_ohm_per_km: 2.599 },
    WireGauge { designation: "10", diameter_mm: 2.588, area_mm2: 5.26, resistance_ohm_per_km: 3.277 },
    WireGauge { designation: "11", diameter_mm: 2.305, area_mm2: 4.17, resistance_ohm_per_km: 4.132 },
    WireGauge { designation: "12", diameter_mm: 2.053, area_mm2: 3.31, resistance_ohm_per_km: 5.211 },
    WireGauge { designation: "13", diameter_mm: 1.828, area_mm2: 2.63, resistance_ohm_per_km: 6.571 },
    WireGauge { designation: "14", diameter_mm: 1.628, area_mm2: 2.08, resistance_ohm_per_km: 8.286 },
    WireGauge { designation: "15", diameter_mm: 1.450, area_mm2: 1.65, resistance_ohm_per_km: 10.45 },
    WireGauge { designation: "16", diameter_mm: 1.291, area_mm2: 1.31, resistance_ohm_per_km: 13.18 },
    WireGauge { designation: "17", diameter_mm: 1.150, area_mm2: 1.04, resistance_ohm_per_km: 16.62 },
    WireGauge { designation: "18", diameter_mm: 1.024, area_mm2: 0.82, resistance_ohm_per_km: 20.96 },
    WireGauge { designation: "19", diameter_mm: 0.912, area_mm2: 0.65, resistance_ohm_per_km: 26.43 },
    WireGauge { designation: "20", diameter_mm: 0.812, area_mm2: 0.52, resistance_ohm_per_km: 33.33 },
    WireGauge { designation: "21", diameter_mm: 0.723, area_mm2: 0.41, resistance_ohm_per_km: 42.03 },
    WireGauge { designation: "22", diameter_mm: 0.644, area_mm2: 0.33, resistance_ohm_per_km: 53.00 },
    WireGauge { designation: "23", diameter_mm: 0.573, area_mm2: 0.26, resistance_ohm_per_km: 66.84 },
    WireGauge { designation: "24", diameter_mm: 0.511, area_mm2: 0.20, resistance_ohm_per_km: 84.29 },
    WireGauge { designation: "25", diameter_mm: 0.455, area_mm2: 0.16, resistance_ohm_per_km: 106.3 },
    WireGauge { designation: "26", diameter_mm: 0.405, area_mm2: 0.13, resistance_ohm_per_km: 134.0 },
    WireGauge { designation: "27", diameter_mm: 0.361, area_mm2: 0.10, resistance_ohm_per_km: 169.0 },
    WireGauge { designation: "28", diameter_mm: 0.321, area_mm2: 0.08, resistance_ohm_per_km: 213.1 },
    WireGauge { designation: "29", diameter_mm: 0.286, area_mm2: 0.06, resistance_ohm_per_km: 268.7 },
    WireGauge { designation: "30", diameter_mm: 0.255, area_mm2: 0.05, resistance_ohm_per_km: 338.8 },
];

pub fn swg_catalog() -> &'static [WireGauge] {
    &SWG_CATALOG
}

/// Nearest catalog row by absolute area distance. Ties keep the earlier
/// (heavier) row, matching the table order.
pub fn nearest_gauge(area_mm2: f64) -> &'static WireGauge {
    let mut best = &SWG_CATALOG[0];
    let mut best_dist = (best.area_mm2 - area_mm2).abs();
    for gauge in &SWG_CATALOG[1..] {
        let dist = (gauge.area_mm2 - area_mm2).abs();
        if dist < best_dist {
            best = gauge;
            best_dist = dist;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn designations_are_unique() {
        let mut seen = HashSet::new();
        for gauge in swg_catalog() {
            assert!(
                seen.insert(gauge.designation),
                "duplicate designation: {}",
                gauge.designation
            );
        }
    }

    #[test]
    fn areas_strictly_decrease() {
        for pair in swg_catalog().windows(2) {
            assert!(pair[0].area_mm2 > pair[1].area_mm2);
        }
    }

    #[test]
    fn exact_area_matches_row() {
        let g = nearest_gauge(5.26);
        assert_eq!(g.designation, "10");
        let g = nearest_gauge(107.22);
        assert_eq!(g.designation, "4/0");
    }

    #[test]
    fn nearest_prefers_closer_row() {
        // 0.9 is closer to SWG 18 (0.82) than SWG 17 (1.04)
        assert_eq!(nearest_gauge(0.9).designation, "18");
        // far beyond the table clamps to the extremes
        assert_eq!(nearest_gauge(500.0).designation, "4/0");
        assert_eq!(nearest_gauge(0.001).designation, "30");
    }

    #[test]
    fn tie_breaks_to_earlier_row() {
        // 0.055 is equidistant from SWG 29 (0.06) and SWG 30 (0.05)
        assert_eq!(nearest_gauge(0.055).designation, "29");
    }

    proptest! {
        #[test]
        fn snapping_is_idempotent(index in 0usize..34) {
            let gauge = &swg_catalog()[index];
            let resnapped = nearest_gauge(gauge.area_mm2);
            prop_assert_eq!(resnapped.designation, gauge.designation);
        }
    }
}
