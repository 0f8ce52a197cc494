//! Cooling class definitions and per-class design values.

use serde::{Deserialize, Serialize};

/// Cooling classes. The oil classes follow the IEC four-letter code
/// (oil natural / oil forced, air natural / air forced).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoolingType {
    /// Oil natural, air natural
    #[default]
    Onan,
    /// Oil natural, air forced
    Onaf,
    /// Oil forced, air forced
    Ofaf,
    /// Dry type, natural ventilation
    DryType,
    /// Air natural (open frame)
    AirNatural,
    /// Air forced (fan cooled)
    AirForced,
    /// Water-cooled heat exchanger
    WaterCooled,
}

/// Mechanical-envelope family a cooling class belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoolingFamily {
    /// Tank, oil fill, radiators (ONAN/ONAF/OFAF).
    OilImmersed,
    /// Enclosure with vents or fans (everything else, including
    /// water-cooled units whose exchanger sits outside the enclosure).
    Dry,
}

impl CoolingType {
    pub const ALL: [CoolingType; 7] = [
        CoolingType::Onan,
        CoolingType::Onaf,
        CoolingType::Ofaf,
        CoolingType::DryType,
        CoolingType::AirNatural,
        CoolingType::AirForced,
        CoolingType::WaterCooled,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CoolingType::Onan => "ONAN",
            CoolingType::Onaf => "ONAF",
            CoolingType::Ofaf => "OFAF",
            CoolingType::DryType => "Dry Type",
            CoolingType::AirNatural => "AN",
            CoolingType::AirForced => "AF",
            CoolingType::WaterCooled => "Water Cooled",
        }
    }

    pub fn family(&self) -> CoolingFamily {
        match self {
            CoolingType::Onan | CoolingType::Onaf | CoolingType::Ofaf => CoolingFamily::OilImmersed,
            _ => CoolingFamily::Dry,
        }
    }

    /// Multiplier applied to the standard's base current density.
    pub fn current_density_factor(&self) -> f64 {
        match self {
            CoolingType::Onan => 1.0,
            CoolingType::Onaf => 1.2,
            CoolingType::Ofaf => 1.5,
            CoolingType::DryType => 0.8,
            CoolingType::AirNatural => 0.9,
            CoolingType::AirForced => 1.1,
            CoolingType::WaterCooled => 1.8,
        }
    }

    /// Effective surface heat-transfer coefficient [W/m²·°C] at sea level.
    pub fn heat_transfer_w_per_m2_c(&self) -> f64 {
        match self {
            CoolingType::Onan => 6.0,
            CoolingType::Onaf => 10.0,
            CoolingType::Ofaf => 15.0,
            CoolingType::DryType => 5.0,
            CoolingType::AirNatural => 5.5,
            CoolingType::AirForced => 8.0,
            CoolingType::WaterCooled => 20.0,
        }
    }

    /// Cooling-system cost coefficient [USD per VA of rated power].
    pub fn cost_usd_per_va(&self) -> f64 {
        match self {
            CoolingType::Onan => 0.10,
            CoolingType::Onaf => 0.15,
            CoolingType::Ofaf => 0.20,
            CoolingType::DryType => 0.05,
            CoolingType::AirNatural => 0.03,
            CoolingType::AirForced => 0.08,
            CoolingType::WaterCooled => 0.30,
        }
    }
}

impl std::str::FromStr for CoolingType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ONAN" => Ok(CoolingType::Onan),
            "ONAF" => Ok(CoolingType::Onaf),
            "OFAF" => Ok(CoolingType::Ofaf),
            "DRY TYPE" | "DRY" => Ok(CoolingType::DryType),
            "AN" | "AIR NATURAL" => Ok(CoolingType::AirNatural),
            "AF" | "AIR FORCED" => Ok(CoolingType::AirForced),
            "WATER COOLED" | "WATER" => Ok(CoolingType::WaterCooled),
            _ => Err("unknown cooling type"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oil_family_is_exactly_the_oil_classes() {
        for cooling in CoolingType::ALL {
            let oil = matches!(
                cooling,
                CoolingType::Onan | CoolingType::Onaf | CoolingType::Ofaf
            );
            assert_eq!(cooling.family() == CoolingFamily::OilImmersed, oil);
        }
    }

    #[test]
    fn water_cooled_is_dry_family() {
        // The water exchanger sits outside the winding enclosure, so the
        // envelope is the dry-type one.
        assert_eq!(CoolingType::WaterCooled.family(), CoolingFamily::Dry);
    }

    #[test]
    fn density_factor_ordering() {
        assert!(
            CoolingType::DryType.current_density_factor()
                < CoolingType::Onan.current_density_factor()
        );
        assert!(
            CoolingType::WaterCooled.current_density_factor()
                > CoolingType::Ofaf.current_density_factor()
        );
    }

    #[test]
    fn parse_display_names() {
        for cooling in CoolingType::ALL {
            let parsed = cooling
                .display_name()
                .parse::<CoolingType>()
                .expect("display name should parse");
            assert_eq!(parsed, cooling);
        }
    }
}
