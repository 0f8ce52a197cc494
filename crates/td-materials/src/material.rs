//! Core material definitions and per-material design values.

use crate::DesignStandard;
use serde::{Deserialize, Serialize};

/// Magnetic core materials covered by the design tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoreMaterial {
    /// Cold-rolled grain-oriented steel
    #[default]
    Crgo,
    /// Amorphous metal (metglas class)
    Amorphous,
    /// Non-oriented silicon steel
    SiliconSteel,
    /// Nanocrystalline alloy
    Nanocrystalline,
    /// High-permeability grain-oriented steel
    HighPermeability,
}

impl CoreMaterial {
    pub const ALL: [CoreMaterial; 5] = [
        CoreMaterial::Crgo,
        CoreMaterial::Amorphous,
        CoreMaterial::SiliconSteel,
        CoreMaterial::Nanocrystalline,
        CoreMaterial::HighPermeability,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CoreMaterial::Crgo => "CRGO Steel",
            CoreMaterial::Amorphous => "Amorphous Metal",
            CoreMaterial::SiliconSteel => "Silicon Steel",
            CoreMaterial::Nanocrystalline => "Nano-Crystalline",
            CoreMaterial::HighPermeability => "High Permeability Steel",
        }
    }

    /// Working peak flux density [T] recommended by the given standard.
    pub fn flux_density_t(&self, standard: DesignStandard) -> f64 {
        use DesignStandard::*;
        match standard {
            // BS EN 60076 adopts the IEC 60076 values unchanged.
            Iec60076 | BsEn60076 => match self {
                CoreMaterial::Crgo => 1.5,
                CoreMaterial::Amorphous => 1.3,
                CoreMaterial::SiliconSteel => 1.2,
                CoreMaterial::Nanocrystalline => 1.4,
                CoreMaterial::HighPermeability => 1.6,
            },
            AnsiC5712 => match self {
                CoreMaterial::Crgo => 1.4,
                CoreMaterial::Amorphous => 1.25,
                CoreMaterial::SiliconSteel => 1.1,
                CoreMaterial::Nanocrystalline => 1.35,
                CoreMaterial::HighPermeability => 1.5,
            },
            Is2026 => match self {
                CoreMaterial::Crgo => 1.45,
                CoreMaterial::Amorphous => 1.3,
                CoreMaterial::SiliconSteel => 1.15,
                CoreMaterial::Nanocrystalline => 1.4,
                CoreMaterial::HighPermeability => 1.55,
            },
            Gost11677 => match self {
                CoreMaterial::Crgo => 1.35,
                CoreMaterial::Amorphous => 1.2,
                CoreMaterial::SiliconSteel => 1.05,
                CoreMaterial::Nanocrystalline => 1.3,
                CoreMaterial::HighPermeability => 1.45,
            },
        }
    }

    /// Base conductor current density [A/mm²] before the cooling-class
    /// multiplier is applied.
    pub fn base_current_density_a_mm2(&self, standard: DesignStandard) -> f64 {
        use DesignStandard::*;
        match standard {
            Iec60076 | BsEn60076 => match self {
                CoreMaterial::Crgo => 3.0,
                CoreMaterial::Amorphous => 2.8,
                CoreMaterial::SiliconSteel => 2.5,
                CoreMaterial::Nanocrystalline => 3.2,
                CoreMaterial::HighPermeability => 3.5,
            },
            AnsiC5712 => match self {
                CoreMaterial::Crgo => 3.2,
                CoreMaterial::Amorphous => 3.0,
                CoreMaterial::SiliconSteel => 2.8,
                CoreMaterial::Nanocrystalline => 3.4,
                CoreMaterial::HighPermeability => 3.7,
            },
            Is2026 => match self {
                CoreMaterial::Crgo => 2.8,
                CoreMaterial::Amorphous => 2.6,
                CoreMaterial::SiliconSteel => 2.4,
                CoreMaterial::Nanocrystalline => 3.0,
                CoreMaterial::HighPermeability => 3.3,
            },
            Gost11677 => match self {
                CoreMaterial::Crgo => 2.7,
                CoreMaterial::Amorphous => 2.5,
                CoreMaterial::SiliconSteel => 2.3,
                CoreMaterial::Nanocrystalline => 2.9,
                CoreMaterial::HighPermeability => 3.1,
            },
        }
    }

    /// Lamination stacking factor k.
    pub fn stacking_factor(&self) -> f64 {
        match self {
            CoreMaterial::Crgo => 0.95,
            _ => 0.90,
        }
    }

    /// Specific core loss [W/kg] at 50 Hz and working flux density.
    pub fn loss_factor_w_per_kg(&self) -> f64 {
        match self {
            CoreMaterial::Crgo => 1.2,
            CoreMaterial::Amorphous => 0.3,
            CoreMaterial::SiliconSteel => 1.5,
            CoreMaterial::Nanocrystalline => 0.5,
            CoreMaterial::HighPermeability => 1.0,
        }
    }

    /// Raw-material price [USD/kg].
    pub fn price_usd_per_kg(&self) -> f64 {
        match self {
            CoreMaterial::Crgo => 3.5,
            CoreMaterial::Amorphous => 6.0,
            CoreMaterial::SiliconSteel => 2.5,
            CoreMaterial::Nanocrystalline => 8.0,
            CoreMaterial::HighPermeability => 4.5,
        }
    }

    /// (A, B) coefficients of the core sound-power curve
    /// A + B·log10(core weight in kg), referenced to 1.5 T / 50 Hz.
    pub fn noise_coefficients(&self) -> (f64, f64) {
        match self {
            CoreMaterial::Crgo => (30.0, 20.0),
            CoreMaterial::Amorphous => (25.0, 18.0),
            _ => (32.0, 22.0),
        }
    }
}

impl std::str::FromStr for CoreMaterial {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "").as_str() {
            "CRGO" | "CRGO STEEL" => Ok(CoreMaterial::Crgo),
            "AMORPHOUS" | "AMORPHOUS METAL" => Ok(CoreMaterial::Amorphous),
            "SILICON STEEL" | "SILICON" => Ok(CoreMaterial::SiliconSteel),
            "NANOCRYSTALLINE" | "NANO CRYSTALLINE" => Ok(CoreMaterial::Nanocrystalline),
            "HIGH PERMEABILITY STEEL" | "HIGH PERMEABILITY" | "HIPERM" => {
                Ok(CoreMaterial::HighPermeability)
            }
            _ => Err("unknown core material"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bs_en_matches_iec_values() {
        for material in CoreMaterial::ALL {
            assert_eq!(
                material.flux_density_t(DesignStandard::BsEn60076),
                material.flux_density_t(DesignStandard::Iec60076)
            );
            assert_eq!(
                material.base_current_density_a_mm2(DesignStandard::BsEn60076),
                material.base_current_density_a_mm2(DesignStandard::Iec60076)
            );
        }
    }

    #[test]
    fn gost_is_most_conservative_flux() {
        for material in CoreMaterial::ALL {
            let gost = material.flux_density_t(DesignStandard::Gost11677);
            for standard in DesignStandard::ALL {
                assert!(gost <= material.flux_density_t(standard));
            }
        }
    }

    #[test]
    fn stacking_factor_prefers_crgo() {
        assert_eq!(CoreMaterial::Crgo.stacking_factor(), 0.95);
        assert_eq!(CoreMaterial::SiliconSteel.stacking_factor(), 0.90);
    }

    #[test]
    fn parse_display_names() {
        for material in CoreMaterial::ALL {
            let parsed = material
                .display_name()
                .parse::<CoreMaterial>()
                .expect("display name should parse");
            assert_eq!(parsed, material);
        }
    }
}
