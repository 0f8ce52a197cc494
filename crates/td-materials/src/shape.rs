//! Core shape topologies.
//!
//! The per-shape proportionality constants live with the geometry model;
//! this enum only names the topology so spec files, results and diagrams
//! can tag it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoreShape {
    /// EI lamination stack, square central limb
    #[default]
    Ei,
    /// UI lamination stack, rectangular central limb
    Ui,
    /// Wound C core with rounded corners
    C,
    /// Toroidal wound core
    Toroidal,
    /// Shell type, three limbs
    Shell,
    /// Berry type, distributed core
    Berry,
}

impl CoreShape {
    pub const ALL: [CoreShape; 6] = [
        CoreShape::Ei,
        CoreShape::Ui,
        CoreShape::C,
        CoreShape::Toroidal,
        CoreShape::Shell,
        CoreShape::Berry,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CoreShape::Ei => "EI Core",
            CoreShape::Ui => "UI Core",
            CoreShape::C => "C Core",
            CoreShape::Toroidal => "Toroidal",
            CoreShape::Shell => "Shell Type",
            CoreShape::Berry => "Berry Type",
        }
    }
}

impl std::str::FromStr for CoreShape {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EI" | "EI CORE" => Ok(CoreShape::Ei),
            "UI" | "UI CORE" => Ok(CoreShape::Ui),
            "C" | "C CORE" => Ok(CoreShape::C),
            "TOROIDAL" | "TOROID" | "TOROIDAL CORE" => Ok(CoreShape::Toroidal),
            "SHELL" | "SHELL TYPE" => Ok(CoreShape::Shell),
            "BERRY" | "BERRY TYPE" => Ok(CoreShape::Berry),
            _ => Err("unknown core shape"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display_names() {
        for shape in CoreShape::ALL {
            let parsed = shape
                .display_name()
                .parse::<CoreShape>()
                .expect("display name should parse");
            assert_eq!(parsed, shape);
        }
    }
}
