//! Winding construction types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WindingType {
    #[default]
    Layer,
    Helical,
    Disc,
    Foil,
    Interleaved,
}

impl WindingType {
    pub const ALL: [WindingType; 5] = [
        WindingType::Layer,
        WindingType::Helical,
        WindingType::Disc,
        WindingType::Foil,
        WindingType::Interleaved,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            WindingType::Layer => "Layer Winding",
            WindingType::Helical => "Helical Winding",
            WindingType::Disc => "Disc Winding",
            WindingType::Foil => "Foil Winding",
            WindingType::Interleaved => "Interleaved Winding",
        }
    }

    /// Window space factor kw (copper fraction of the core window).
    pub fn space_factor(&self) -> f64 {
        match self {
            WindingType::Layer => 0.30,
            WindingType::Helical => 0.35,
            WindingType::Disc => 0.40,
            WindingType::Foil => 0.45,
            WindingType::Interleaved => 0.50,
        }
    }
}

impl std::str::FromStr for WindingType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LAYER" | "LAYER WINDING" => Ok(WindingType::Layer),
            "HELICAL" | "HELICAL WINDING" => Ok(WindingType::Helical),
            "DISC" | "DISC WINDING" => Ok(WindingType::Disc),
            "FOIL" | "FOIL WINDING" => Ok(WindingType::Foil),
            "INTERLEAVED" | "INTERLEAVED WINDING" => Ok(WindingType::Interleaved),
            _ => Err("unknown winding type"),
        }
    }
}
