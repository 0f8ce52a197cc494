//! Design standard definitions.

use serde::{Deserialize, Serialize};

/// National/international transformer design standards carried by the
/// flux-density and current-density tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DesignStandard {
    /// IEC 60076 (international)
    #[default]
    Iec60076,
    /// ANSI C57.12 (North America)
    AnsiC5712,
    /// IS 2026 (India)
    Is2026,
    /// BS EN 60076 (UK edition of IEC 60076, same design values)
    BsEn60076,
    /// GOST 11677 (Russia)
    Gost11677,
}

impl DesignStandard {
    pub const ALL: [DesignStandard; 5] = [
        DesignStandard::Iec60076,
        DesignStandard::AnsiC5712,
        DesignStandard::Is2026,
        DesignStandard::BsEn60076,
        DesignStandard::Gost11677,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DesignStandard::Iec60076 => "IEC 60076",
            DesignStandard::AnsiC5712 => "ANSI C57.12",
            DesignStandard::Is2026 => "IS 2026",
            DesignStandard::BsEn60076 => "BS EN 60076",
            DesignStandard::Gost11677 => "GOST 11677",
        }
    }
}

impl std::str::FromStr for DesignStandard {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace([' ', '-'], "").as_str() {
            "IEC60076" | "IEC" => Ok(DesignStandard::Iec60076),
            "ANSIC57.12" | "ANSIC5712" | "ANSI" | "IEEEC57.12" => Ok(DesignStandard::AnsiC5712),
            "IS2026" | "IS" => Ok(DesignStandard::Is2026),
            "BSEN60076" | "BSEN" | "BS" => Ok(DesignStandard::BsEn60076),
            "GOST11677" | "GOST" => Ok(DesignStandard::Gost11677),
            _ => Err("unknown design standard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!(
            "IEC 60076".parse::<DesignStandard>().unwrap(),
            DesignStandard::Iec60076
        );
        assert_eq!(
            "ansi c57.12".parse::<DesignStandard>().unwrap(),
            DesignStandard::AnsiC5712
        );
        assert_eq!(
            "GOST".parse::<DesignStandard>().unwrap(),
            DesignStandard::Gost11677
        );
        assert!("DIN 42500".parse::<DesignStandard>().is_err());
    }

    #[test]
    fn display_name_roundtrip() {
        for standard in DesignStandard::ALL {
            let parsed = standard
                .display_name()
                .parse::<DesignStandard>()
                .expect("display name should parse");
            assert_eq!(parsed, standard);
        }
    }
}
