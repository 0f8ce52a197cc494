//! Transformer service classes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransformerType {
    #[default]
    Distribution,
    Power,
    Instrument,
    Auto,
    Isolation,
    Rectifier,
    PhaseShifting,
}

impl TransformerType {
    pub const ALL: [TransformerType; 7] = [
        TransformerType::Distribution,
        TransformerType::Power,
        TransformerType::Instrument,
        TransformerType::Auto,
        TransformerType::Isolation,
        TransformerType::Rectifier,
        TransformerType::PhaseShifting,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TransformerType::Distribution => "Distribution Transformer",
            TransformerType::Power => "Power Transformer",
            TransformerType::Instrument => "Instrument Transformer",
            TransformerType::Auto => "Autotransformer",
            TransformerType::Isolation => "Isolation Transformer",
            TransformerType::Rectifier => "Rectifier Transformer",
            TransformerType::PhaseShifting => "Phase Shifting Transformer",
        }
    }

    /// Labor multiplier applied to the material cost.
    pub fn labor_factor(&self) -> f64 {
        match self {
            TransformerType::Distribution => 1.0,
            TransformerType::Power => 1.5,
            TransformerType::Instrument => 2.0,
            TransformerType::Auto => 0.8,
            TransformerType::Isolation => 1.2,
            TransformerType::Rectifier => 1.3,
            TransformerType::PhaseShifting => 2.5,
        }
    }
}

impl std::str::FromStr for TransformerType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.trim_end_matches(" TRANSFORMER") {
            "DISTRIBUTION" => Ok(TransformerType::Distribution),
            "POWER" => Ok(TransformerType::Power),
            "INSTRUMENT" => Ok(TransformerType::Instrument),
            "AUTO" | "AUTOTRANSFORMER" => Ok(TransformerType::Auto),
            "ISOLATION" => Ok(TransformerType::Isolation),
            "RECTIFIER" => Ok(TransformerType::Rectifier),
            "PHASE SHIFTING" | "PHASE-SHIFTING" => Ok(TransformerType::PhaseShifting),
            _ => Err("unknown transformer type"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labor_factor_extremes() {
        assert_eq!(TransformerType::Auto.labor_factor(), 0.8);
        assert_eq!(TransformerType::PhaseShifting.labor_factor(), 2.5);
    }

    #[test]
    fn parse_display_names() {
        for t in TransformerType::ALL {
            let parsed = t
                .display_name()
                .parse::<TransformerType>()
                .expect("display name should parse");
            assert_eq!(parsed, t);
        }
    }
}
