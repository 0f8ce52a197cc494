//! Phase configuration and three-phase connection types.

use serde::{Deserialize, Serialize};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    Single,
    #[default]
    Three,
}

impl Phase {
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Single => "Single Phase",
            Phase::Three => "Three Phase",
        }
    }

    /// Divisor applied to rated power when computing line currents.
    pub fn phase_factor(&self) -> f64 {
        match self {
            Phase::Single => 1.0,
            Phase::Three => 3.0,
        }
    }
}

impl std::str::FromStr for Phase {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SINGLE" | "SINGLE PHASE" | "1" => Ok(Phase::Single),
            "THREE" | "THREE PHASE" | "3" => Ok(Phase::Three),
            _ => Err("unknown phase configuration"),
        }
    }
}

/// Three-phase winding connection. Each member carries its line-to-phase
/// factor explicitly: connections with a wye side divide turns (and
/// multiply currents) by sqrt(3), delta and zig-zag connections do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConnectionType {
    DeltaDelta,
    #[default]
    DeltaWye,
    WyeDelta,
    WyeWye,
    ZigZag,
}

impl ConnectionType {
    pub const ALL: [ConnectionType; 5] = [
        ConnectionType::DeltaDelta,
        ConnectionType::DeltaWye,
        ConnectionType::WyeDelta,
        ConnectionType::WyeWye,
        ConnectionType::ZigZag,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ConnectionType::DeltaDelta => "Delta-Delta",
            ConnectionType::DeltaWye => "Delta-Wye",
            ConnectionType::WyeDelta => "Wye-Delta",
            ConnectionType::WyeWye => "Wye-Wye",
            ConnectionType::ZigZag => "Zigzag",
        }
    }

    pub fn line_to_phase_factor(&self) -> f64 {
        match self {
            ConnectionType::DeltaDelta => 1.0,
            ConnectionType::DeltaWye => SQRT_3,
            ConnectionType::WyeDelta => SQRT_3,
            ConnectionType::WyeWye => SQRT_3,
            ConnectionType::ZigZag => 1.0,
        }
    }
}

impl std::str::FromStr for ConnectionType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(['-', '/', ' '], "").as_str() {
            "DELTADELTA" | "DD" => Ok(ConnectionType::DeltaDelta),
            "DELTAWYE" | "DELTASTAR" | "DY" => Ok(ConnectionType::DeltaWye),
            "WYEDELTA" | "STARDELTA" | "YD" => Ok(ConnectionType::WyeDelta),
            "WYEWYE" | "STARSTAR" | "YY" => Ok(ConnectionType::WyeWye),
            "ZIGZAG" | "ZZ" => Ok(ConnectionType::ZigZag),
            _ => Err("unknown connection type"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wye_sides_get_sqrt3() {
        assert_eq!(ConnectionType::DeltaDelta.line_to_phase_factor(), 1.0);
        assert_eq!(ConnectionType::ZigZag.line_to_phase_factor(), 1.0);
        for conn in [
            ConnectionType::DeltaWye,
            ConnectionType::WyeDelta,
            ConnectionType::WyeWye,
        ] {
            let f = conn.line_to_phase_factor();
            assert!((f * f - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn parse_compact_codes() {
        assert_eq!("Dy".parse::<ConnectionType>().unwrap(), ConnectionType::DeltaWye);
        assert_eq!("star-star".parse::<ConnectionType>().unwrap(), ConnectionType::WyeWye);
        assert_eq!("Zigzag".parse::<ConnectionType>().unwrap(), ConnectionType::ZigZag);
    }

    #[test]
    fn phase_factor_values() {
        assert_eq!(Phase::Single.phase_factor(), 1.0);
        assert_eq!(Phase::Three.phase_factor(), 3.0);
    }
}
