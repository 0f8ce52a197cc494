//! Validated input specification for a transformer design.

use crate::error::DesignError;
use serde::{Deserialize, Serialize};
use td_core::numeric::ensure_positive;
use td_materials::{
    ConnectionType, CoolingType, CoreMaterial, CoreShape, DesignStandard, Phase, TransformerType,
    WindingType,
};

/// Optional design caps checked by the optimizer. The temperature rise
/// limit is always active; the rest only constrain when set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignLimits {
    pub max_temp_rise_c: f64,
    pub max_losses_w: Option<f64>,
    pub max_weight_kg: Option<f64>,
    pub max_cost_usd: Option<f64>,
    pub noise_limit_db: Option<f64>,
}

impl Default for DesignLimits {
    fn default() -> Self {
        Self {
            max_temp_rise_c: 65.0,
            max_losses_w: None,
            max_weight_kg: None,
            max_cost_usd: None,
            noise_limit_db: None,
        }
    }
}

/// Electrical rating and construction choices for one design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignSpec {
    pub power_va: f64,
    pub primary_voltage_v: f64,
    pub secondary_voltage_v: f64,
    pub frequency_hz: f64,
    pub phase: Phase,
    pub connection: ConnectionType,
    pub transformer_type: TransformerType,
    pub standard: DesignStandard,
    pub core_material: CoreMaterial,
    pub core_shape: CoreShape,
    pub winding_type: WindingType,
    pub cooling: CoolingType,
    pub target_efficiency: f64,
    pub regulation: f64,
    pub ambient_c: f64,
    pub altitude_m: f64,
    pub harmonic_factor: f64,
    #[serde(default)]
    pub limits: DesignLimits,
}

impl DesignSpec {
    /// Spec with the rating filled in and everything else at its
    /// conventional default: IEC 60076 distribution unit, CRGO EI core,
    /// layer winding, ONAN cooling, 50 Hz three-phase delta-wye.
    pub fn new(power_va: f64, primary_voltage_v: f64, secondary_voltage_v: f64) -> Self {
        Self {
            power_va,
            primary_voltage_v,
            secondary_voltage_v,
            frequency_hz: 50.0,
            phase: Phase::default(),
            connection: ConnectionType::default(),
            transformer_type: TransformerType::default(),
            standard: DesignStandard::default(),
            core_material: CoreMaterial::default(),
            core_shape: CoreShape::default(),
            winding_type: WindingType::default(),
            cooling: CoolingType::default(),
            target_efficiency: 0.95,
            regulation: 0.05,
            ambient_c: 30.0,
            altitude_m: 0.0,
            harmonic_factor: 1.0,
            limits: DesignLimits::default(),
        }
    }

    /// Check the spec before evaluation. Every numeric field must be
    /// finite and inside its physical domain; the thermal model in
    /// particular requires the altitude to stay below 9000 m.
    pub fn validate(&self) -> Result<(), DesignError> {
        require_positive("power_va", self.power_va)?;
        require_positive("primary_voltage_v", self.primary_voltage_v)?;
        require_positive("secondary_voltage_v", self.secondary_voltage_v)?;
        require_positive("frequency_hz", self.frequency_hz)?;

        if !self.target_efficiency.is_finite()
            || self.target_efficiency <= 0.0
            || self.target_efficiency >= 1.0
        {
            return Err(spec_err(format!(
                "target_efficiency must be in (0, 1), got {}",
                self.target_efficiency
            )));
        }
        if !self.regulation.is_finite() || self.regulation < 0.0 || self.regulation >= 1.0 {
            return Err(spec_err(format!(
                "regulation must be in [0, 1), got {}",
                self.regulation
            )));
        }
        if !self.ambient_c.is_finite() || self.ambient_c < -60.0 || self.ambient_c > 80.0 {
            return Err(spec_err(format!(
                "ambient_c must be between -60 and 80, got {}",
                self.ambient_c
            )));
        }
        if !self.altitude_m.is_finite() || self.altitude_m < 0.0 || self.altitude_m >= 9000.0 {
            return Err(spec_err(format!(
                "altitude_m must be in [0, 9000), got {}",
                self.altitude_m
            )));
        }
        if !self.harmonic_factor.is_finite() || self.harmonic_factor < 1.0 {
            return Err(spec_err(format!(
                "harmonic_factor must be >= 1, got {}",
                self.harmonic_factor
            )));
        }

        require_positive("limits.max_temp_rise_c", self.limits.max_temp_rise_c)?;
        for (name, cap) in [
            ("limits.max_losses_w", self.limits.max_losses_w),
            ("limits.max_weight_kg", self.limits.max_weight_kg),
            ("limits.max_cost_usd", self.limits.max_cost_usd),
            ("limits.noise_limit_db", self.limits.noise_limit_db),
        ] {
            if let Some(value) = cap {
                require_positive(name, value)?;
            }
        }

        Ok(())
    }
}

fn spec_err(what: String) -> DesignError {
    DesignError::Spec { what }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), DesignError> {
    ensure_positive(value, name)
        .map_err(|_| spec_err(format!("{name} must be positive, got {value}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_validates() {
        let spec = DesignSpec::new(100_000.0, 11_000.0, 415.0);
        assert!(spec.validate().is_ok());
        assert_eq!(spec.frequency_hz, 50.0);
        assert_eq!(spec.cooling, CoolingType::Onan);
        assert_eq!(spec.limits.max_temp_rise_c, 65.0);
    }

    #[test]
    fn rejects_nonpositive_rating() {
        let spec = DesignSpec::new(0.0, 11_000.0, 415.0);
        assert!(spec.validate().is_err());
        let spec = DesignSpec::new(100_000.0, -11_000.0, 415.0);
        assert!(spec.validate().is_err());
    }

    #[test]
    fn rejects_stratospheric_altitude() {
        let mut spec = DesignSpec::new(100_000.0, 11_000.0, 415.0);
        spec.altitude_m = 9000.0;
        assert!(spec.validate().is_err());
        spec.altitude_m = 8999.0;
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn rejects_subunity_harmonic_factor() {
        let mut spec = DesignSpec::new(100_000.0, 11_000.0, 415.0);
        spec.harmonic_factor = 0.9;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn rejects_nonpositive_caps() {
        let mut spec = DesignSpec::new(100_000.0, 11_000.0, 415.0);
        spec.limits.max_losses_w = Some(0.0);
        assert!(spec.validate().is_err());
        spec.limits.max_losses_w = Some(2000.0);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn limits_default_from_serde() {
        let yaml = r#"
power_va: 50000.0
primary_voltage_v: 6600.0
secondary_voltage_v: 415.0
frequency_hz: 50.0
phase: Three
connection: DeltaWye
transformer_type: Distribution
standard: Iec60076
core_material: Crgo
core_shape: Ei
winding_type: Layer
cooling: Onan
target_efficiency: 0.95
regulation: 0.05
ambient_c: 30.0
altitude_m: 0.0
harmonic_factor: 1.0
"#;
        let spec: DesignSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.limits.max_temp_rise_c, 65.0);
        assert!(spec.limits.max_losses_w.is_none());
    }
}
