//! Design document schema.
//!
//! A `SpecFile` is the on-disk form of a design request. Only the rating
//! fields are required; every other field falls back to the conventional
//! default through its serde attribute, so a minimal document is three
//! lines of YAML. Enumerated choices use the shared vocabulary enums, and
//! unknown variant strings fail at parse time.

use serde::{Deserialize, Serialize};
use td_design::{DesignLimits, DesignSpec};
use td_materials::{
    ConnectionType, CoolingType, CoreMaterial, CoreShape, DesignStandard, Phase, TransformerType,
    WindingType,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecFile {
    /// Free-form project label, shown in report headers and store manifests.
    #[serde(default)]
    pub name: String,
    pub power_va: f64,
    pub primary_voltage_v: f64,
    pub secondary_voltage_v: f64,
    #[serde(default = "default_frequency_hz")]
    pub frequency_hz: f64,
    #[serde(default)]
    pub phase: Phase,
    #[serde(default)]
    pub connection: ConnectionType,
    #[serde(default)]
    pub transformer_type: TransformerType,
    #[serde(default)]
    pub standard: DesignStandard,
    #[serde(default)]
    pub core_material: CoreMaterial,
    #[serde(default)]
    pub core_shape: CoreShape,
    #[serde(default)]
    pub winding_type: WindingType,
    #[serde(default)]
    pub cooling: CoolingType,
    #[serde(default = "default_target_efficiency")]
    pub target_efficiency: f64,
    #[serde(default = "default_regulation")]
    pub regulation: f64,
    #[serde(default = "default_ambient_c")]
    pub ambient_c: f64,
    #[serde(default)]
    pub altitude_m: f64,
    #[serde(default = "default_harmonic_factor")]
    pub harmonic_factor: f64,
    #[serde(default)]
    pub limits: LimitsDef,
}

/// Optional design caps. A partial block is fine; the temperature rise
/// cap falls back to 65 °C on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitsDef {
    #[serde(default = "default_max_temp_rise_c")]
    pub max_temp_rise_c: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_losses_w: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cost_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_limit_db: Option<f64>,
}

impl Default for LimitsDef {
    fn default() -> Self {
        Self {
            max_temp_rise_c: default_max_temp_rise_c(),
            max_losses_w: None,
            max_weight_kg: None,
            max_cost_usd: None,
            noise_limit_db: None,
        }
    }
}

impl SpecFile {
    /// Document with the rating filled in and everything else at its
    /// schema default.
    pub fn new(power_va: f64, primary_voltage_v: f64, secondary_voltage_v: f64) -> Self {
        Self {
            name: String::new(),
            power_va,
            primary_voltage_v,
            secondary_voltage_v,
            frequency_hz: default_frequency_hz(),
            phase: Phase::default(),
            connection: ConnectionType::default(),
            transformer_type: TransformerType::default(),
            standard: DesignStandard::default(),
            core_material: CoreMaterial::default(),
            core_shape: CoreShape::default(),
            winding_type: WindingType::default(),
            cooling: CoolingType::default(),
            target_efficiency: default_target_efficiency(),
            regulation: default_regulation(),
            ambient_c: default_ambient_c(),
            altitude_m: 0.0,
            harmonic_factor: default_harmonic_factor(),
            limits: LimitsDef::default(),
        }
    }

    /// Turn the document into the engine-facing spec.
    pub fn compile(&self) -> DesignSpec {
        DesignSpec {
            power_va: self.power_va,
            primary_voltage_v: self.primary_voltage_v,
            secondary_voltage_v: self.secondary_voltage_v,
            frequency_hz: self.frequency_hz,
            phase: self.phase,
            connection: self.connection,
            transformer_type: self.transformer_type,
            standard: self.standard,
            core_material: self.core_material,
            core_shape: self.core_shape,
            winding_type: self.winding_type,
            cooling: self.cooling,
            target_efficiency: self.target_efficiency,
            regulation: self.regulation,
            ambient_c: self.ambient_c,
            altitude_m: self.altitude_m,
            harmonic_factor: self.harmonic_factor,
            limits: DesignLimits {
                max_temp_rise_c: self.limits.max_temp_rise_c,
                max_losses_w: self.limits.max_losses_w,
                max_weight_kg: self.limits.max_weight_kg,
                max_cost_usd: self.limits.max_cost_usd,
                noise_limit_db: self.limits.noise_limit_db,
            },
        }
    }
}

fn default_frequency_hz() -> f64 {
    50.0
}

fn default_target_efficiency() -> f64 {
    0.95
}

fn default_regulation() -> f64 {
    0.05
}

fn default_ambient_c() -> f64 {
    30.0
}

fn default_harmonic_factor() -> f64 {
    1.0
}

fn default_max_temp_rise_c() -> f64 {
    65.0
}
