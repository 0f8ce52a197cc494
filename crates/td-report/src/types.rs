//! Stored record types.

use serde::{Deserialize, Serialize};
use td_design::{DesignResult, DesignSpec};

pub type DesignId = String;

/// Index entry for one stored design. The id is content-addressed over
/// the spec, so re-running an unchanged document lands on the same
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignManifest {
    pub design_id: DesignId,
    pub name: String,
    pub timestamp: String,
    pub tool_version: String,
    pub summary: DesignSummary,
}

impl DesignManifest {
    pub fn new(
        design_id: DesignId,
        name: &str,
        tool_version: &str,
        spec: &DesignSpec,
        result: &DesignResult,
    ) -> Self {
        Self {
            design_id,
            name: name.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: tool_version.to_string(),
            summary: DesignSummary::new(spec, result),
        }
    }
}

/// Headline figures kept in the manifest so listings do not need to
/// load the full record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignSummary {
    pub power_va: f64,
    pub efficiency: f64,
    pub total_loss_w: f64,
    pub temperature_rise_c: f64,
    pub total_cost_usd: f64,
    pub active_weight_kg: f64,
}

impl DesignSummary {
    pub fn new(spec: &DesignSpec, result: &DesignResult) -> Self {
        Self {
            power_va: spec.power_va,
            efficiency: result.efficiency,
            total_loss_w: result.losses.total_w,
            temperature_rise_c: result.thermal.temperature_rise_c,
            total_cost_usd: result.cost.total_usd,
            active_weight_kg: result.active_weight_kg(),
        }
    }
}

/// Full stored payload: the spec that was evaluated and everything it
/// produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignRecord {
    pub spec: DesignSpec,
    pub result: DesignResult,
}
