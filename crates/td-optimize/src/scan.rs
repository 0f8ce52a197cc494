//! Parameter-grid evaluation over the (Bm, J) plane.
//!
//! Scans evaluate the full pipeline at every grid point. Points are
//! independent, so larger grids fan out across the rayon pool; tiny
//! grids stay sequential where the fork overhead would dominate.

use crate::error::{OptimizeError, OptimizeResult};
use crate::problem::OptimizeTarget;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use td_design::{DesignResult, DesignSpec, evaluate};

/// Scan execution configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Minimum points to use parallel execution (below this,
    /// sequential is faster).
    pub min_points_for_parallel: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_points_for_parallel: 4,
        }
    }
}

/// Inclusive linear range with a fixed number of samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanRange {
    pub start: f64,
    pub stop: f64,
    pub steps: usize,
}

impl ScanRange {
    pub fn new(start: f64, stop: f64, steps: usize) -> Self {
        Self { start, stop, steps }
    }

    fn validate(&self, name: &str) -> OptimizeResult<()> {
        if !(self.start.is_finite() && self.stop.is_finite())
            || self.start <= 0.0
            || self.stop < self.start
            || self.steps == 0
        {
            return Err(OptimizeError::Setup {
                what: format!(
                    "invalid {name} range: start {}, stop {}, steps {}",
                    self.start, self.stop, self.steps
                ),
            });
        }
        Ok(())
    }

    fn values(&self) -> Vec<f64> {
        if self.steps == 1 {
            return vec![self.start];
        }
        let span = self.stop - self.start;
        (0..self.steps)
            .map(|i| self.start + span * i as f64 / (self.steps - 1) as f64)
            .collect()
    }
}

/// One evaluated grid point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanPoint {
    pub flux_density_t: f64,
    pub current_density_a_mm2: f64,
    pub objective: f64,
    pub temperature_rise_c: f64,
    pub efficiency: f64,
    pub total_loss_w: f64,
    pub total_cost_usd: f64,
    pub feasible: bool,
}

/// Evaluate the pipeline across the grid, row-major with Bm as the
/// outer axis. Every point is reported, feasible or not.
pub fn scan(
    spec: &DesignSpec,
    target: OptimizeTarget,
    flux_density: ScanRange,
    current_density: ScanRange,
    config: &ScanConfig,
) -> OptimizeResult<Vec<ScanPoint>> {
    spec.validate().map_err(OptimizeError::from)?;
    flux_density.validate("flux density")?;
    current_density.validate("current density")?;

    let mut points = Vec::with_capacity(flux_density.steps * current_density.steps);
    for bm in flux_density.values() {
        for j in current_density.values() {
            points.push((bm, j));
        }
    }

    let eval_point = |&(bm, j): &(f64, f64)| -> OptimizeResult<ScanPoint> {
        let result = evaluate(spec, bm, j)?;
        Ok(grid_point(spec, target, bm, j, &result))
    };

    if points.len() >= config.min_points_for_parallel {
        points.par_iter().map(eval_point).collect()
    } else {
        points.iter().map(eval_point).collect()
    }
}

/// Cheapest (by the scanned objective) point satisfying all limits.
pub fn best_feasible(points: &[ScanPoint]) -> Option<&ScanPoint> {
    points
        .iter()
        .filter(|p| p.feasible)
        .min_by(|a, b| a.objective.total_cmp(&b.objective))
}

fn grid_point(
    spec: &DesignSpec,
    target: OptimizeTarget,
    bm: f64,
    j: f64,
    result: &DesignResult,
) -> ScanPoint {
    let limits = &spec.limits;
    let mut feasible = result.thermal.temperature_rise_c <= limits.max_temp_rise_c;
    if let Some(cap) = limits.max_losses_w {
        feasible = feasible && result.losses.total_w <= cap;
    }
    if let Some(cap) = limits.max_weight_kg {
        feasible = feasible && result.active_weight_kg() <= cap;
    }
    if let Some(cap) = limits.max_cost_usd {
        feasible = feasible && result.cost.total_usd <= cap;
    }
    if let Some(cap) = limits.noise_limit_db {
        let noise = result.noise.as_ref().map(|n| n.total_db).unwrap_or(0.0);
        feasible = feasible && noise <= cap;
    }

    ScanPoint {
        flux_density_t: bm,
        current_density_a_mm2: j,
        objective: target.objective_value(result),
        temperature_rise_c: result.thermal.temperature_rise_c,
        efficiency: result.efficiency,
        total_loss_w: result.losses.total_w,
        total_cost_usd: result.cost.total_usd,
        feasible,
    }
}
