//! Optimization problem assembly over the design pipeline.

use crate::error::{OptimizeError, OptimizeResult};
use crate::sqp::{Constraint, SqpConfig, sqp_solve};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use td_design::{DesignResult, DesignSpec, default_operating_point, evaluate};

/// Feasible window for the core flux density [T].
pub const FLUX_DENSITY_BOUNDS: (f64, f64) = (0.8, 1.8);
/// Feasible window for the conductor current density [A/mm²].
pub const CURRENT_DENSITY_BOUNDS: (f64, f64) = (1.5, 6.0);

/// What the optimizer minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OptimizeTarget {
    #[default]
    Cost,
    Weight,
    Losses,
}

impl OptimizeTarget {
    pub const ALL: [OptimizeTarget; 3] = [
        OptimizeTarget::Cost,
        OptimizeTarget::Weight,
        OptimizeTarget::Losses,
    ];

    /// Read the target quantity off an evaluated design.
    pub fn objective_value(&self, result: &DesignResult) -> f64 {
        match self {
            OptimizeTarget::Cost => result.cost.total_usd,
            OptimizeTarget::Weight => result.active_weight_kg(),
            OptimizeTarget::Losses => result.losses.total_w,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OptimizeTarget::Cost => "cost",
            OptimizeTarget::Weight => "weight",
            OptimizeTarget::Losses => "losses",
        }
    }
}

impl fmt::Display for OptimizeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for OptimizeTarget {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cost" => Ok(OptimizeTarget::Cost),
            "weight" => Ok(OptimizeTarget::Weight),
            "losses" | "loss" => Ok(OptimizeTarget::Losses),
            _ => Err("unknown optimization target (expected cost, weight or losses)"),
        }
    }
}

/// Outcome of one optimization run. `success` is false whenever the
/// solver stalled, hit its iteration cap or ended infeasible; the
/// fields still describe the best iterate reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationOutcome {
    pub target: OptimizeTarget,
    pub flux_density_t: f64,
    pub current_density_a_mm2: f64,
    pub objective: f64,
    pub iterations: usize,
    pub success: bool,
    pub message: String,
    pub result: DesignResult,
}

/// Minimize the target over (Bm, J) inside the standard bounds,
/// subject to the spec's limits. The temperature rise cap is always
/// enforced; loss, weight, cost and noise caps only when set.
///
/// Solver breakdown is reported through `success = false` rather than
/// an error; only an invalid spec fails the call.
pub fn optimize(spec: &DesignSpec, target: OptimizeTarget) -> OptimizeResult<OptimizationOutcome> {
    let (bm0, j0) = default_operating_point(spec);
    let x0 = DVector::from_vec(vec![
        bm0.clamp(FLUX_DENSITY_BOUNDS.0, FLUX_DENSITY_BOUNDS.1),
        j0.clamp(CURRENT_DENSITY_BOUNDS.0, CURRENT_DENSITY_BOUNDS.1),
    ]);

    // Trial points stay inside the bounds, where evaluation cannot
    // fail for a valid spec; the infinity fallback only shields the
    // line search from a rejected spec, which is checked right below.
    spec.validate()?;
    let objective = |x: &DVector<f64>| match evaluate(spec, x[0], x[1]) {
        Ok(result) => target.objective_value(&result),
        Err(_) => f64::INFINITY,
    };
    let constraints = build_constraints(spec);
    let bounds = [FLUX_DENSITY_BOUNDS, CURRENT_DENSITY_BOUNDS];

    match sqp_solve(
        x0.clone(),
        &objective,
        &constraints,
        &bounds,
        &SqpConfig::default(),
    ) {
        Ok(sqp) => {
            let result = evaluate(spec, sqp.x[0], sqp.x[1])?;
            Ok(OptimizationOutcome {
                target,
                flux_density_t: sqp.x[0],
                current_density_a_mm2: sqp.x[1],
                objective: target.objective_value(&result),
                iterations: sqp.iterations,
                success: sqp.converged,
                message: sqp.message,
                result,
            })
        }
        Err(err @ OptimizeError::Numeric { .. }) => {
            let result = evaluate(spec, x0[0], x0[1])?;
            Ok(OptimizationOutcome {
                target,
                flux_density_t: x0[0],
                current_density_a_mm2: x0[1],
                objective: target.objective_value(&result),
                iterations: 0,
                success: false,
                message: err.to_string(),
                result,
            })
        }
        Err(other) => Err(other),
    }
}

fn build_constraints(spec: &DesignSpec) -> Vec<Constraint<'_>> {
    let mut constraints: Vec<Constraint<'_>> = Vec::new();

    let rise_cap = spec.limits.max_temp_rise_c;
    constraints.push(Box::new(move |x: &DVector<f64>| {
        match evaluate(spec, x[0], x[1]) {
            Ok(r) => rise_cap - r.thermal.temperature_rise_c,
            Err(_) => f64::MIN,
        }
    }));

    if let Some(cap) = spec.limits.max_losses_w {
        constraints.push(Box::new(move |x: &DVector<f64>| {
            match evaluate(spec, x[0], x[1]) {
                Ok(r) => cap - r.losses.total_w,
                Err(_) => f64::MIN,
            }
        }));
    }
    if let Some(cap) = spec.limits.max_weight_kg {
        constraints.push(Box::new(move |x: &DVector<f64>| {
            match evaluate(spec, x[0], x[1]) {
                Ok(r) => cap - r.active_weight_kg(),
                Err(_) => f64::MIN,
            }
        }));
    }
    if let Some(cap) = spec.limits.max_cost_usd {
        constraints.push(Box::new(move |x: &DVector<f64>| {
            match evaluate(spec, x[0], x[1]) {
                Ok(r) => cap - r.cost.total_usd,
                Err(_) => f64::MIN,
            }
        }));
    }
    if let Some(cap) = spec.limits.noise_limit_db {
        constraints.push(Box::new(move |x: &DVector<f64>| {
            match evaluate(spec, x[0], x[1]) {
                Ok(r) => cap - r.noise.as_ref().map(|n| n.total_db).unwrap_or(0.0),
                Err(_) => f64::MIN,
            }
        }));
    }

    constraints
}
