//! Sequential quadratic programming for small dense problems.
//!
//! Minimizes a smooth objective over box bounds subject to inequality
//! constraints g_i(x) >= 0. Gradients come from forward differences,
//! the Lagrangian Hessian from a damped BFGS update, and each step
//! from an active-set QP subproblem solved through its KKT system.

use crate::error::{OptimizeError, OptimizeResult};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

/// Inequality constraint callback; feasible where the value is >= 0.
pub type Constraint<'a> = Box<dyn Fn(&DVector<f64>) -> f64 + 'a>;

/// SQP solver configuration.
pub struct SqpConfig {
    /// Maximum major iterations
    pub max_iterations: usize,
    /// Step-norm tolerance for declaring a KKT point
    pub step_tol: f64,
    /// Constraint violation tolerance
    pub constraint_tol: f64,
    /// Forward-difference step for gradients
    pub fd_step: f64,
    /// Line search backtracking factor
    pub line_search_beta: f64,
    /// Maximum line search iterations
    pub max_line_search_iters: usize,
    /// l1 merit penalty weight
    pub penalty: f64,
    /// Maximum active-set changes per QP subproblem
    pub max_qp_iters: usize,
}

impl Default for SqpConfig {
    fn default() -> Self {
        // step_tol sits above the forward-difference bias (~fd_step), or
        // the iteration chases gradient noise it can never resolve.
        Self {
            max_iterations: 60,
            step_tol: 1e-5,
            constraint_tol: 1e-4,
            fd_step: 1e-6,
            line_search_beta: 0.5,
            max_line_search_iters: 30,
            penalty: 1e3,
            max_qp_iters: 20,
        }
    }
}

/// SQP iteration result.
pub struct SqpResult {
    /// Final iterate
    pub x: DVector<f64>,
    /// Objective at the final iterate
    pub objective: f64,
    /// Largest constraint violation at the final iterate
    pub max_violation: f64,
    /// Number of major iterations
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
    /// Termination description
    pub message: String,
}

/// Run the SQP iteration from `x0`.
///
/// `bounds` must supply one (lower, upper) pair per variable; the
/// iterate is kept inside the box throughout, so the callbacks are
/// never evaluated outside it.
pub fn sqp_solve<F>(
    x0: DVector<f64>,
    objective: F,
    constraints: &[Constraint<'_>],
    bounds: &[(f64, f64)],
    config: &SqpConfig,
) -> OptimizeResult<SqpResult>
where
    F: Fn(&DVector<f64>) -> f64,
{
    let n = x0.len();
    if bounds.len() != n {
        return Err(OptimizeError::Setup {
            what: format!("{} variables but {} bound pairs", n, bounds.len()),
        });
    }
    for (i, (lo, hi)) in bounds.iter().enumerate() {
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(OptimizeError::Setup {
                what: format!("invalid bounds for variable {i}: [{lo}, {hi}]"),
            });
        }
    }

    let mut x = clamp_to_bounds(&x0, bounds);
    let mut f = objective(&x);
    if !f.is_finite() {
        return Err(OptimizeError::Numeric {
            what: format!("objective is not finite at the start point {x}"),
        });
    }
    let mut grad_f = fd_gradient(&objective, &x, f, bounds, config.fd_step)?;
    let mut g = eval_constraints(constraints, &x)?;
    let mut jac_g = constraint_jacobian(constraints, &x, &g, bounds, config.fd_step)?;

    // BFGS approximation of the Lagrangian Hessian
    let mut b = DMatrix::<f64>::identity(n, n);

    for iter in 0..config.max_iterations {
        let (a, c) = assemble_inequalities(&g, &jac_g, &x, bounds);
        let (d, lambda) = solve_qp(&b, &grad_f, &a, &c, config)?;

        if d.norm() < config.step_tol {
            let violation = max_violation(&g);
            let converged = violation <= config.constraint_tol;
            return Ok(SqpResult {
                x,
                objective: f,
                max_violation: violation,
                iterations: iter,
                converged,
                message: if converged {
                    "optimization terminated successfully".to_string()
                } else {
                    format!("converged to an infeasible point (violation {violation:.3e})")
                },
            });
        }

        // Backtracking line search on the l1 merit function
        let merit_0 = merit(f, &g, config.penalty);
        let mut alpha = 1.0;
        let mut accepted = None;
        for _ in 0..config.max_line_search_iters {
            let x_try = clamp_to_bounds(&(&x + alpha * &d), bounds);
            let f_try = objective(&x_try);
            let g_try = eval_constraints(constraints, &x_try)?;
            if f_try.is_finite() && merit(f_try, &g_try, config.penalty) < merit_0 {
                accepted = Some((x_try, f_try, g_try));
                break;
            }
            alpha *= config.line_search_beta;
        }
        let Some((x_new, f_new, g_new)) = accepted else {
            let violation = max_violation(&g);
            return Ok(SqpResult {
                x,
                objective: f,
                max_violation: violation,
                iterations: iter,
                converged: false,
                message: "line search failed to reduce the merit function".to_string(),
            });
        };

        debug!(
            iteration = iter,
            alpha,
            objective = f_new,
            step_norm = d.norm(),
            "sqp step"
        );

        let grad_f_new = fd_gradient(&objective, &x_new, f_new, bounds, config.fd_step)?;
        let jac_g_new = constraint_jacobian(constraints, &x_new, &g_new, bounds, config.fd_step)?;
        let (a_new, _) = assemble_inequalities(&g_new, &jac_g_new, &x_new, bounds);

        // Damped BFGS update on the Lagrangian gradient difference
        let s = &x_new - &x;
        let grad_l_old = &grad_f - a.transpose() * &lambda;
        let grad_l_new = &grad_f_new - a_new.transpose() * &lambda;
        let y = grad_l_new - grad_l_old;

        let bs = &b * &s;
        let sbs = s.dot(&bs);
        let sy = s.dot(&y);
        if sbs > 1e-16 {
            let y_bar = if sy < 0.2 * sbs {
                let theta = 0.8 * sbs / (sbs - sy);
                theta * &y + (1.0 - theta) * &bs
            } else {
                y
            };
            let sy_bar = s.dot(&y_bar);
            if sy_bar > 1e-16 {
                b = b - (&bs * bs.transpose()) / sbs + (&y_bar * y_bar.transpose()) / sy_bar;
            }
        }

        x = x_new;
        f = f_new;
        g = g_new;
        grad_f = grad_f_new;
        jac_g = jac_g_new;
    }

    let violation = max_violation(&g);
    Ok(SqpResult {
        x,
        objective: f,
        max_violation: violation,
        iterations: config.max_iterations,
        converged: false,
        message: format!(
            "maximum iterations {} reached without convergence",
            config.max_iterations
        ),
    })
}

fn clamp_to_bounds(x: &DVector<f64>, bounds: &[(f64, f64)]) -> DVector<f64> {
    DVector::from_iterator(
        x.len(),
        x.iter()
            .zip(bounds)
            .map(|(v, (lo, hi))| v.clamp(*lo, *hi)),
    )
}

fn max_violation(g: &DVector<f64>) -> f64 {
    g.iter().fold(0.0, |acc, gi| acc.max(-gi))
}

fn merit(f: f64, g: &DVector<f64>, penalty: f64) -> f64 {
    f + penalty * g.iter().map(|gi| (-gi).max(0.0)).sum::<f64>()
}

/// Forward-difference gradient, switching to a backward step at the
/// upper bound so the probe never leaves the box.
fn fd_gradient<F>(
    f: &F,
    x: &DVector<f64>,
    fx: f64,
    bounds: &[(f64, f64)],
    step: f64,
) -> OptimizeResult<DVector<f64>>
where
    F: Fn(&DVector<f64>) -> f64,
{
    let mut grad = DVector::zeros(x.len());
    for i in 0..x.len() {
        let h = step * (1.0 + x[i].abs());
        let (hi, sign) = if x[i] + h <= bounds[i].1 {
            (h, 1.0)
        } else {
            (-h, -1.0)
        };
        let mut probe = x.clone();
        probe[i] += hi;
        let fp = f(&probe);
        if !fp.is_finite() {
            return Err(OptimizeError::Numeric {
                what: format!("objective is not finite near {probe}"),
            });
        }
        grad[i] = sign * (fp - fx) / h;
    }
    Ok(grad)
}

fn eval_constraints(
    constraints: &[Constraint<'_>],
    x: &DVector<f64>,
) -> OptimizeResult<DVector<f64>> {
    let mut g = DVector::zeros(constraints.len());
    for (i, con) in constraints.iter().enumerate() {
        g[i] = con(x);
        if !g[i].is_finite() {
            return Err(OptimizeError::Numeric {
                what: format!("constraint {i} is not finite at {x}"),
            });
        }
    }
    Ok(g)
}

fn constraint_jacobian(
    constraints: &[Constraint<'_>],
    x: &DVector<f64>,
    g: &DVector<f64>,
    bounds: &[(f64, f64)],
    step: f64,
) -> OptimizeResult<DMatrix<f64>> {
    let mut jac = DMatrix::zeros(constraints.len(), x.len());
    for j in 0..x.len() {
        let h = step * (1.0 + x[j].abs());
        let (hj, sign) = if x[j] + h <= bounds[j].1 {
            (h, 1.0)
        } else {
            (-h, -1.0)
        };
        let mut probe = x.clone();
        probe[j] += hj;
        for (i, con) in constraints.iter().enumerate() {
            let gp = con(&probe);
            if !gp.is_finite() {
                return Err(OptimizeError::Numeric {
                    what: format!("constraint {i} is not finite near {probe}"),
                });
            }
            jac[(i, j)] = sign * (gp - g[i]) / h;
        }
    }
    Ok(jac)
}

/// Stack the user constraints and the box bounds into one linearized
/// inequality system a*d + c >= 0 around the current iterate.
fn assemble_inequalities(
    g: &DVector<f64>,
    jac_g: &DMatrix<f64>,
    x: &DVector<f64>,
    bounds: &[(f64, f64)],
) -> (DMatrix<f64>, DVector<f64>) {
    let n = x.len();
    let m = g.len();
    let rows = m + 2 * n;

    let mut a = DMatrix::zeros(rows, n);
    let mut c = DVector::zeros(rows);

    for i in 0..m {
        for j in 0..n {
            a[(i, j)] = jac_g[(i, j)];
        }
        c[i] = g[i];
    }
    for j in 0..n {
        // lower bound: x_j + d_j - lo >= 0
        a[(m + j, j)] = 1.0;
        c[m + j] = x[j] - bounds[j].0;
        // upper bound: hi - x_j - d_j >= 0
        a[(m + n + j, j)] = -1.0;
        c[m + n + j] = bounds[j].1 - x[j];
    }
    (a, c)
}

/// Primal active-set solve of the QP subproblem
///     min 1/2 d'Bd + grad'd   s.t.  a*d + c >= 0.
/// Returns the step and the full multiplier vector (zero off the
/// active set).
fn solve_qp(
    b: &DMatrix<f64>,
    grad: &DVector<f64>,
    a: &DMatrix<f64>,
    c: &DVector<f64>,
    config: &SqpConfig,
) -> OptimizeResult<(DVector<f64>, DVector<f64>)> {
    let n = grad.len();
    let rows = c.len();

    // Seed the working set with the most violated rows at d = 0.
    let mut working: Vec<usize> = (0..rows).filter(|&i| c[i] < -1e-12).collect();
    working.sort_by(|&i, &j| c[i].total_cmp(&c[j]));
    working.truncate(n);

    for _ in 0..config.max_qp_iters {
        let k = working.len();
        let dim = n + k;
        let mut kkt = DMatrix::zeros(dim, dim);
        let mut rhs = DVector::zeros(dim);

        for i in 0..n {
            for j in 0..n {
                kkt[(i, j)] = b[(i, j)];
            }
            rhs[i] = -grad[i];
        }
        for (w, &row) in working.iter().enumerate() {
            for j in 0..n {
                kkt[(j, n + w)] = -a[(row, j)];
                kkt[(n + w, j)] = a[(row, j)];
            }
            rhs[n + w] = -c[row];
        }

        let sol = kkt.lu().solve(&rhs).ok_or_else(|| OptimizeError::Numeric {
            what: "singular KKT system in QP subproblem".to_string(),
        })?;
        let d = sol.rows(0, n).into_owned();
        let lambda_w = sol.rows(n, k).into_owned();

        // Most violated linearization outside the working set
        let mut worst_row = None;
        let mut worst_slack = -1e-9;
        for row in 0..rows {
            if working.contains(&row) {
                continue;
            }
            let slack = (a.row(row) * &d)[0] + c[row];
            if slack < worst_slack {
                worst_slack = slack;
                worst_row = Some(row);
            }
        }

        if let Some(row) = worst_row {
            if working.len() == n {
                // Make room by releasing the weakest active row
                let (drop_idx, _) = lambda_w
                    .iter()
                    .enumerate()
                    .min_by(|(_, l1), (_, l2)| l1.total_cmp(l2))
                    .ok_or_else(|| OptimizeError::Numeric {
                        what: "empty working set at capacity".to_string(),
                    })?;
                working.remove(drop_idx);
            }
            working.push(row);
            continue;
        }

        // Primal feasible; check dual feasibility
        let negative = lambda_w
            .iter()
            .enumerate()
            .filter(|(_, l)| **l < -1e-9)
            .min_by(|(_, l1), (_, l2)| l1.total_cmp(l2));
        if let Some((drop_idx, _)) = negative {
            working.remove(drop_idx);
            continue;
        }

        let mut lambda = DVector::zeros(rows);
        for (w, &row) in working.iter().enumerate() {
            lambda[row] = lambda_w[w];
        }
        return Ok((d, lambda));
    }

    Err(OptimizeError::Numeric {
        what: "QP active set did not settle".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loose_bounds(n: usize) -> Vec<(f64, f64)> {
        vec![(-100.0, 100.0); n]
    }

    #[test]
    fn unconstrained_quadratic() {
        // min (x-1)^2 + (y-2)^2
        let objective =
            |x: &DVector<f64>| (x[0] - 1.0).powi(2) + (x[1] - 2.0).powi(2);
        let x0 = DVector::from_vec(vec![5.0, -3.0]);
        let result = sqp_solve(x0, objective, &[], &loose_bounds(2), &SqpConfig::default())
            .unwrap();

        assert!(result.converged, "{}", result.message);
        assert!((result.x[0] - 1.0).abs() < 1e-3);
        assert!((result.x[1] - 2.0).abs() < 1e-3);
    }

    #[test]
    fn active_bound_pins_solution() {
        // min (x+1)^2 over x in [0, 2]
        let objective = |x: &DVector<f64>| (x[0] + 1.0).powi(2);
        let x0 = DVector::from_vec(vec![1.5]);
        let result = sqp_solve(x0, objective, &[], &[(0.0, 2.0)], &SqpConfig::default())
            .unwrap();

        assert!(result.converged, "{}", result.message);
        assert!(result.x[0].abs() < 1e-6);
    }

    #[test]
    fn inequality_becomes_active() {
        // min x^2 + y^2 subject to x + y >= 1; optimum at (0.5, 0.5)
        let objective = |x: &DVector<f64>| x[0] * x[0] + x[1] * x[1];
        let constraints: Vec<Constraint<'_>> =
            vec![Box::new(|x: &DVector<f64>| x[0] + x[1] - 1.0)];
        let x0 = DVector::from_vec(vec![2.0, 2.0]);
        let result = sqp_solve(
            x0,
            objective,
            &constraints,
            &loose_bounds(2),
            &SqpConfig::default(),
        )
        .unwrap();

        assert!(result.converged, "{}", result.message);
        assert!((result.x[0] - 0.5).abs() < 1e-3, "x = {}", result.x[0]);
        assert!((result.x[1] - 0.5).abs() < 1e-3, "y = {}", result.x[1]);
        assert!(result.max_violation <= 1e-6);
    }

    #[test]
    fn infeasible_start_recovers() {
        // Start deep inside the infeasible region of x >= 3
        let objective = |x: &DVector<f64>| x[0] * x[0];
        let constraints: Vec<Constraint<'_>> = vec![Box::new(|x: &DVector<f64>| x[0] - 3.0)];
        let x0 = DVector::from_vec(vec![0.0]);
        let result = sqp_solve(
            x0,
            objective,
            &constraints,
            &[(-10.0, 10.0)],
            &SqpConfig::default(),
        )
        .unwrap();

        assert!(result.converged, "{}", result.message);
        assert!((result.x[0] - 3.0).abs() < 1e-3, "x = {}", result.x[0]);
    }

    #[test]
    fn rejects_mismatched_bounds() {
        let objective = |x: &DVector<f64>| x[0];
        let x0 = DVector::from_vec(vec![0.0, 0.0]);
        let result = sqp_solve(x0, objective, &[], &[(0.0, 1.0)], &SqpConfig::default());
        assert!(result.is_err());
    }
}
