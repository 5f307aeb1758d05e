//! Scalar root finding by interval bisection.

mod bracket;
mod config;
mod error;
mod solution;

pub use bracket::BracketError;
pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use cellgate_core::Model;
use tracing::{debug, trace};

use crate::equation::{EquationProblem, Evaluation, evaluate};

use bracket::{Bounds, Bracket, Sign};

/// Finds a root of a one-variable equation problem by bisection.
///
/// The residual must change sign across `bracket`; endpoints may be given in
/// either order.
/// Each iteration is recorded as a `trace` event and the final outcome as a
/// `debug` event.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, if a residual is not
/// finite, or if the model or problem fails during evaluation.
pub fn solve<I, O>(
    model: &impl Model<Input = I, Output = O>,
    problem: &impl EquationProblem<1, Input = I, Output = O>,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<I, O>, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let bounds = Bounds::new(bracket).map_err(|source| Error::Bracket {
        left: bracket[0],
        right: bracket[1],
        source,
    })?;

    let left_eval = finite_eval(model, problem, bounds.left)?;
    if left_eval.residuals[0].abs() <= config.residual_tol {
        return Ok(converged_at_endpoint(left_eval));
    }

    let right_eval = finite_eval(model, problem, bounds.right)?;
    if right_eval.residuals[0].abs() <= config.residual_tol {
        return Ok(converged_at_endpoint(right_eval));
    }

    let mut bracket = Bracket::new(
        bounds,
        Sign::of(left_eval.residuals[0]),
        Sign::of(right_eval.residuals[0]),
    )
    .map_err(|source| Error::Bracket {
        left: bounds.left,
        right: bounds.right,
        source,
    })?;

    let mut best = if left_eval.residuals[0].abs() <= right_eval.residuals[0].abs() {
        left_eval
    } else {
        right_eval
    };

    for iter in 1..=config.max_iters {
        let mid = bracket.midpoint();
        let mid_eval = finite_eval(model, problem, mid)?;
        let residual = mid_eval.residuals[0];

        trace!(iter, x = mid, residual, bracket = ?bracket.as_array(), "bisection step");

        if residual.abs() <= config.residual_tol
            || bracket.is_x_converged(config.x_abs_tol, config.x_rel_tol)
        {
            debug!(iter, x = mid, residual, "bisection converged");
            return Ok(Solution::from_eval(mid_eval, Status::Converged, iter));
        }

        bracket.shrink(mid, Sign::of(residual));

        if residual.abs() < best.residuals[0].abs() {
            best = mid_eval;
        }
    }

    debug!(
        max_iters = config.max_iters,
        x = best.x[0],
        residual = best.residuals[0],
        "bisection hit the iteration limit"
    );
    Ok(Solution::from_eval(best, Status::MaxIters, config.max_iters))
}

/// Evaluates the problem at `x` and rejects non-finite residuals.
fn finite_eval<I, O>(
    model: &impl Model<Input = I, Output = O>,
    problem: &impl EquationProblem<1, Input = I, Output = O>,
    x: f64,
) -> Result<Evaluation<I, O, 1>, Error> {
    let eval = evaluate(model, problem, [x])?;
    let residual = eval.residuals[0];

    if residual.is_finite() {
        Ok(eval)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}

fn converged_at_endpoint<I, O>(eval: Evaluation<I, O, 1>) -> Solution<I, O> {
    debug!(x = eval.x[0], residual = eval.residuals[0], "root found at bracket endpoint");
    Solution::from_eval(eval, Status::Converged, 0)
}
