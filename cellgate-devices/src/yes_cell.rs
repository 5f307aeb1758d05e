//! The buffer ("YES cell").
//!
//! The input `y` activates production of the output `x` directly, with no
//! intermediate stage.

use crate::{
    ParameterError,
    error::{check_exponent, check_non_negative, total_decay},
    hill,
};

/// Local state of a YES cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YesState {
    /// Output protein concentration.
    pub x: f64,
    /// Input protein concentration, read but never integrated here.
    pub y: f64,
}

/// Kinetic constants of a YES cell, in positional order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct YesParams {
    pub gamma: f64,
    pub n: f64,
    pub theta: f64,
    pub delta_x: f64,
    pub rho_x: f64,
}

impl YesParams {
    /// Checks that every constant is finite and non-negative, and that the
    /// Hill exponent is positive.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] found.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_non_negative("gamma", self.gamma)?;
        check_exponent("n", self.n)?;
        check_non_negative("theta", self.theta)?;
        check_non_negative("delta_x", self.delta_x)?;
        check_non_negative("rho_x", self.rho_x)
    }

    /// Returns the fixed point `x* = f(y) / (delta_x + rho_x)` reached under a
    /// constant input.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NoDecay`] if `delta_x + rho_x` is zero.
    pub fn steady_state(&self, input: f64) -> Result<YesState, ParameterError> {
        let decay = total_decay("output", self.delta_x + self.rho_x)?;
        let x = hill::activation(input, self.gamma, self.n, self.theta) / decay;

        Ok(YesState { x, y: input })
    }
}

/// Computes `dx/dt` for a YES cell.
///
/// ```text
/// dx/dt = gamma·y^n / (1 + (theta·y)^n) − delta_x·x − rho_x·x
/// ```
#[must_use]
pub fn yes_cell(state: YesState, params: &YesParams) -> f64 {
    let YesState { x, y } = state;
    let YesParams {
        gamma,
        n,
        theta,
        delta_x,
        rho_x,
    } = *params;

    hill::activation(y, gamma, n, theta) - delta_x * x - rho_x * x
}
