//! The inverter ("NOT cell").
//!
//! The input `y` drives production of an intermediate repressor `L`, which in
//! turn represses production of the output `x`.
//! More input therefore means less output.

use crate::{
    ParameterError,
    error::{check_exponent, check_non_negative, total_decay},
    hill,
};

/// Local state of a NOT cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NotState {
    /// Intermediate repressor concentration.
    pub l: f64,
    /// Output protein concentration.
    pub x: f64,
    /// Input protein concentration, read but never integrated here.
    pub y: f64,
}

/// Rates of change of the species a NOT cell owns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NotRates {
    /// `dL/dt`
    pub l: f64,
    /// `dx/dt`
    pub x: f64,
}

/// Kinetic constants of a NOT cell, in positional order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct NotParams {
    /// First-order decay rate of the intermediate.
    pub delta_l: f64,
    /// Maximal production gain of the intermediate.
    pub gamma_l: f64,
    /// Hill exponent of input activation.
    pub n: f64,
    /// Inverse half-activation scale of input activation.
    pub theta_l: f64,
    /// Maximal output production rate.
    pub eta: f64,
    /// Inverse half-repression scale of the intermediate.
    pub omega: f64,
    /// Hill exponent of output repression.
    pub m: f64,
    /// Baseline decay rate of the output.
    pub delta_x: f64,
    /// Additional, tag-mediated degradation rate of the output.
    pub rho_x: f64,
}

impl NotParams {
    /// Checks that every constant is finite and non-negative, and that both
    /// Hill exponents are positive.
    ///
    /// The kinetics never call this; it exists for callers that load
    /// parameters from outside the program.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] found.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_non_negative("delta_l", self.delta_l)?;
        check_non_negative("gamma_l", self.gamma_l)?;
        check_exponent("n", self.n)?;
        check_non_negative("theta_l", self.theta_l)?;
        check_non_negative("eta", self.eta)?;
        check_non_negative("omega", self.omega)?;
        check_exponent("m", self.m)?;
        check_non_negative("delta_x", self.delta_x)?;
        check_non_negative("rho_x", self.rho_x)
    }

    /// Returns the fixed point reached under a constant input.
    ///
    /// The intermediate settles at `L* = f(y) / delta_l` and the output at
    /// `x* = eta / (1 + (omega·L*)^m) / (delta_x + rho_x)`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NoDecay`] if `delta_l` or
    /// `delta_x + rho_x` is zero.
    pub fn steady_state(&self, input: f64) -> Result<NotState, ParameterError> {
        let intermediate_decay = total_decay("intermediate", self.delta_l)?;
        let output_decay = total_decay("output", self.delta_x + self.rho_x)?;

        let l = hill::activation(input, self.gamma_l, self.n, self.theta_l) / intermediate_decay;
        let x = hill::repression(l, self.eta, self.omega, self.m) / output_decay;

        Ok(NotState { l, x, y: input })
    }
}

/// Computes the rates of change of a NOT cell's intermediate and output.
///
/// ```text
/// dL/dt = gamma_l·y^n / (1 + (theta_l·y)^n) − delta_l·L
/// dx/dt = eta / (1 + (omega·L)^m) − delta_x·x − rho_x·x
/// ```
///
/// No domain checks are performed; negative or non-finite arguments give
/// whatever the arithmetic gives.
#[must_use]
pub fn not_cell(state: NotState, params: &NotParams) -> NotRates {
    let NotState { l, x, y } = state;
    let NotParams {
        delta_l,
        gamma_l,
        n,
        theta_l,
        eta,
        omega,
        m,
        delta_x,
        rho_x,
    } = *params;

    let production_l = hill::activation(y, gamma_l, n, theta_l);
    let production_x = hill::repression(l, eta, omega, m);

    NotRates {
        l: production_l - delta_l * l,
        x: production_x - delta_x * x - rho_x * x,
    }
}
