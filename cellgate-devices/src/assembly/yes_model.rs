use cellgate_core::{LayoutError, OdeModel, Positional, Slot};

use crate::{
    ParameterError,
    error::check_non_negative,
    roles::{YesRoles, yes_cell_in_role},
    yes_cell::YesParams,
};

/// A YES cell over the full state `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YesModel;

/// Full parameter record of a YES cell, in positional order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct YesModelParams {
    pub gamma_a: f64,
    pub n_b: f64,
    pub theta_a: f64,
    pub delta_a: f64,
    pub delta_b: f64,
    pub rho_a: f64,
    pub rho_b: f64,
}

impl YesModelParams {
    /// Selects the five constants the YES kinetics use.
    #[must_use]
    pub fn device(&self) -> YesParams {
        YesParams {
            gamma: self.gamma_a,
            n: self.n_b,
            theta: self.theta_a,
            delta_x: self.delta_a,
            rho_x: self.rho_a,
        }
    }

    /// Validates the device constants and the input's decay constants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] found.
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.device().validate()?;
        check_non_negative("delta_b", self.delta_b)?;
        check_non_negative("rho_b", self.rho_b)
    }

    /// Returns the constants in positional order.
    #[must_use]
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.gamma_a,
            self.n_b,
            self.theta_a,
            self.delta_a,
            self.delta_b,
            self.rho_a,
            self.rho_b,
        ]
    }
}

impl From<[f64; 7]> for YesModelParams {
    fn from(values: [f64; 7]) -> Self {
        let [gamma_a, n_b, theta_a, delta_a, delta_b, rho_a, rho_b] = values;
        Self {
            gamma_a,
            n_b,
            theta_a,
            delta_a,
            delta_b,
            rho_a,
            rho_b,
        }
    }
}

impl Positional for YesModelParams {
    const LEN: usize = 7;

    fn from_slice(values: &[f64]) -> Result<Self, LayoutError> {
        let values: [f64; 7] = values.try_into().map_err(|_| LayoutError::Parameters {
            expected: Self::LEN,
            found: values.len(),
        })?;
        Ok(values.into())
    }

    fn to_vec(&self) -> Vec<f64> {
        self.to_array().to_vec()
    }
}

impl OdeModel<2> for YesModel {
    type Parameters = YesModelParams;

    const SLOTS: [Slot; 2] = [Slot::Owned, Slot::External];

    fn owned_rates(&self, _time: f64, state: &[f64; 2], params: &YesModelParams) -> [f64; 2] {
        let [a, b] = *state;
        let da_dt = yes_cell_in_role(YesRoles { a, b }, &params.device());

        [da_dt, 0.0]
    }
}

/// Computes `[da/dt, 0.0]` for a YES cell.
#[must_use]
pub fn yes_model(time: f64, state: &[f64; 2], params: &YesModelParams) -> [f64; 2] {
    YesModel.derivative(time, state, params)
}
