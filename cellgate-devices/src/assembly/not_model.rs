use cellgate_core::{LayoutError, OdeModel, Positional, Slot};

use crate::{
    ParameterError,
    error::check_non_negative,
    not_cell::NotParams,
    roles::{NotRoles, not_cell_in_role},
};

/// A NOT cell over the full state `[l_a, a, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotModel;

/// Full parameter record of a NOT cell, in positional order.
///
/// `delta_b` and `rho_b` describe the input species and are not used by the
/// NOT kinetics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct NotModelParams {
    pub delta_l: f64,
    pub gamma_l_a: f64,
    pub n_b: f64,
    pub theta_l_a: f64,
    pub eta_a: f64,
    pub omega_a: f64,
    pub m_a: f64,
    pub delta_a: f64,
    pub delta_b: f64,
    pub rho_a: f64,
    pub rho_b: f64,
}

impl NotModelParams {
    /// Selects the nine constants the NOT kinetics use.
    #[must_use]
    pub fn device(&self) -> NotParams {
        NotParams {
            delta_l: self.delta_l,
            gamma_l: self.gamma_l_a,
            n: self.n_b,
            theta_l: self.theta_l_a,
            eta: self.eta_a,
            omega: self.omega_a,
            m: self.m_a,
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
    pub fn to_array(&self) -> [f64; 11] {
        [
            self.delta_l,
            self.gamma_l_a,
            self.n_b,
            self.theta_l_a,
            self.eta_a,
            self.omega_a,
            self.m_a,
            self.delta_a,
            self.delta_b,
            self.rho_a,
            self.rho_b,
        ]
    }
}

impl From<[f64; 11]> for NotModelParams {
    fn from(values: [f64; 11]) -> Self {
        let [
            delta_l,
            gamma_l_a,
            n_b,
            theta_l_a,
            eta_a,
            omega_a,
            m_a,
            delta_a,
            delta_b,
            rho_a,
            rho_b,
        ] = values;

        Self {
            delta_l,
            gamma_l_a,
            n_b,
            theta_l_a,
            eta_a,
            omega_a,
            m_a,
            delta_a,
            delta_b,
            rho_a,
            rho_b,
        }
    }
}

impl Positional for NotModelParams {
    const LEN: usize = 11;

    fn from_slice(values: &[f64]) -> Result<Self, LayoutError> {
        let values: [f64; 11] = values.try_into().map_err(|_| LayoutError::Parameters {
            expected: Self::LEN,
            found: values.len(),
        })?;
        Ok(values.into())
    }

    fn to_vec(&self) -> Vec<f64> {
        self.to_array().to_vec()
    }
}

impl OdeModel<3> for NotModel {
    type Parameters = NotModelParams;

    const SLOTS: [Slot; 3] = [Slot::Owned, Slot::Owned, Slot::External];

    fn owned_rates(&self, _time: f64, state: &[f64; 3], params: &NotModelParams) -> [f64; 3] {
        let [l_a, a, b] = *state;
        let rates = not_cell_in_role(NotRoles { l_a, a, b }, &params.device());

        [rates.l_a, rates.a, 0.0]
    }
}

/// Computes `[dl_a/dt, da/dt, 0.0]` for a NOT cell.
///
/// `time` is accepted for integrator compatibility; the dynamics are
/// autonomous.
#[must_use]
pub fn not_model(time: f64, state: &[f64; 3], params: &NotModelParams) -> [f64; 3] {
    NotModel.derivative(time, state, params)
}
