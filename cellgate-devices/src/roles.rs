//! Circuit-role views of device state.
//!
//! Inside a primitive model, variables carry device-local names (`l`, `x`,
//! `y`) shared by every instance of that device kind.
//! When devices are wired together, the same values are referred to by their
//! role in the circuit: `a` is the device's output, `b` its input, and `l_a`
//! the intermediate that belongs to output `a`.
//!
//! Converting between the two views is a pure renaming.
//! No value is rounded, scaled, or reordered.

use crate::{
    not_cell::{NotParams, NotRates, NotState, not_cell},
    yes_cell::{YesParams, YesState, yes_cell},
};

/// A NOT cell's state, named by circuit role.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NotRoles {
    /// Intermediate repressor of output `a`.
    pub l_a: f64,
    /// Output.
    pub a: f64,
    /// Input.
    pub b: f64,
}

/// A NOT cell's owned rates, named by circuit role.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NotRoleRates {
    pub l_a: f64,
    pub a: f64,
}

/// A YES cell's state, named by circuit role.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YesRoles {
    /// Output.
    pub a: f64,
    /// Input.
    pub b: f64,
}

impl From<NotRoles> for NotState {
    fn from(roles: NotRoles) -> Self {
        let NotRoles { l_a, a, b } = roles;
        NotState { l: l_a, x: a, y: b }
    }
}

impl From<NotState> for NotRoles {
    fn from(state: NotState) -> Self {
        let NotState { l, x, y } = state;
        NotRoles { l_a: l, a: x, b: y }
    }
}

impl From<NotRates> for NotRoleRates {
    fn from(rates: NotRates) -> Self {
        NotRoleRates {
            l_a: rates.l,
            a: rates.x,
        }
    }
}

impl From<YesRoles> for YesState {
    fn from(roles: YesRoles) -> Self {
        YesState {
            x: roles.a,
            y: roles.b,
        }
    }
}

impl From<YesState> for YesRoles {
    fn from(state: YesState) -> Self {
        YesRoles {
            a: state.x,
            b: state.y,
        }
    }
}

/// Evaluates a NOT cell whose state is given in circuit roles.
#[must_use]
pub fn not_cell_in_role(roles: NotRoles, params: &NotParams) -> NotRoleRates {
    not_cell(roles.into(), params).into()
}

/// Evaluates a YES cell whose state is given in circuit roles, returning `da/dt`.
#[must_use]
pub fn yes_cell_in_role(roles: YesRoles, params: &YesParams) -> f64 {
    yes_cell(roles.into(), params)
}
