//! Devices packaged for ODE integrators.
//!
//! Each assembler implements [`OdeModel`](cellgate_core::OdeModel) over the
//! device's full state, expressed in circuit roles.
//! The input slot `b` is tagged [`Slot::External`](cellgate_core::Slot): its
//! derivative is always reported as `0.0`, and whichever device or driver
//! produces `b` is responsible for its dynamics.
//!
//! Full parameter records also carry the input's own decay constants
//! (`delta_b`, `rho_b`) so every device kind shares one positional
//! convention.
//! The assemblers accept them and never read them.

mod not_model;
mod yes_model;

pub use not_model::{NotModel, NotModelParams, not_model};
pub use yes_model::{YesModel, YesModelParams, yes_model};
