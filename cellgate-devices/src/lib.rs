//! NOT and YES cell models for multicellular Boolean circuits.
//!
//! Each device is an ODE system over intracellular concentrations, driven by
//! an input concentration it reads but does not integrate.
//! The crate is organized in three layers:
//!
//! - [`not_cell`](mod@not_cell) and [`yes_cell`](mod@yes_cell) hold the
//!   primitive kinetics, written in device-local variables.
//! - [`roles`] renames those variables to circuit roles (`a` for output, `b`
//!   for input, `l_a` for the NOT intermediate).
//! - [`assembly`] packages each device as an [`OdeModel`] over its full state,
//!   tagging the input slot as [`Slot::External`].
//!
//! [`response`] builds on the kinetics to characterize a device's static
//! input/output behavior.
//!
//! [`OdeModel`]: cellgate_core::OdeModel
//! [`Slot::External`]: cellgate_core::Slot::External

mod error;

pub mod assembly;
pub mod hill;
pub mod not_cell;
pub mod response;
pub mod roles;
pub mod yes_cell;

pub use assembly::{NotModel, NotModelParams, YesModel, YesModelParams, not_model, yes_model};
pub use error::ParameterError;
pub use not_cell::{NotParams, NotRates, NotState, not_cell};
pub use yes_cell::{YesParams, YesState, yes_cell};
