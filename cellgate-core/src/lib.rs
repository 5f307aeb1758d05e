//! Core traits for modeling cellular logic devices.
//!
//! A device is described by a [`Model`] for typed, deterministic calls and by
//! an [`OdeModel`] when it is handed to a numerical integrator.
//! The integrator boundary is intentionally flat: positional `f64` state and
//! parameter sequences, with each state slot tagged as [`Slot::Owned`] or
//! [`Slot::External`].

pub mod model;
pub mod ode;

pub use model::{Model, Snapshot};
pub use ode::{LayoutError, OdeModel, Positional, Slot, derivative_from_slices};
