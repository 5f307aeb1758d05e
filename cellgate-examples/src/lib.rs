//! Drivers that exercise cellgate devices outside the model layer.
//!
//! The device crates stop at the derivative function.
//! This crate plays the part of the external integration driver: it loads
//! parameters, wires one device's output to another's input, and steps the
//! combined state forward in time.

pub mod cascade;
pub mod config;

pub use cascade::{CascadeState, run_cascade};
pub use config::{CascadeConfig, ConfigError, SimulationConfig};
