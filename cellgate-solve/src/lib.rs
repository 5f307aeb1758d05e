//! Numerical solvers used to characterize cellgate devices.

pub mod equation;
