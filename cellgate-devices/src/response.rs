//! Static input/output characterization of devices.
//!
//! A transfer model maps a constant input concentration to the steady state
//! the device settles into, which is the device's logic-level response curve.
//! [`switching_threshold`] locates the input level at which that curve
//! crosses the middle of its output swing.

use std::{convert::Infallible, marker::PhantomData};

use cellgate_core::Model;
use cellgate_solve::equation::{
    EquationProblem,
    bisection::{self, Config, Status},
};
use thiserror::Error;
use tracing::debug;

use crate::{
    ParameterError,
    not_cell::{NotParams, NotState},
    yes_cell::{YesParams, YesState},
};

/// A model whose input is a constant input concentration and whose output is
/// the resulting steady state.
pub trait SteadyStateResponse: Model<Input = f64> {
    /// Extracts the output concentration from a steady state.
    fn output_level(state: &Self::Output) -> f64;
}

/// Steady-state response of a NOT cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotTransfer {
    pub params: NotParams,
}

impl Model for NotTransfer {
    type Input = f64;
    type Output = NotState;
    type Error = ParameterError;

    fn call(&self, input: &f64) -> Result<NotState, ParameterError> {
        self.params.steady_state(*input)
    }
}

impl SteadyStateResponse for NotTransfer {
    fn output_level(state: &NotState) -> f64 {
        state.x
    }
}

/// Steady-state response of a YES cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YesTransfer {
    pub params: YesParams,
}

impl Model for YesTransfer {
    type Input = f64;
    type Output = YesState;
    type Error = ParameterError;

    fn call(&self, input: &f64) -> Result<YesState, ParameterError> {
        self.params.steady_state(*input)
    }
}

impl SteadyStateResponse for YesTransfer {
    fn output_level(state: &YesState) -> f64 {
        state.x
    }
}

/// Where a device's response crosses the middle of its output swing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    /// Input concentration at the crossing.
    pub input: f64,
    /// Output concentration at the crossing.
    pub output: f64,
    /// Output at the low end of the bracket.
    pub output_at_low: f64,
    /// Output at the high end of the bracket.
    pub output_at_high: f64,
}

/// Errors from [`switching_threshold`].
#[derive(Debug, Error)]
pub enum ThresholdError {
    #[error("steady state is undefined")]
    Steady(#[from] ParameterError),

    #[error("bisection failed")]
    Solve(#[from] bisection::Error),

    #[error("bisection stopped without converging ({status:?})")]
    NotConverged { status: Status },
}

/// Finds the input level at which a device switches.
///
/// The target output is the midpoint between the steady-state outputs at the
/// two ends of `bracket`; bisection then searches the bracket for the input
/// that produces it.
/// Because Hill responses are monotonic, the crossing is unique.
///
/// # Errors
///
/// Returns a [`ThresholdError`] if a steady state is undefined, the bracket
/// or config is rejected by the solver, or the solver does not converge.
pub fn switching_threshold<T>(
    transfer: &T,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Threshold, ThresholdError>
where
    T: SteadyStateResponse,
    T::Output: Clone,
    ThresholdError: From<T::Error>,
{
    let [low, high] = bracket;
    let endpoints = Endpoints {
        transfer,
        low: (low, transfer.call(&low)?),
        high: (high, transfer.call(&high)?),
    };
    let output_at_low = T::output_level(&endpoints.low.1);
    let output_at_high = T::output_level(&endpoints.high.1);

    let problem = HalfSwing::<T> {
        target: 0.5 * (output_at_low + output_at_high),
        transfer: PhantomData,
    };
    let solution = bisection::solve(&endpoints, &problem, bracket, config)?;

    if solution.status != Status::Converged {
        return Err(ThresholdError::NotConverged {
            status: solution.status,
        });
    }

    let threshold = Threshold {
        input: solution.x,
        output: T::output_level(&solution.snapshot.output),
        output_at_low,
        output_at_high,
    };
    debug!(
        input = threshold.input,
        output = threshold.output,
        iters = solution.iters,
        "located switching threshold"
    );

    Ok(threshold)
}

/// A transfer model that answers the bracket endpoints from steady states
/// already computed for the target.
struct Endpoints<'a, T: Model> {
    transfer: &'a T,
    low: (f64, T::Output),
    high: (f64, T::Output),
}

impl<T> Model for Endpoints<'_, T>
where
    T: SteadyStateResponse,
    T::Output: Clone,
{
    type Input = f64;
    type Output = T::Output;
    type Error = T::Error;

    fn call(&self, input: &f64) -> Result<T::Output, T::Error> {
        if input.to_bits() == self.low.0.to_bits() {
            Ok(self.low.1.clone())
        } else if input.to_bits() == self.high.0.to_bits() {
            Ok(self.high.1.clone())
        } else {
            self.transfer.call(input)
        }
    }
}

/// Residual `output_level − target` over the input concentration.
struct HalfSwing<T> {
    target: f64,
    transfer: PhantomData<T>,
}

impl<T: SteadyStateResponse> EquationProblem<1> for HalfSwing<T> {
    type Input = f64;
    type Output = T::Output;
    type InputError = Infallible;
    type ResidualError = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &T::Output) -> Result<[f64; 1], Infallible> {
        Ok([T::output_level(output) - self.target])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    fn inverter() -> NotTransfer {
        NotTransfer {
            params: NotParams {
                delta_l: 1.0,
                gamma_l: 1.0,
                n: 2.0,
                theta_l: 1.0,
                eta: 10.0,
                omega: 1.0,
                m: 2.0,
                delta_x: 1.0,
                rho_x: 0.0,
            },
        }
    }

    #[test]
    fn inverter_response_falls_with_input() {
        let transfer = inverter();
        let levels: Vec<f64> = [0.0, 0.5, 1.0, 2.0, 10.0]
            .iter()
            .map(|y| transfer.call(y).map(|s| s.x))
            .collect::<Result<_, _>>()
            .expect("steady states exist");

        assert_relative_eq!(levels[0], 10.0);
        assert!(levels.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn buffer_threshold_is_half_activation() {
        // x* = y / (1 + y), swing [0, 100/101] → midpoint crossing solves
        // y / (1 + y) = 50/101, i.e. y = 50/51.
        let transfer = YesTransfer {
            params: YesParams {
                gamma: 1.0,
                n: 1.0,
                theta: 1.0,
                delta_x: 1.0,
                rho_x: 0.0,
            },
        };
        let threshold =
            switching_threshold(&transfer, [0.0, 100.0], &Config::default()).expect("converges");

        assert_relative_eq!(threshold.input, 50.0 / 51.0, epsilon = 1e-8);
        assert_relative_eq!(threshold.output_at_low, 0.0);
        assert_relative_eq!(threshold.output_at_high, 100.0 / 101.0);
        assert_relative_eq!(threshold.output, 50.0 / 101.0, epsilon = 1e-8);
    }

    #[test]
    fn inverter_threshold_sits_between_levels() {
        let transfer = inverter();
        let threshold =
            switching_threshold(&transfer, [0.0, 10.0], &Config::default()).expect("converges");

        assert!(threshold.input > 0.0 && threshold.input < 10.0);
        assert!(threshold.output_at_high < threshold.output);
        assert!(threshold.output < threshold.output_at_low);
        assert_relative_eq!(
            threshold.output,
            0.5 * (threshold.output_at_low + threshold.output_at_high),
            epsilon = 1e-8
        );
    }

    #[test]
    fn missing_decay_is_reported() {
        let mut transfer = inverter();
        transfer.params.delta_l = 0.0;

        let result = switching_threshold(&transfer, [0.0, 10.0], &Config::default());
        assert!(matches!(
            result,
            Err(ThresholdError::Steady(ParameterError::NoDecay { .. }))
        ));
    }

    /// A buffer response that counts how often its steady state is computed.
    struct Counted {
        inner: YesTransfer,
        calls: Cell<usize>,
    }

    impl Model for Counted {
        type Input = f64;
        type Output = YesState;
        type Error = ParameterError;

        fn call(&self, input: &f64) -> Result<YesState, ParameterError> {
            self.calls.set(self.calls.get() + 1);
            self.inner.call(input)
        }
    }

    impl SteadyStateResponse for Counted {
        fn output_level(state: &YesState) -> f64 {
            state.x
        }
    }

    #[test]
    fn endpoints_are_evaluated_once() {
        let counted = Counted {
            inner: YesTransfer {
                params: YesParams {
                    gamma: 2.0,
                    n: 2.0,
                    theta: 1.0,
                    delta_x: 1.0,
                    rho_x: 0.0,
                },
            },
            calls: Cell::new(0),
        };
        let threshold =
            switching_threshold(&counted, [0.0, 5.0], &Config::default()).expect("converges");
        let with_threshold = counted.calls.replace(0);

        // Bisection alone computes both endpoint steady states itself.
        let problem = HalfSwing::<Counted> {
            target: 0.5 * (threshold.output_at_low + threshold.output_at_high),
            transfer: PhantomData,
        };
        let solution = bisection::solve(&counted, &problem, [0.0, 5.0], &Config::default())
            .expect("converges");
        let search_only = counted.calls.get();

        assert_eq!(solution.x.to_bits(), threshold.input.to_bits());
        assert_eq!(with_threshold, search_only);
    }

    #[test]
    fn flat_response_switches_at_the_low_end() {
        let transfer = YesTransfer {
            params: YesParams {
                gamma: 0.0,
                n: 1.0,
                theta: 1.0,
                delta_x: 1.0,
                rho_x: 0.0,
            },
        };

        // Zero everywhere: the left endpoint already meets the target.
        let threshold =
            switching_threshold(&transfer, [0.0, 1.0], &Config::default()).expect("trivial");
        assert_relative_eq!(threshold.input, 0.0);
    }
}
