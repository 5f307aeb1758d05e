//! The boundary between device models and ODE integrators.
//!
//! Integrators see a model as `(time, state, params) -> derivative`, with all
//! three expressed as positional `f64` sequences.
//! Each entry of the state vector is tagged with a [`Slot`] that says whether
//! the model integrates it or merely reads it.
//!
//! # External slots
//!
//! A model reports a derivative of exactly `0.0` for every
//! [`Slot::External`] entry.
//! That zero means "this model does not own the variable", not "the variable
//! is constant".
//! A driver composing several models is responsible for writing external
//! slots, either by copying the upstream model's output between steps or by
//! substituting its own coupling term for the zero.

use thiserror::Error;

/// Ownership of one entry in a model's state vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The model computes this variable's rate of change.
    Owned,
    /// The variable is read by the model but supplied by something else.
    External,
}

impl Slot {
    /// Returns `true` if the model integrates this slot.
    #[must_use]
    pub fn is_owned(self) -> bool {
        matches!(self, Slot::Owned)
    }

    /// Returns `true` if the slot is supplied from outside the model.
    #[must_use]
    pub fn is_external(self) -> bool {
        matches!(self, Slot::External)
    }
}

/// A system of first-order ODEs over `N` state variables.
///
/// Implementors describe the rates of change for the slots they own.
/// The provided [`derivative`](OdeModel::derivative) method applies the slot
/// tags, so external entries are always reported as `0.0` no matter what
/// [`owned_rates`](OdeModel::owned_rates) placed there.
pub trait OdeModel<const N: usize> {
    /// The full parameter record accepted by the model.
    type Parameters;

    /// Ownership of each state entry, in state order.
    const SLOTS: [Slot; N];

    /// Computes rates of change for the owned slots.
    ///
    /// Values written at external positions are discarded.
    fn owned_rates(&self, time: f64, state: &[f64; N], params: &Self::Parameters) -> [f64; N];

    /// Computes the full derivative vector.
    ///
    /// The result has the same order as `state`, and every external slot holds
    /// exactly `0.0`.
    fn derivative(&self, time: f64, state: &[f64; N], params: &Self::Parameters) -> [f64; N] {
        let mut derivative = self.owned_rates(time, state, params);
        for (rate, slot) in derivative.iter_mut().zip(Self::SLOTS) {
            if slot.is_external() {
                *rate = 0.0;
            }
        }
        derivative
    }

    /// Returns the indices of the slots supplied from outside the model.
    fn external_slots() -> impl Iterator<Item = usize> {
        Self::SLOTS
            .into_iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.is_external().then_some(index))
    }
}

/// A parameter record with a fixed positional layout.
///
/// The named fields of the record map one-to-one onto the flat sequence used
/// at the integrator boundary.
pub trait Positional: Sized {
    /// Number of values in the flat sequence.
    const LEN: usize;

    /// Builds the record from values in positional order.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Parameters`] if `values.len() != Self::LEN`.
    fn from_slice(values: &[f64]) -> Result<Self, LayoutError>;

    /// Flattens the record into positional order.
    fn to_vec(&self) -> Vec<f64>;
}

/// A flat sequence did not have the length a model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("state has {found} values, expected {expected}")]
    State { expected: usize, found: usize },

    #[error("parameters have {found} values, expected {expected}")]
    Parameters { expected: usize, found: usize },
}

/// Evaluates a model using flat state and parameter sequences.
///
/// This is the calling convention of a generic first-order ODE integrator.
/// It returns a freshly allocated derivative with the same length as `state`.
///
/// # Errors
///
/// Returns a [`LayoutError`] if `state` or `params` has the wrong length.
pub fn derivative_from_slices<M, const N: usize>(
    model: &M,
    time: f64,
    state: &[f64],
    params: &[f64],
) -> Result<Vec<f64>, LayoutError>
where
    M: OdeModel<N>,
    M::Parameters: Positional,
{
    let state: &[f64; N] = state.try_into().map_err(|_| LayoutError::State {
        expected: N,
        found: state.len(),
    })?;
    let params = M::Parameters::from_slice(params)?;

    Ok(model.derivative(time, state, &params).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Exponential decay of `x` toward zero, driven by an external `u`.
    struct Leak;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct LeakParams {
        gain: f64,
        rate: f64,
    }

    impl Positional for LeakParams {
        const LEN: usize = 2;

        fn from_slice(values: &[f64]) -> Result<Self, LayoutError> {
            match *values {
                [gain, rate] => Ok(Self { gain, rate }),
                _ => Err(LayoutError::Parameters {
                    expected: Self::LEN,
                    found: values.len(),
                }),
            }
        }

        fn to_vec(&self) -> Vec<f64> {
            vec![self.gain, self.rate]
        }
    }

    impl OdeModel<2> for Leak {
        type Parameters = LeakParams;

        const SLOTS: [Slot; 2] = [Slot::Owned, Slot::External];

        fn owned_rates(&self, _time: f64, state: &[f64; 2], params: &LeakParams) -> [f64; 2] {
            let [x, u] = *state;
            // The second entry is deliberately nonzero to exercise masking.
            [params.gain * u - params.rate * x, 42.0]
        }
    }

    #[test]
    fn external_slots_are_zeroed() {
        let params = LeakParams {
            gain: 2.0,
            rate: 0.5,
        };
        let derivative = Leak.derivative(0.0, &[4.0, 1.0], &params);

        assert_relative_eq!(derivative[0], 0.0);
        assert_eq!(derivative[1].to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn reports_external_indices() {
        let external: Vec<usize> = <Leak as OdeModel<2>>::external_slots().collect();
        assert_eq!(external, vec![1]);
        assert!(Slot::Owned.is_owned());
        assert!(!Slot::Owned.is_external());
    }

    #[test]
    fn flat_call_matches_typed_call() {
        let params = LeakParams {
            gain: 1.0,
            rate: 3.0,
        };
        let flat = derivative_from_slices::<_, 2>(&Leak, 7.0, &[1.0, 2.0], &params.to_vec())
            .expect("lengths match");

        assert_eq!(flat, Leak.derivative(7.0, &[1.0, 2.0], &params).to_vec());
    }

    #[test]
    fn flat_call_rejects_wrong_lengths() {
        let state_err = derivative_from_slices::<_, 2>(&Leak, 0.0, &[1.0], &[1.0, 1.0]);
        assert_eq!(
            state_err,
            Err(LayoutError::State {
                expected: 2,
                found: 1
            })
        );

        let params_err = derivative_from_slices::<_, 2>(&Leak, 0.0, &[1.0, 1.0], &[1.0, 1.0, 1.0]);
        assert_eq!(
            params_err,
            Err(LayoutError::Parameters {
                expected: 2,
                found: 3
            })
        );
    }
}
