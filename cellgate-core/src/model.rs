/// A deterministic callable that maps a typed input to a typed output.
///
/// Device kinetics, steady-state responses, and anything else a solver needs
/// to evaluate repeatedly are expressed as models.
/// Calling a model must not depend on hidden state, so repeated calls with the
/// same input always agree.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type for domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// An input/output pair captured from a single model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a snapshot from an input and the output it produced.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Decay {
        rate: f64,
    }

    impl Model for Decay {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(-self.rate * input)
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let decay = Decay { rate: 2.0 };
        let first = decay.call(&3.0).expect("infallible");
        let second = decay.call(&3.0).expect("infallible");

        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(Snapshot::new(3.0, first), Snapshot::new(3.0, -6.0));
    }
}
