use thiserror::Error;

/// A kinetic parameter lies outside the domain the models are defined on.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    #[error("parameter `{name}` is not finite: {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("parameter `{name}` must not be negative: {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("Hill exponent `{name}` must be positive: {value}")]
    NonPositiveExponent { name: &'static str, value: f64 },

    /// The species never decays, so no steady state exists.
    #[error("species `{species}` has a total decay rate of zero")]
    NoDecay { species: &'static str },
}

/// Checks a rate, gain, or scale: finite and non-negative.
pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() {
        Err(ParameterError::NotFinite { name, value })
    } else if value < 0.0 {
        Err(ParameterError::Negative { name, value })
    } else {
        Ok(())
    }
}

/// Checks a Hill exponent: finite and strictly positive.
pub(crate) fn check_exponent(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() {
        Err(ParameterError::NotFinite { name, value })
    } else if value <= 0.0 {
        Err(ParameterError::NonPositiveExponent { name, value })
    } else {
        Ok(())
    }
}

/// Returns `total` if it can serve as a decay rate in a steady-state division.
pub(crate) fn total_decay(species: &'static str, total: f64) -> Result<f64, ParameterError> {
    if total > 0.0 {
        Ok(total)
    } else {
        Err(ParameterError::NoDecay { species })
    }
}
