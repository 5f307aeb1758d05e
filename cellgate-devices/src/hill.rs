//! Hill functions for cooperative binding.

/// Production driven by an activator at concentration `input`.
///
/// Computes `gamma·input^n / (1 + (theta·input)^n)`, which is zero at
/// `input = 0`, increases monotonically, and saturates at `gamma / theta^n`.
/// Exponent `n` may be any positive real.
///
/// Above `theta·input = 1` the ratio is evaluated in its saturating form
/// `(gamma / theta^n) / (1 + (theta·input)^-n)`, so large inputs or steep
/// exponents approach the ceiling instead of overflowing to `inf / inf`.
#[must_use]
pub fn activation(input: f64, gamma: f64, n: f64, theta: f64) -> f64 {
    let scaled = theta * input;
    if scaled > 1.0 {
        gamma / theta.powf(n) / (1.0 + scaled.powf(-n))
    } else {
        gamma * input.powf(n) / (1.0 + scaled.powf(n))
    }
}

/// Production repressed by a species at concentration `level`.
///
/// Computes `eta / (1 + (omega·level)^m)`, which equals `eta` when the
/// repressor is absent and decays toward zero as it accumulates.
#[must_use]
pub fn repression(level: f64, eta: f64, omega: f64, m: f64) -> f64 {
    eta / (1.0 + (omega * level).powf(m))
}
