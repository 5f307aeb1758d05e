/// Tolerances and limits for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub max_iters: usize,
    pub x_abs_tol: f64,
    pub x_rel_tol: f64,
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 200,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-10,
            residual_tol: 1e-12,
        }
    }
}

impl Config {
    /// Checks that every tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns the reason the first offending tolerance is rejected.
    pub fn validate(&self) -> Result<(), &'static str> {
        let tolerances = [
            (self.x_abs_tol, "x_abs_tol must be finite and non-negative"),
            (self.x_rel_tol, "x_rel_tol must be finite and non-negative"),
            (self.residual_tol, "residual_tol must be finite and non-negative"),
        ];

        for (value, reason) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(reason);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_tolerances() {
        let config = Config {
            x_rel_tol: f64::NAN,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err("x_rel_tol must be finite and non-negative")
        );

        let config = Config {
            residual_tol: -1e-3,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
