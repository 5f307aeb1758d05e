use thiserror::Error;

/// Reasons a pair of endpoints cannot bracket a root.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("non-finite endpoint")]
    NonFinite,
    #[error("zero width")]
    ZeroWidth,
    #[error("residuals have the same sign at both endpoints")]
    NoSignChange,
}

/// Sign of a residual, with zero counted as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub(super) fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Finite endpoints in ascending order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    pub(super) left: f64,
    pub(super) right: f64,
}

impl Bounds {
    pub(super) fn new([a, b]: [f64; 2]) -> Result<Self, BracketError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth);
        }

        Ok(Self {
            left: a.min(b),
            right: a.max(b),
        })
    }
}

/// An interval known to contain a sign change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    pub(super) fn new(
        bounds: Bounds,
        left_sign: Sign,
        right_sign: Sign,
    ) -> Result<Self, BracketError> {
        if left_sign == right_sign {
            return Err(BracketError::NoSignChange);
        }

        Ok(Self {
            left: bounds.left,
            right: bounds.right,
            left_sign,
        })
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(super) fn is_x_converged(&self, abs_tol: f64, rel_tol: f64) -> bool {
        self.right - self.left <= abs_tol + rel_tol * self.midpoint().abs()
    }

    /// Replaces whichever endpoint shares `sign` with `x`.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if sign == self.left_sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bounds_are_ordered() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bounds");
        assert_relative_eq!(bounds.left, 1.0);
        assert_relative_eq!(bounds.right, 3.0);
    }

    #[test]
    fn bounds_reject_degenerate_endpoints() {
        assert_eq!(Bounds::new([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(
            Bounds::new([0.0, f64::NEG_INFINITY]),
            Err(BracketError::NonFinite)
        );
        assert_eq!(Bounds::new([2.0, 2.0]), Err(BracketError::ZeroWidth));
    }

    #[test]
    fn shrink_keeps_the_sign_change() {
        let bounds = Bounds::new([0.0, 4.0]).expect("valid bounds");
        let mut bracket =
            Bracket::new(bounds, Sign::Negative, Sign::Positive).expect("valid bracket");

        bracket.shrink(2.0, Sign::Negative);
        assert_eq!(bracket.as_array(), [2.0, 4.0]);

        bracket.shrink(3.0, Sign::Positive);
        assert_eq!(bracket.as_array(), [2.0, 3.0]);
        assert_relative_eq!(bracket.midpoint(), 2.5);
        assert!(bracket.is_x_converged(1.0, 0.0));
        assert!(!bracket.is_x_converged(0.5, 0.0));
    }

    #[test]
    fn same_signs_do_not_bracket() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        assert_eq!(
            Bracket::new(bounds, Sign::Positive, Sign::Positive),
            Err(BracketError::NoSignChange)
        );
    }
}
