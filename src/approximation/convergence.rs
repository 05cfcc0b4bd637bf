use crate::config::ConfigError;

/// How the approximator decides that two successive estimates are "the same".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ConvergenceCriterion {
    /// Successive estimates compare equal with `==`.
    #[default]
    Exact,
    /// Successive estimates differ by at most the given absolute amount.
    Tolerance(f64),
}

impl ConvergenceCriterion {
    pub fn tolerance(eps: f64) -> Result<Self, ConfigError> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(ConfigError::InvalidParameter(format!(
                "tolerance must be a finite value >= 0, got {eps}"
            )));
        }
        Ok(ConvergenceCriterion::Tolerance(eps))
    }

    #[inline]
    pub fn has_converged(self, estimate: f64, previous: f64) -> bool {
        match self {
            ConvergenceCriterion::Exact => estimate == previous,
            ConvergenceCriterion::Tolerance(eps) => libm::fabs(estimate - previous) <= eps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_requires_bitwise_equal_values() {
        let c = ConvergenceCriterion::Exact;
        assert!(c.has_converged(1.5, 1.5));
        assert!(!c.has_converged(1.5, 1.5 + f64::EPSILON));
    }

    #[test]
    fn tolerance_accepts_close_values() {
        let c = ConvergenceCriterion::tolerance(1e-9).unwrap();
        assert!(c.has_converged(2.0, 2.0 + 1e-12));
        assert!(c.has_converged(2.0 + 1e-12, 2.0));
        assert!(!c.has_converged(2.0, 2.1));
    }

    #[test]
    fn zero_tolerance_behaves_like_exact() {
        let c = ConvergenceCriterion::tolerance(0.0).unwrap();
        assert!(c.has_converged(3.0, 3.0));
        assert!(!c.has_converged(3.0, 3.0 + 1e-15));
    }

    #[test]
    fn invalid_tolerances_are_rejected() {
        for eps in [-1e-9, f64::NAN, f64::INFINITY] {
            let err = ConvergenceCriterion::tolerance(eps).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidParameter(_)), "eps={eps}");
        }
    }

    #[test]
    fn nan_estimates_never_converge() {
        assert!(!ConvergenceCriterion::Exact.has_converged(f64::NAN, f64::NAN));
        let c = ConvergenceCriterion::Tolerance(1.0);
        assert!(!c.has_converged(f64::NAN, 0.0));
    }
}
