use tracing::{debug, trace};

use crate::approximation::{Approximation, ConvergenceCriterion, Termination};
use crate::config::ConfigError;

pub const DEFAULT_ITERATION_BUDGET: u32 = 10;

const INITIAL_ESTIMATE: f64 = 1.0;
const INITIAL_PREVIOUS: f64 = 0.0;

/// Approximates `sqrt(target)` with at most ten Newton–Raphson updates.
///
/// Returns early when two successive estimates are equal or when the
/// estimate squared hits the target exactly. Otherwise returns whatever the
/// last update produced. Targets are not validated: `0.0` slowly halves
/// towards zero and negative targets never settle.
///
/// ```
/// use greetings::approximate;
/// assert_eq!(approximate(4.0), 2.0);
/// assert!((approximate(2000.0) - 44.72).abs() < 0.01);
/// ```
pub fn approximate(target: f64) -> f64 {
    SqrtApproximator::default().approximate(target).value
}

/// Newton square-root refinement with a configurable budget and
/// convergence test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtApproximator {
    budget: u32,
    criterion: ConvergenceCriterion,
}

impl Default for SqrtApproximator {
    fn default() -> Self {
        Self {
            budget: DEFAULT_ITERATION_BUDGET,
            criterion: ConvergenceCriterion::Exact,
        }
    }
}

impl SqrtApproximator {
    pub fn new(budget: u32, criterion: ConvergenceCriterion) -> Result<Self, ConfigError> {
        if budget == 0 {
            return Err(ConfigError::InvalidParameter(
                "iteration budget must be > 0".into(),
            ));
        }
        if let ConvergenceCriterion::Tolerance(eps) = criterion {
            ConvergenceCriterion::tolerance(eps)?;
        }
        Ok(Self { budget, criterion })
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn criterion(&self) -> ConvergenceCriterion {
        self.criterion
    }

    pub fn approximate(&self, target: f64) -> Approximation {
        let mut estimate = INITIAL_ESTIMATE;
        let mut previous = INITIAL_PREVIOUS;

        for iteration in 0..self.budget {
            trace!(iteration, estimate, "newton step");

            if self.criterion.has_converged(estimate, previous) {
                return self.finish(target, estimate, iteration, Termination::Converged);
            }
            if estimate * estimate == target {
                return self.finish(target, estimate, iteration, Termination::Exact);
            }

            previous = estimate;
            estimate -= newton_correction(estimate, target);
        }

        self.finish(target, estimate, self.budget, Termination::Exhausted)
    }

    #[inline]
    fn finish(
        &self,
        target: f64,
        value: f64,
        iterations: u32,
        termination: Termination,
    ) -> Approximation {
        debug!(target, value, iterations, %termination, "sqrt approximation finished");
        Approximation {
            target,
            value,
            iterations,
            termination,
        }
    }
}

/// `f(z) / f'(z)` for `f(z) = z² - target`.
#[inline]
fn newton_correction(estimate: f64, target: f64) -> f64 {
    (estimate * estimate - target) / (2.0 * estimate)
}
