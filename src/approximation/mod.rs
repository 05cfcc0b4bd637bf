mod approximation;
mod convergence;
mod newton;

pub use approximation::{Approximation, Termination};
pub use convergence::ConvergenceCriterion;
pub use newton::{DEFAULT_ITERATION_BUDGET, SqrtApproximator, approximate};
