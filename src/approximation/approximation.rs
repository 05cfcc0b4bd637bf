use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::utils::math::{relative_error, square_residual};

/// Why the refinement loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    /// Two successive estimates were considered equal.
    Converged,
    /// The estimate squared equals the target.
    Exact,
    /// The iteration budget ran out first.
    Exhausted,
}

impl Display for Termination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Termination::Converged => "converged",
            Termination::Exact => "exact",
            Termination::Exhausted => "budget exhausted",
        };
        f.write_str(s)
    }
}

/// JSON has no NaN or infinity; write those as their `Display` text.
fn finite_or_text<S: Serializer>(x: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if x.is_finite() {
        serializer.serialize_f64(*x)
    } else {
        serializer.serialize_str(&x.to_string())
    }
}

/// Outcome of one `SqrtApproximator::approximate` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Approximation {
    #[serde(serialize_with = "finite_or_text")]
    pub target: f64,
    #[serde(serialize_with = "finite_or_text")]
    pub value: f64,
    /// Number of Newton updates applied to the initial estimate.
    pub iterations: u32,
    pub termination: Termination,
}

impl Approximation {
    /// `|value² - target|`
    pub fn residual(&self) -> f64 {
        square_residual(self.value, self.target)
    }

    /// Residual scaled by the target. Not finite for a zero target.
    pub fn relative_error(&self) -> f64 {
        relative_error(self.value, self.target)
    }
}
