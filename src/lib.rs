pub mod approximation;
pub mod config;
pub mod greetings;
pub mod logging;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use approximation::{
    Approximation, ConvergenceCriterion, SqrtApproximator, Termination, approximate,
};
pub use greetings::{Greeter, GreetingError, GreetingFormat, hello};
