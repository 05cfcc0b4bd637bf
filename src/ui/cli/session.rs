use std::io::Write;

use anyhow::{Context, Result};
use rand::Rng;

use crate::approximation::{Approximation, SqrtApproximator};
use crate::greetings::Greeter;
use crate::ui::cli::drivers::PromptDriver;

/// Asks for a name until one is accepted and returns its greeting.
pub fn prompt_greeting<D: PromptDriver, R: Rng>(
    driver: &D,
    greeter: &mut Greeter<R>,
) -> Result<String> {
    loop {
        let name = driver.ask_string("Name:", "Who should be greeted?", "")?;
        match greeter.hello(&name) {
            Ok(message) => return Ok(message),
            Err(err) => eprintln!("✗ {}", err),
        }
    }
}

/// Asks for a non-negative target and approximates its square root.
pub fn prompt_sqrt<D: PromptDriver>(
    driver: &D,
    approximator: &SqrtApproximator,
) -> Result<Approximation> {
    loop {
        let target = driver.ask_f64(
            "Target:",
            "Non-negative number to take the square root of",
            2.0,
            Some(0.0),
            None,
        )?;
        if target.is_nan() || target < 0.0 {
            eprintln!("✗ target must be a non-negative number");
            continue;
        }
        return Ok(approximator.approximate(target));
    }
}

/// Greets, then optionally approximates a square root, writing results to `out`.
pub fn run_session<D: PromptDriver, R: Rng, W: Write>(
    driver: &D,
    greeter: &mut Greeter<R>,
    approximator: &SqrtApproximator,
    out: &mut W,
) -> Result<()> {
    let message = prompt_greeting(driver, greeter)?;
    writeln!(out, "{message}").context("write greeting")?;

    if driver.ask_bool("Approximate a square root?", "", true)? {
        let a = prompt_sqrt(driver, approximator)?;
        writeln!(
            out,
            "sqrt({}) ≈ {} ({} after {} iterations)",
            a.target, a.value, a.termination, a.iterations
        )
        .context("write approximation")?;
    }
    Ok(())
}
