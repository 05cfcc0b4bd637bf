use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::greetings::{GreetingError, GreetingFormat};

/// Greets `name` with a phrasing picked uniformly by `rng`.
pub fn hello<R: Rng>(name: &str, rng: &mut R) -> Result<String, GreetingError> {
    if name.is_empty() {
        return Err(GreetingError::EmptyName);
    }
    let format = random_format(rng);
    debug!(name, %format, "greeting");
    format.greet(name)
}

#[inline]
fn random_format<R: Rng>(rng: &mut R) -> GreetingFormat {
    GreetingFormat::ALL[rng.random_range(0..GreetingFormat::ALL.len())]
}

/// Builds greeting messages from an owned random source.
///
/// Two greeters built over the same seed produce the same messages in the
/// same order.
#[derive(Debug, Clone)]
pub struct Greeter<R: Rng = StdRng> {
    rng: R,
}

impl Greeter<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Greeter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn hello(&mut self, name: &str) -> Result<String, GreetingError> {
        hello(name, &mut self.rng)
    }

    /// Maps every name to its greeting.
    ///
    /// Stops at the first empty name and returns no partial result. A name
    /// listed twice keeps the message generated last.
    pub fn hellos<I, S>(&mut self, names: I) -> Result<BTreeMap<String, String>, GreetingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut messages = BTreeMap::new();
        for name in names {
            let name = name.as_ref();
            let message = self.hello(name)?;
            messages.insert(name.to_string(), message);
        }
        Ok(messages)
    }
}
