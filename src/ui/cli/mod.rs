pub mod drivers;
mod session;

pub use session::{prompt_greeting, prompt_sqrt, run_session};
