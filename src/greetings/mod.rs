mod error;
mod format;
mod greeter;

pub use error::GreetingError;
pub use format::GreetingFormat;
pub use greeter::{Greeter, hello};
