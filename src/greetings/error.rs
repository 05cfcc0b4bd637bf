use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GreetingError {
    #[error("empty name")]
    EmptyName,
}
