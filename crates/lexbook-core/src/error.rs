use thiserror::Error;

/// Errors raised while loading settings or wiring the application together.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A setting is present but unusable (unknown zone, malformed cutoff, ...).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Shared state the request pipeline relies on was never installed.
    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
