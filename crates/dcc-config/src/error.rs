//! Errors raised while loading `DccConfig`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed to read or a value failed to deserialize.
    #[error("Configuration error: {0}")]
    Figment(Box<figment::Error>),

    /// A value parsed but cannot be used.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}
