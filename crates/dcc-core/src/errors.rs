//! Cross-cutting error types for Digital Career Compass.
//!
//! Domain-specific errors (`DatabaseError`, `ConfigError`) live in their
//! respective crates. They converge into `anyhow::Error` in `dcc-cli`.

use thiserror::Error;

/// Errors that can be raised by any DCC crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value could not be parsed into a known enum variant.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },
}
