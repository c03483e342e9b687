//! Context error types.

use thiserror::Error;

/// Errors raised when reading a guarded context.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContextError {
    /// No value, or an absent one, was supplied along the current scope chain
    #[error("No {value_descriptor} value was provided to {descriptor}Context")]
    MissingProvidedValue {
        descriptor: String,
        value_descriptor: String,
    },
}
