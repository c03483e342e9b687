//! Build errors for store and hub builders.

use thiserror::Error;

/// Errors that can occur when building stores and reducer hubs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Reducer name is empty. Every hub entry needs a non-empty name")]
    EmptyReducerName,

    #[error("Reducer '{name}' is registered more than once")]
    DuplicateReducer { name: String },
}
