//! Dispatch error types.

use thiserror::Error;

/// Errors that can occur while routing an action to its reduction.
///
/// `UnknownReducer` and `UnknownAction` are misses: under
/// [`MissPolicy::Ignore`](super::MissPolicy::Ignore) they leave the state
/// unchanged without surfacing to the caller.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No reducer named '{reducer}' is registered in this hub")]
    UnknownReducer { reducer: String },

    #[error("Action '{action}' is not handled by this reducer")]
    UnknownAction { action: String },

    #[error("Invalid arguments for action '{action}': {source}")]
    InvalidArgs {
        action: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DispatchError {
    /// Whether this error is a miss rather than a malformed event.
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            Self::UnknownReducer { .. } | Self::UnknownAction { .. }
        )
    }
}
