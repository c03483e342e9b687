//! What a store does with actions nobody handles.

use super::error::DispatchError;
use serde::{Deserialize, Serialize};

/// Strategy for handling misses during dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Leave the state unchanged and report success
    #[default]
    Ignore,

    /// Leave the state unchanged and return the miss to the caller
    Reject,
}

impl MissPolicy {
    /// Resolve a failed reduction according to this policy.
    ///
    /// Errors that are not misses are always returned.
    pub fn resolve(self, err: DispatchError) -> Result<(), DispatchError> {
        match self {
            Self::Ignore if err.is_miss() => {
                tracing::debug!(error = %err, "ignoring unmatched action");
                Ok(())
            }
            _ => Err(err),
        }
    }
}
