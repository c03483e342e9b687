//! Reducer hubs: named compositions of reducers over one state shape.
//!
//! A hub routes a [`HubAction`] in two steps: first by reducer name, then by
//! the addressed reducer's own action type. The action sets of independently
//! declared reducers cannot be merged into one enum, so both steps can miss:
//!
//! - an unknown reducer name is [`DispatchError::UnknownReducer`]
//! - an action the addressed reducer does not handle is
//!   [`DispatchError::UnknownAction`]
//!
//! A hub is itself a [`Reducer`], so hubs nest to any depth and a miss at
//! any level propagates outward unchanged.
//!
//! # Example
//!
//! ```rust
//! use statehub::{reductions, ActionReducer, ReducerHub};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Agent {
//!     name: String,
//!     counter: i32,
//! }
//!
//! reductions! {
//!     enum Score for Agent {
//!         add(n: i32) => |state| Agent { counter: state.counter + n, ..state.clone() },
//!     }
//! }
//!
//! reductions! {
//!     enum Identity for Agent {
//!         rename(name: String) => |state| Agent { name, ..state.clone() },
//!     }
//! }
//!
//! let hub = ReducerHub::builder()
//!     .reducer("score", ActionReducer::<Score>::new())
//!     .reducer("identity", ActionReducer::<Identity>::new())
//!     .build()
//!     .unwrap();
//!
//! let (state, dispatcher) = hub.use_reducer_hub(Agent { name: "x".into(), counter: 0 });
//! dispatcher.reducer("score").dispatch(Score::add(2)).unwrap();
//! dispatcher.reducer("identity").dispatch(Identity::rename("y".into())).unwrap();
//!
//! // Unknown reducer: ignored by default.
//! dispatcher.reducer("missing").dispatch(Score::add(100)).unwrap();
//!
//! assert_eq!(state.get(), Agent { name: "y".into(), counter: 2 });
//! ```

mod action;
mod dispatcher;

pub use action::{HubAction, HubEvent};
pub use dispatcher::SubDispatcher;

use crate::builder::HubBuilder;
use crate::core::{ActionEvent, Reducer};
use crate::store::{DispatchError, Dispatcher, StateHandle};
use serde_json::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Object-safe view of a [`Reducer`] whose action type is erased.
pub(crate) trait ErasedReducer<S>: Send + Sync {
    fn reduce_erased(
        &self,
        state: &S,
        action: &str,
        payload: Box<dyn Any + Send>,
    ) -> Result<S, DispatchError>;

    fn decode_erased(&self, action: &str, args: Value) -> Result<Box<dyn Any + Send>, DispatchError>;
}

impl<R: Reducer> ErasedReducer<R::State> for R {
    fn reduce_erased(
        &self,
        state: &R::State,
        action: &str,
        payload: Box<dyn Any + Send>,
    ) -> Result<R::State, DispatchError> {
        let typed = payload
            .downcast::<R::Action>()
            .map_err(|_| DispatchError::UnknownAction {
                action: action.to_string(),
            })?;
        self.try_reduce(state, *typed)
    }

    fn decode_erased(&self, action: &str, args: Value) -> Result<Box<dyn Any + Send>, DispatchError> {
        let typed = self.decode(action, args)?;
        Ok(Box::new(typed))
    }
}

/// A reducer fused from named sub-reducers sharing one state shape.
pub struct ReducerHub<S> {
    entries: Arc<BTreeMap<String, Box<dyn ErasedReducer<S>>>>,
}

impl<S: Clone + Send + Sync + 'static> ReducerHub<S> {
    /// Start fusing reducers into a hub.
    pub fn builder() -> HubBuilder<S> {
        HubBuilder::new()
    }

    pub(crate) fn from_entries(entries: BTreeMap<String, Box<dyn ErasedReducer<S>>>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Bind a new, independent store driven by this hub.
    pub fn use_reducer_hub(&self, init_state: S) -> (StateHandle<S>, Dispatcher<Self>) {
        self.use_reducer(init_state)
    }

    /// Whether a reducer is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered reducer names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Clone + Send + Sync + 'static> Reducer for ReducerHub<S> {
    type State = S;
    type Action = HubAction;

    fn try_reduce(&self, state: &S, action: HubAction) -> Result<S, DispatchError> {
        let HubAction {
            reducer,
            action,
            payload,
        } = action;
        let entry = self
            .entries
            .get(reducer.as_str())
            .ok_or(DispatchError::UnknownReducer { reducer })?;
        entry.reduce_erased(state, &action, payload)
    }

    /// Decode `{"action": ..., "args": ...}` addressed to reducer `name`.
    fn decode(&self, name: &str, args: Value) -> Result<HubAction, DispatchError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| DispatchError::UnknownReducer {
                reducer: name.to_string(),
            })?;
        let inner: ActionEvent =
            serde_json::from_value(args).map_err(|source| DispatchError::InvalidArgs {
                action: name.to_string(),
                source,
            })?;
        let payload = entry.decode_erased(&inner.action, inner.args)?;
        Ok(HubAction {
            reducer: name.to_string(),
            action: inner.action,
            payload,
        })
    }
}

impl<S> Clone for ReducerHub<S> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<S> fmt::Debug for ReducerHub<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReducerHub")
            .field("reducers", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
