//! Statehub: typed reducers for tree-structured view layers
//!
//! Statehub follows the "pure core, imperative shell" philosophy. Reductions
//! are pure functions from the previous state and typed arguments to the
//! next state; a small store owns the one mutable cell and applies them.
//!
//! # Core Concepts
//!
//! - **Actions**: Closed enums of named, typed transitions via the `Action` trait
//! - **Reducers**: `ActionReducer` for one action set, `ReducerHub` for named
//!   compositions, model reducers for property replacement
//! - **Dispatchers**: Cheap handles that route actions into one store
//! - **Providers**: Publish state and dispatcher to every scope below a mount
//!   point, failing loudly when read where nothing was provided
//!
//! # Example
//!
//! ```rust
//! use statehub::context::Scope;
//! use statehub::{reductions, ActionReducer, Reducer};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Agent {
//!     name: String,
//!     counter: i32,
//! }
//!
//! reductions! {
//!     enum AgentAction for Agent {
//!         add(n: i32) => |state| Agent { counter: state.counter + n, ..state.clone() },
//!         rename(name: String, penalty: i32) => |state| Agent {
//!             name,
//!             counter: state.counter - penalty,
//!         },
//!     }
//! }
//!
//! let reducer = ActionReducer::<AgentAction>::new();
//! let (state, dispatcher) = reducer.use_reducer(Agent { name: "anonymous".into(), counter: 0 });
//!
//! let rename = dispatcher.bind(AgentAction::rename);
//! rename(("Bond, James".to_string(), 1));
//! assert_eq!(state.get(), Agent { name: "Bond, James".into(), counter: -1 });
//!
//! let provider = reducer.define_provider("Agent");
//! let scope = provider.mount(&Scope::root(), state.get());
//! provider.use_dispatcher(&scope).unwrap().dispatch(AgentAction::add(5));
//! assert_eq!(provider.use_state(&scope).unwrap().counter, 4);
//! ```

pub mod builder;
pub mod context;
pub mod core;
pub mod hub;
pub mod model;
pub mod provider;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Action, ActionEvent, ActionReducer, Constructor, Reducer};
pub use builder::{BuildError, HubBuilder, StoreBuilder};
pub use context::{Context, ContextError, Scope};
pub use hub::{HubAction, HubEvent, ReducerHub, SubDispatcher};
pub use model::{define_model_hub, ModelReducer};
pub use provider::Provider;
pub use store::{DispatchError, Dispatcher, MissPolicy, StateHandle, Store};

#[doc(hidden)]
pub mod __private {
    pub use crate::core::decode_args;
    pub use serde_json::{Error as JsonError, Value};
}
