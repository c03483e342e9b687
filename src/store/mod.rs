//! The state container: one owned state cell plus handles onto it.
//!
//! This module is the "imperative shell" around the pure reducers. A
//! [`Store`] owns exactly one state cell. [`StateHandle`] reads it and
//! [`Dispatcher`] replaces it with the reducer's output, holding the write
//! lock while the reduction runs so sequential dispatches are applied in
//! order against successively derived states.

mod dispatcher;
mod error;
mod policy;

pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use policy::MissPolicy;

use crate::builder::StoreBuilder;
use crate::core::Reducer;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Read access to a store's current state.
///
/// Every read observes the latest dispatched state, so a handle taken once
/// stays current for its whole lifetime.
pub struct StateHandle<S> {
    cell: Arc<RwLock<S>>,
}

impl<S: Clone> StateHandle<S> {
    /// Snapshot of the current state.
    pub fn get(&self) -> S {
        self.cell.read().clone()
    }

    /// Borrow the current state for the duration of `f`.
    ///
    /// Dispatching from inside `f` deadlocks.
    pub fn read<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        f(&self.cell.read())
    }
}

impl<S> Clone for StateHandle<S> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for StateHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateHandle").field(&*self.cell.read()).finish()
    }
}

/// A state container bound to one reducer.
///
/// # Example
///
/// ```rust
/// use statehub::{reductions, ActionReducer, Store};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Counter {
///     counter: i32,
/// }
///
/// reductions! {
///     enum CounterAction for Counter {
///         add(n: i32) => |state| Counter { counter: state.counter + n },
///     }
/// }
///
/// let store = Store::new(ActionReducer::<CounterAction>::new(), Counter { counter: 0 });
/// store.dispatcher().dispatch(CounterAction::add(2));
/// assert_eq!(store.snapshot(), Counter { counter: 2 });
/// ```
pub struct Store<R: Reducer> {
    state: StateHandle<R::State>,
    dispatcher: Dispatcher<R>,
}

impl<R: Reducer> Store<R> {
    /// Create a store seeded with `init_state` that ignores misses.
    pub fn new(reducer: R, init_state: R::State) -> Self {
        Self::with_policy(reducer, init_state, MissPolicy::default())
    }

    /// Create a store with an explicit miss policy.
    pub fn with_policy(reducer: R, init_state: R::State, policy: MissPolicy) -> Self {
        let cell = Arc::new(RwLock::new(init_state));
        Self {
            state: StateHandle {
                cell: Arc::clone(&cell),
            },
            dispatcher: Dispatcher::new(reducer, cell, policy),
        }
    }

    /// Start building a store for `reducer`.
    pub fn builder(reducer: R) -> StoreBuilder<R> {
        StoreBuilder::new(reducer)
    }

    pub fn state(&self) -> &StateHandle<R::State> {
        &self.state
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> R::State {
        self.state.get()
    }

    pub fn dispatcher(&self) -> &Dispatcher<R> {
        &self.dispatcher
    }

    /// Split into the `(state, dispatcher)` pair.
    pub fn split(self) -> (StateHandle<R::State>, Dispatcher<R>) {
        (self.state, self.dispatcher)
    }
}

impl<R: Reducer> fmt::Debug for Store<R>
where
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActionReducer;
    use crate::reductions;
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        counter: i32,
    }

    reductions! {
        enum CounterAction for Counter {
            add(n: i32) => |state| Counter { counter: state.counter + n },
        }
    }

    fn store() -> Store<ActionReducer<CounterAction>> {
        Store::new(ActionReducer::new(), Counter { counter: 0 })
    }

    #[test]
    fn sequential_dispatches_accumulate() {
        let store = store();
        store.dispatcher().dispatch(CounterAction::add(1));
        store.dispatcher().dispatch(CounterAction::add(1));

        assert_eq!(store.snapshot().counter, 2);
    }

    #[test]
    fn state_handle_observes_later_dispatches() {
        let (state, dispatcher) = store().split();
        let earlier = state.clone();

        dispatcher.dispatch(CounterAction::add(7));

        assert_eq!(earlier.get().counter, 7);
        assert_eq!(state.read(|s| s.counter), 7);
    }

    #[test]
    fn cloned_dispatchers_share_one_cell() {
        let store = store();
        let first = store.dispatcher().clone();
        let second = store.dispatcher().clone();

        first.dispatch(CounterAction::add(2));
        second.dispatch(CounterAction::add(3));

        assert_eq!(store.snapshot().counter, 5);
    }

    #[test]
    fn encoded_miss_leaves_state_untouched() {
        let store = store();
        store.dispatcher().dispatch(CounterAction::add(4));

        let result = store.dispatcher().submit_encoded("subtract", json!([1]));

        assert!(result.is_ok());
        assert_eq!(store.snapshot().counter, 4);
    }

    #[test]
    fn reject_policy_surfaces_encoded_miss() {
        let store = Store::with_policy(
            ActionReducer::<CounterAction>::new(),
            Counter { counter: 0 },
            MissPolicy::Reject,
        );

        let err = store
            .dispatcher()
            .submit_encoded("subtract", json!([1]))
            .unwrap_err();

        assert!(matches!(err, DispatchError::UnknownAction { .. }));
        assert_eq!(store.snapshot().counter, 0);
    }
}
