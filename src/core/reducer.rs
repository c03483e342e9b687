//! The `Reducer` abstraction and the action-keyed reducer.

use super::action::Action;
use crate::provider::Provider;
use crate::store::{DispatchError, Dispatcher, StateHandle, Store};
use serde_json::Value;
use std::fmt;
use std::fmt::Debug;
use std::marker::PhantomData;

/// A pure function from `(state, action)` to the next state.
///
/// Implemented by [`ActionReducer`] for a single action set and by
/// [`ReducerHub`](crate::hub::ReducerHub) for a named composition of
/// reducers. Reducers are cheap handles: cloning one never copies state.
pub trait Reducer: Clone + Send + Sync + 'static {
    /// State shape this reducer transforms.
    type State: Clone + Send + Sync + 'static;

    /// Event accepted by this reducer.
    type Action: Debug + Send + 'static;

    /// Compute the next state, reporting a miss when the action is not
    /// handled by this reducer.
    fn try_reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
    ) -> Result<Self::State, DispatchError>;

    /// Rebuild an action from its name and JSON arguments.
    fn decode(&self, name: &str, args: Value) -> Result<Self::Action, DispatchError>;

    /// Compute the next state, returning the input unchanged on a miss.
    fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State {
        match self.try_reduce(state, action) {
            Ok(next) => next,
            Err(err) => {
                tracing::debug!(error = %err, "unmatched action left state unchanged");
                state.clone()
            }
        }
    }

    /// Bind a new, independent store seeded with `init_state`.
    fn use_reducer(&self, init_state: Self::State) -> (StateHandle<Self::State>, Dispatcher<Self>) {
        Store::new(self.clone(), init_state).split()
    }

    /// Create a provider publishing stores of this reducer to a scope.
    fn define_provider(&self, descriptor: impl Into<String>) -> Provider<Self> {
        Provider::new(descriptor, self.clone())
    }
}

/// Reducer over a single closed action set.
///
/// # Example
///
/// ```rust
/// use statehub::{reductions, ActionReducer, Reducer};
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
/// let reducer = ActionReducer::<CounterAction>::new();
/// let (state, dispatcher) = reducer.use_reducer(Counter { counter: 0 });
///
/// dispatcher.dispatch(CounterAction::add(1));
/// dispatcher.dispatch(CounterAction::add(1));
/// assert_eq!(state.get().counter, 2);
/// ```
pub struct ActionReducer<A> {
    _action: PhantomData<fn() -> A>,
}

impl<A: Action> ActionReducer<A> {
    pub fn new() -> Self {
        Self {
            _action: PhantomData,
        }
    }
}

impl<A: Action> Reducer for ActionReducer<A> {
    type State = A::State;
    type Action = A;

    fn try_reduce(&self, state: &A::State, action: A) -> Result<A::State, DispatchError> {
        Ok(action.apply(state))
    }

    fn decode(&self, name: &str, args: Value) -> Result<A, DispatchError> {
        match A::decode(name, args) {
            Ok(Some(action)) => Ok(action),
            Ok(None) => Err(DispatchError::UnknownAction {
                action: name.to_string(),
            }),
            Err(source) => Err(DispatchError::InvalidArgs {
                action: name.to_string(),
                source,
            }),
        }
    }
}

impl<A> Clone for ActionReducer<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for ActionReducer<A> {}

impl<A: Action> Default for ActionReducer<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Debug for ActionReducer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionReducer")
            .field("action", &std::any::type_name::<A>())
            .finish()
    }
}
