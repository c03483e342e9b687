//! Dispatchers submit actions to a store's reducer.

use super::error::DispatchError;
use super::policy::MissPolicy;
use crate::core::{Action, ActionEvent, ActionReducer, Constructor, Reducer};
use parking_lot::RwLock;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Handle that routes actions into one store.
///
/// Dispatchers are stateless apart from the shared cell and are cheap to
/// clone; every clone writes to the same store.
pub struct Dispatcher<R: Reducer> {
    reducer: R,
    cell: Arc<RwLock<R::State>>,
    policy: MissPolicy,
}

impl<R: Reducer> Dispatcher<R> {
    pub(crate) fn new(reducer: R, cell: Arc<RwLock<R::State>>, policy: MissPolicy) -> Self {
        Self {
            reducer,
            cell,
            policy,
        }
    }

    pub fn policy(&self) -> MissPolicy {
        self.policy
    }

    /// Submit one action, applying it before returning.
    ///
    /// On a miss the state is left untouched and the store's [`MissPolicy`]
    /// decides whether the miss is reported.
    pub fn submit(&self, action: R::Action) -> Result<(), DispatchError> {
        tracing::trace!(action = ?action, "dispatching");
        let mut state = self.cell.write();
        match self.reducer.try_reduce(&state, action) {
            Ok(next) => {
                *state = next;
                Ok(())
            }
            Err(err) => self.policy.resolve(err),
        }
    }

    /// Submit an action given by name and positional JSON arguments.
    pub fn submit_encoded(&self, name: &str, args: Value) -> Result<(), DispatchError> {
        match self.reducer.decode(name, args) {
            Ok(action) => self.submit(action),
            Err(err) => self.policy.resolve(err),
        }
    }

    /// Submit a serialized [`ActionEvent`].
    pub fn dispatch_event(&self, event: ActionEvent) -> Result<(), DispatchError> {
        self.submit_encoded(&event.action, event.args)
    }
}

impl<A: Action> Dispatcher<ActionReducer<A>> {
    /// Apply one typed action. A typed action always has a reduction, so
    /// this cannot fail.
    pub fn dispatch(&self, action: A) {
        tracing::trace!(action = action.name(), "dispatching");
        let mut state = self.cell.write();
        let next = action.apply(&state);
        *state = next;
    }

    /// Derive a typed invoker for one action.
    ///
    /// The invoker takes exactly the action's argument tuple and returns
    /// nothing.
    ///
    /// ```rust
    /// use statehub::{reductions, ActionReducer, Reducer};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Agent {
    ///     name: String,
    ///     counter: i32,
    /// }
    ///
    /// reductions! {
    ///     enum AgentAction for Agent {
    ///         rename(name: String, penalty: i32) => |state| Agent {
    ///             name,
    ///             counter: state.counter - penalty,
    ///         },
    ///     }
    /// }
    ///
    /// let init = Agent { name: "anonymous".into(), counter: 0 };
    /// let (state, dispatcher) = ActionReducer::<AgentAction>::new().use_reducer(init);
    /// let rename = dispatcher.bind(AgentAction::rename);
    ///
    /// rename(("Bond, James".to_string(), 1));
    /// assert_eq!(state.get(), Agent { name: "Bond, James".into(), counter: -1 });
    /// ```
    pub fn bind<Args, C>(&self, constructor: C) -> impl Fn(Args) + Clone + Send + Sync + 'static
    where
        C: Constructor<Args, A> + Clone + Send + Sync + 'static,
        Args: 'static,
    {
        let dispatcher = self.clone();
        move |args| dispatcher.dispatch(constructor.construct(args))
    }
}

impl<R: Reducer> Clone for Dispatcher<R> {
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            cell: Arc::clone(&self.cell),
            policy: self.policy,
        }
    }
}

impl<R: Reducer> fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("reducer", &std::any::type_name::<R>())
            .field("policy", &self.policy)
            .finish()
    }
}
