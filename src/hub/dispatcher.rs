//! Two-level dispatch into reducer hubs.

use super::action::HubAction;
use super::ReducerHub;
use crate::core::{Action, Constructor};
use crate::store::{DispatchError, Dispatcher};
use serde_json::{json, Value};
use std::any::Any;
use std::fmt;

impl<S: Clone + Send + Sync + 'static> Dispatcher<ReducerHub<S>> {
    /// Sub-dispatcher scoped to the reducer registered as `name`.
    ///
    /// The name is only resolved when an action is dispatched, so an
    /// unknown name surfaces as a miss at that point.
    pub fn reducer(&self, name: impl Into<String>) -> SubDispatcher<S> {
        SubDispatcher {
            hub: self.clone(),
            head: name.into(),
            nested: Vec::new(),
        }
    }
}

/// Dispatcher scoped to one named reducer of a hub.
///
/// Offers the same shape as a plain dispatcher. Dispatches return a
/// `Result` because the addressed reducer may not exist or may not handle
/// the action; with the default [`MissPolicy`](crate::MissPolicy) such
/// misses are `Ok(())` and leave the state unchanged.
pub struct SubDispatcher<S: Clone + Send + Sync + 'static> {
    hub: Dispatcher<ReducerHub<S>>,
    head: String,
    nested: Vec<String>,
}

impl<S: Clone + Send + Sync + 'static> SubDispatcher<S> {
    /// Descend into a hub nested under this one.
    pub fn reducer(&self, name: impl Into<String>) -> Self {
        let mut nested = self.nested.clone();
        nested.push(name.into());
        Self {
            hub: self.hub.clone(),
            head: self.head.clone(),
            nested,
        }
    }

    /// Reducer names from the outermost hub down to the addressed reducer.
    pub fn path(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.head.as_str()).chain(self.nested.iter().map(String::as_str))
    }

    /// Apply one typed action of the addressed reducer.
    pub fn dispatch<A>(&self, action: A) -> Result<(), DispatchError>
    where
        A: Action<State = S>,
    {
        let name = action.name().to_string();
        self.route(name, Box::new(action))
    }

    /// Apply an action given by name and positional JSON arguments.
    pub fn dispatch_encoded(&self, action: &str, args: Value) -> Result<(), DispatchError> {
        let mut action = action.to_string();
        let mut args = args;
        for reducer in self.nested.iter().rev() {
            args = json!({ "action": action, "args": args });
            action = reducer.clone();
        }
        self.hub
            .submit_encoded(&self.head, json!({ "action": action, "args": args }))
    }

    /// Derive a typed invoker for one action of the addressed reducer.
    pub fn bind<Args, A, C>(
        &self,
        constructor: C,
    ) -> impl Fn(Args) -> Result<(), DispatchError> + Clone + Send + Sync + 'static
    where
        A: Action<State = S>,
        C: Constructor<Args, A> + Clone + Send + Sync + 'static,
        Args: 'static,
    {
        let dispatcher = self.clone();
        move |args| dispatcher.dispatch(constructor.construct(args))
    }

    fn route(&self, mut action: String, mut payload: Box<dyn Any + Send>) -> Result<(), DispatchError> {
        for reducer in self.nested.iter().rev() {
            let inner = HubAction {
                reducer: reducer.clone(),
                action,
                payload,
            };
            action = reducer.clone();
            payload = Box::new(inner);
        }
        self.hub.submit(HubAction {
            reducer: self.head.clone(),
            action,
            payload,
        })
    }
}

impl<S: Clone + Send + Sync + 'static> Clone for SubDispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            hub: self.hub.clone(),
            head: self.head.clone(),
            nested: self.nested.clone(),
        }
    }
}

impl<S: Clone + Send + Sync + 'static> fmt::Debug for SubDispatcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubDispatcher")
            .field("path", &self.path().collect::<Vec<_>>())
            .field("policy", &self.hub.policy())
            .finish()
    }
}
