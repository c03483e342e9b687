//! Provider binder: publishes a store's state and dispatcher to a scope.
//!
//! A [`Provider`] owns two guarded contexts, one carrying a live
//! [`StateHandle`] and one carrying the [`Dispatcher`]. Mounting it creates a
//! fresh store and returns a child scope in which both are supplied, so any
//! code holding that scope (or one derived from it) can read and dispatch
//! without the values being threaded through by hand.

use crate::context::{Context, ContextError, Scope};
use crate::core::Reducer;
use crate::store::{Dispatcher, MissPolicy, StateHandle, Store};
use std::fmt;

/// Value descriptor of a provider's state context.
pub const STATE_VALUE: &str = "state";

/// Value descriptor of a provider's dispatcher context.
pub const DISPATCHER_VALUE: &str = "dispatcher";

/// Tree-scoped container for stores of one reducer.
///
/// # Example
///
/// ```rust
/// use statehub::context::Scope;
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
/// let provider = ActionReducer::<AgentAction>::new().define_provider("Agent");
/// let init = Agent { name: "Bond, James".into(), counter: 4 };
///
/// provider.render(&Scope::root(), init, |children| {
///     let dispatcher = provider.use_dispatcher(children).unwrap();
///     dispatcher.dispatch(AgentAction::rename("Chiffre, Le".into(), 3));
///
///     let state = provider.use_state(children).unwrap();
///     assert_eq!(state, Agent { name: "Chiffre, Le".into(), counter: 1 });
/// });
/// ```
pub struct Provider<R: Reducer> {
    reducer: R,
    policy: MissPolicy,
    state: Context<StateHandle<R::State>>,
    dispatcher: Context<Dispatcher<R>>,
}

impl<R: Reducer> Provider<R> {
    pub fn new(descriptor: impl Into<String>, reducer: R) -> Self {
        let descriptor = descriptor.into();
        Self {
            reducer,
            policy: MissPolicy::default(),
            state: Context::new(descriptor.clone()).with_value_descriptor(STATE_VALUE),
            dispatcher: Context::new(descriptor).with_value_descriptor(DISPATCHER_VALUE),
        }
    }

    /// Set the miss policy of stores mounted from now on.
    pub fn policy(mut self, policy: MissPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn descriptor(&self) -> &str {
        self.state.descriptor()
    }

    /// Create a store seeded with `init_state` and supply it below `parent`.
    ///
    /// Each mount owns an independent store; mounting twice under the same
    /// parent yields two unrelated subtrees.
    pub fn mount(&self, parent: &Scope, init_state: R::State) -> Scope {
        tracing::debug!(provider = self.descriptor(), "mounting store");
        let (state, dispatcher) =
            Store::with_policy(self.reducer.clone(), init_state, self.policy).split();
        parent
            .supply(&self.state, state)
            .supply(&self.dispatcher, dispatcher)
    }

    /// Mount a store and run `children` inside the resulting scope.
    pub fn render<T>(
        &self,
        parent: &Scope,
        init_state: R::State,
        children: impl FnOnce(&Scope) -> T,
    ) -> T {
        let scope = self.mount(parent, init_state);
        children(&scope)
    }

    /// Snapshot of the nearest provided state.
    pub fn use_state(&self, scope: &Scope) -> Result<R::State, ContextError> {
        self.use_state_handle(scope).map(|handle| handle.get())
    }

    /// Live handle on the nearest provided state.
    pub fn use_state_handle(&self, scope: &Scope) -> Result<StateHandle<R::State>, ContextError> {
        self.state.use_value(scope)
    }

    /// The nearest provided dispatcher.
    pub fn use_dispatcher(&self, scope: &Scope) -> Result<Dispatcher<R>, ContextError> {
        self.dispatcher.use_value(scope)
    }

    pub fn state_context(&self) -> &Context<StateHandle<R::State>> {
        &self.state
    }

    pub fn dispatcher_context(&self) -> &Context<Dispatcher<R>> {
        &self.dispatcher
    }
}

impl<R: Reducer> fmt::Debug for Provider<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("descriptor", &self.descriptor())
            .field("policy", &self.policy)
            .finish()
    }
}
