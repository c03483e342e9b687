//! Model reducers: actions named after a state's properties.
//!
//! A model field set (declared with [`model!`](crate::model)) has one action
//! per replaceable property, and every action replaces exactly that
//! property. Properties that must not be replaced are left out of the field
//! set, so addressing them does not type-check. On the encoded path an
//! excluded property name is simply unknown and therefore a miss.
//!
//! [`define_model_hub`] combines a model with a free-form action set over the
//! same state in one hub.

use crate::core::{Action, ActionReducer};
use crate::hub::{ErasedReducer, ReducerHub, SubDispatcher};
use crate::store::Dispatcher;
use std::collections::BTreeMap;

/// Hub key of the model reducer in a model hub.
pub const MODEL_REDUCER: &str = "model";

/// Hub key of the action reducer in a model hub.
pub const ACTION_REDUCER: &str = "action";

/// Reducer over a model field set.
pub type ModelReducer<F> = ActionReducer<F>;

/// Create the reducer for field set `F`.
pub fn reduce_model<F: Action>() -> ModelReducer<F> {
    ActionReducer::new()
}

/// Replace one property of `state`, returning the new state.
///
/// ```rust
/// use statehub::model;
/// use statehub::model::model_reducer;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Agent {
///     name: String,
///     counter: i32,
/// }
///
/// model! {
///     enum AgentField for Agent {
///         name: String,
///         counter: i32,
///     }
/// }
///
/// let original = Agent { name: "x".into(), counter: 0 };
/// let next = model_reducer(&original, AgentField::counter(5));
///
/// assert_eq!(next, Agent { name: "x".into(), counter: 5 });
/// assert_eq!(original.counter, 0);
/// ```
pub fn model_reducer<F: Action>(state: &F::State, field: F) -> F::State {
    field.apply(state)
}

/// Fuse the model of field set `F` (under `"model"`) with the action set
/// `A` (under `"action"`) into one hub over the same state.
///
/// ```rust
/// use statehub::model::define_model_hub;
/// use statehub::{model, reductions};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Agent {
///     name: String,
///     counter: i32,
/// }
///
/// model! {
///     enum AgentField for Agent {
///         name: String,
///         counter: i32,
///     }
/// }
///
/// reductions! {
///     enum AgentAction for Agent {
///         add(n: i32) => |state| Agent { counter: state.counter + n, ..state.clone() },
///     }
/// }
///
/// let hub = define_model_hub::<AgentField, AgentAction>();
/// let (state, dispatcher) = hub.use_reducer_hub(Agent { name: "x".into(), counter: 0 });
///
/// dispatcher.model().dispatch(AgentField::counter(5)).unwrap();
/// dispatcher.actions().dispatch(AgentAction::add(1)).unwrap();
/// assert_eq!(state.get().counter, 6);
/// ```
pub fn define_model_hub<F, A>() -> ReducerHub<F::State>
where
    F: Action,
    A: Action<State = F::State>,
{
    let mut entries: BTreeMap<String, Box<dyn ErasedReducer<F::State>>> = BTreeMap::new();
    entries.insert(MODEL_REDUCER.to_string(), Box::new(reduce_model::<F>()));
    entries.insert(ACTION_REDUCER.to_string(), Box::new(ActionReducer::<A>::new()));
    ReducerHub::from_entries(entries)
}

impl<S: Clone + Send + Sync + 'static> Dispatcher<ReducerHub<S>> {
    /// Sub-dispatcher for the model half of a model hub.
    pub fn model(&self) -> SubDispatcher<S> {
        self.reducer(MODEL_REDUCER)
    }

    /// Sub-dispatcher for the free-form action half of a model hub.
    pub fn actions(&self) -> SubDispatcher<S> {
        self.reducer(ACTION_REDUCER)
    }
}
