//! Two-level addressed actions.

use crate::core::{Action, ActionEvent};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::any::Any;
use std::fmt;

/// An action addressed to one named reducer of a hub.
///
/// The payload is the addressed reducer's own action value, type-erased so
/// actions of independently declared reducers can travel through one hub.
pub struct HubAction {
    pub(crate) reducer: String,
    pub(crate) action: String,
    pub(crate) payload: Box<dyn Any + Send>,
}

impl HubAction {
    /// Address `action` to the reducer registered as `reducer`.
    pub fn new<A: Action>(reducer: impl Into<String>, action: A) -> Self {
        Self {
            reducer: reducer.into(),
            action: action.name().to_string(),
            payload: Box::new(action),
        }
    }

    /// Address an action of a nested hub registered as `reducer`.
    ///
    /// The nested hub sees the inner reducer name as the action name.
    pub fn nested(reducer: impl Into<String>, inner: HubAction) -> Self {
        Self {
            reducer: reducer.into(),
            action: inner.reducer.clone(),
            payload: Box::new(inner),
        }
    }

    pub fn reducer(&self) -> &str {
        &self.reducer
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

impl fmt::Debug for HubAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubAction")
            .field("reducer", &self.reducer)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

/// Serializable hub event: `{ reducer, action, args }`.
///
/// Converts into the [`ActionEvent`] a hub dispatcher accepts, where the
/// reducer name becomes the action and `{action, args}` becomes the
/// arguments.
///
/// ```rust
/// use statehub::{ActionEvent, HubEvent};
/// use serde_json::json;
///
/// let event = HubEvent::new("action", "add", json!([1]));
/// let encoded: ActionEvent = event.into();
///
/// assert_eq!(encoded.action, "action");
/// assert_eq!(encoded.args, json!({"action": "add", "args": [1]}));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HubEvent {
    /// Name of the reducer inside the hub
    pub reducer: String,

    /// Name of the action inside that reducer
    pub action: String,

    /// Positional arguments, normally a JSON array
    #[serde(default)]
    pub args: Value,
}

impl HubEvent {
    pub fn new(reducer: impl Into<String>, action: impl Into<String>, args: Value) -> Self {
        Self {
            reducer: reducer.into(),
            action: action.into(),
            args,
        }
    }
}

impl From<HubEvent> for ActionEvent {
    fn from(event: HubEvent) -> Self {
        ActionEvent {
            action: event.reducer,
            args: json!({ "action": event.action, "args": event.args }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reductions;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        counter: i32,
    }

    reductions! {
        enum CounterAction for Counter {
            add(n: i32) => |state| Counter { counter: state.counter + n },
        }
    }

    #[test]
    fn new_records_names() {
        let action = HubAction::new("score", CounterAction::add(1));
        assert_eq!(action.reducer(), "score");
        assert_eq!(action.action(), "add");
    }

    #[test]
    fn nested_uses_inner_reducer_as_action_name() {
        let action = HubAction::nested("outer", HubAction::new("score", CounterAction::add(1)));
        assert_eq!(action.reducer(), "outer");
        assert_eq!(action.action(), "score");
    }

    #[test]
    fn debug_shows_addressing() {
        let action = HubAction::new("score", CounterAction::add(1));
        let debug = format!("{action:?}");
        assert!(debug.contains("score"));
        assert!(debug.contains("add"));
    }

    #[test]
    fn hub_event_deserializes_with_default_args() {
        let event: HubEvent =
            serde_json::from_value(json!({"reducer": "score", "action": "reset"})).unwrap();
        assert_eq!(event, HubEvent::new("score", "reset", Value::Null));
    }
}
