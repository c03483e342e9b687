//! The `Action` trait and its serializable event form.
//!
//! An action set is a closed enum with one variant per action name. Each
//! variant carries the positional arguments of its reduction, so an action
//! can never be dispatched with the wrong argument types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

/// A closed set of named, typed state transitions.
///
/// Usually generated by [`reductions!`](crate::reductions) or
/// [`model!`](crate::model), but can be written by hand.
///
/// # Example
///
/// ```rust
/// use statehub::Action;
/// use serde_json::Value;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Counter {
///     value: i32,
/// }
///
/// #[derive(Debug)]
/// enum CounterAction {
///     Add(i32),
///     Reset,
/// }
///
/// impl Action for CounterAction {
///     type State = Counter;
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Add(_) => "add",
///             Self::Reset => "reset",
///         }
///     }
///
///     fn names() -> &'static [&'static str] {
///         &["add", "reset"]
///     }
///
///     fn apply(self, state: &Counter) -> Counter {
///         match self {
///             Self::Add(n) => Counter { value: state.value + n },
///             Self::Reset => Counter { value: 0 },
///         }
///     }
///
///     fn decode(name: &str, args: Value) -> Result<Option<Self>, serde_json::Error> {
///         match name {
///             "add" => {
///                 let (n,): (i32,) = statehub::core::decode_args(args)?;
///                 Ok(Some(Self::Add(n)))
///             }
///             "reset" => Ok(Some(Self::Reset)),
///             _ => Ok(None),
///         }
///     }
/// }
///
/// let next = CounterAction::Add(2).apply(&Counter { value: 1 });
/// assert_eq!(next, Counter { value: 3 });
/// ```
pub trait Action: Debug + Send + Sized + 'static {
    /// The state shape every reduction of this set operates on.
    type State: Clone + Send + Sync + 'static;

    /// Name of this action, unique within the set.
    fn name(&self) -> &'static str;

    /// All action names of the set, in declaration order.
    fn names() -> &'static [&'static str];

    /// Compute the next state. The previous state is never mutated.
    fn apply(self, state: &Self::State) -> Self::State;

    /// Rebuild an action from its name and positional JSON arguments.
    ///
    /// Returns `Ok(None)` when `name` is not part of this set.
    fn decode(name: &str, args: Value) -> Result<Option<Self>, serde_json::Error>;
}

/// Serializable action event: an action name plus positional arguments.
///
/// ```rust
/// use statehub::ActionEvent;
/// use serde_json::json;
///
/// let event: ActionEvent =
///     serde_json::from_value(json!({"action": "rename", "args": ["Bond, James", 1]})).unwrap();
/// assert_eq!(event.action, "rename");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    /// Name of the action to run
    pub action: String,

    /// Positional arguments, normally a JSON array
    #[serde(default)]
    pub args: Value,
}

impl ActionEvent {
    pub fn new(action: impl Into<String>, args: Value) -> Self {
        Self {
            action: action.into(),
            args,
        }
    }
}

/// Decode positional JSON arguments into an argument tuple.
///
/// An empty array and `null` both decode as "no arguments".
pub fn decode_args<T: DeserializeOwned>(args: Value) -> Result<T, serde_json::Error> {
    match args {
        Value::Array(items) if items.is_empty() => serde_json::from_value(Value::Null),
        other => serde_json::from_value(other),
    }
}
