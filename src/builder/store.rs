//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::core::Reducer;
use crate::store::{MissPolicy, Store};

/// Builder for constructing stores with a fluent API.
pub struct StoreBuilder<R: Reducer> {
    reducer: R,
    initial: Option<R::State>,
    policy: MissPolicy,
}

impl<R: Reducer> StoreBuilder<R> {
    /// Create a new builder for `reducer`.
    pub fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial: None,
            policy: MissPolicy::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: R::State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set how misses are handled (defaults to [`MissPolicy::Ignore`]).
    pub fn policy(mut self, policy: MissPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the store.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<Store<R>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(Store::with_policy(self.reducer, initial, self.policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActionReducer;
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
    fn builder_validates_required_fields() {
        let result = StoreBuilder::new(ActionReducer::<CounterAction>::new()).build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn fluent_api_builds_store() {
        let store = Store::builder(ActionReducer::<CounterAction>::new())
            .initial(Counter { counter: 3 })
            .policy(MissPolicy::Reject)
            .build()
            .unwrap();

        assert_eq!(store.snapshot(), Counter { counter: 3 });
        assert_eq!(store.dispatcher().policy(), MissPolicy::Reject);
    }

    #[test]
    fn default_policy_is_ignore() {
        let store = StoreBuilder::new(ActionReducer::<CounterAction>::new())
            .initial(Counter { counter: 0 })
            .build()
            .unwrap();

        assert_eq!(store.dispatcher().policy(), MissPolicy::Ignore);
    }
}
