//! Property-based tests for reducers, hubs and guarded contexts.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use serde_json::json;
use statehub::context::{Context, Scope};
use statehub::model::reduce_model;
use statehub::{
    model, reductions, Action, ActionReducer, DispatchError, HubAction, MissPolicy, Reducer,
    ReducerHub, Store,
};

#[derive(Clone, Debug, PartialEq)]
struct Agent {
    name: String,
    counter: i64,
}

reductions! {
    enum AgentAction for Agent {
        add(n: i64) => |state| Agent { counter: state.counter + n, ..state.clone() },
        rename(name: String, penalty: i64) => |state| Agent {
            name,
            counter: state.counter - penalty,
        },
    }
}

reductions! {
    enum Tally for Agent {
        double() => |state| Agent { counter: state.counter * 2, ..state.clone() },
    }
}

model! {
    enum AgentField for Agent {
        name: String,
        counter: i64,
    }
}

prop_compose! {
    fn arbitrary_agent()(name in "[a-zA-Z ,]{0,16}", counter in -1000i64..1000) -> Agent {
        Agent { name, counter }
    }
}

prop_compose! {
    fn arbitrary_action()(variant in 0..2u8, n in -100i64..100, name in "[a-z]{1,8}") -> AgentAction {
        match variant {
            0 => AgentAction::add(n),
            _ => AgentAction::rename(name, n),
        }
    }
}

fn hub() -> ReducerHub<Agent> {
    ReducerHub::builder()
        .reducer("A", ActionReducer::<AgentAction>::new())
        .reducer("B", ActionReducer::<Tally>::new())
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn supplied_value_reads_back(value in any::<i64>()) {
        let context = Context::<i64>::new("Some").with_value_descriptor("state");
        let scope = Scope::root().supply(&context, value);
        prop_assert_eq!(context.use_value(&scope), Ok(value));
    }

    #[test]
    fn absent_value_always_fails(descriptor in "[A-Z][a-z]{0,8}", word in "[a-z]{1,8}") {
        let context = Context::<i64>::new(descriptor.clone()).with_value_descriptor(word.clone());
        let scope = Scope::root().supply_absent(&context);

        let err = context.use_value(&scope).unwrap_err();
        prop_assert_eq!(
            err.to_string(),
            format!("No {word} value was provided to {descriptor}Context")
        );
    }

    #[test]
    fn unknown_action_name_is_no_op(state in arbitrary_agent(), name in "[a-z]{1,12}") {
        prop_assume!(!AgentAction::names().contains(&name.as_str()));

        let reducer = ActionReducer::<AgentAction>::new();
        let miss = reducer.decode(&name, json!([1]));
        prop_assert!(matches!(miss, Err(DispatchError::UnknownAction { .. })), "expected UnknownAction, got {:?}", miss);

        let (handle, dispatcher) = reducer.use_reducer(state.clone());
        prop_assert!(dispatcher.submit_encoded(&name, json!([1])).is_ok());
        prop_assert_eq!(handle.get(), state);
    }

    #[test]
    fn hub_misses_leave_state_unchanged(state in arbitrary_agent(), n in -100i64..100) {
        let hub = hub();

        let unknown_reducer = hub.reduce(&state, HubAction::new("C", AgentAction::add(n)));
        prop_assert_eq!(&unknown_reducer, &state);

        let unknown_action = hub.reduce(&state, HubAction::new("A", Tally::double()));
        prop_assert_eq!(&unknown_action, &state);
    }

    #[test]
    fn hub_hit_matches_direct_reduction(state in arbitrary_agent(), action in arbitrary_action()) {
        let direct = action.clone().apply(&state);
        let routed = hub().reduce(&state, HubAction::new("A", action));
        prop_assert_eq!(routed, direct);
    }

    #[test]
    fn model_replaces_exactly_one_field(state in arbitrary_agent(), counter in any::<i64>()) {
        let original = state.clone();
        let next = reduce_model::<AgentField>().reduce(&state, AgentField::counter(counter));

        prop_assert_eq!(next.counter, counter);
        prop_assert_eq!(&next.name, &original.name);
        prop_assert_eq!(state, original);
    }

    #[test]
    fn dispatches_apply_in_order(
        init in arbitrary_agent(),
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let expected = actions
            .iter()
            .cloned()
            .fold(init.clone(), |state, action| action.apply(&state));

        let (handle, dispatcher) = ActionReducer::<AgentAction>::new().use_reducer(init);
        for action in actions {
            dispatcher.dispatch(action);
        }

        prop_assert_eq!(handle.get(), expected);
    }

    #[test]
    fn reject_policy_never_changes_state_on_miss(state in arbitrary_agent(), name in "[A-Z]{1,4}") {
        let store = Store::with_policy(hub(), state.clone(), MissPolicy::Reject);
        let result = store.dispatcher().reducer(name).dispatch(AgentAction::add(1));

        prop_assert!(result.is_err());
        prop_assert_eq!(store.snapshot(), state);
    }
}
