//! End-to-end flows through stores, hubs and providers.

use serde_json::json;
use statehub::context::Scope;
use statehub::{
    define_model_hub, model, reductions, ActionReducer, HubEvent, MissPolicy, Reducer, ReducerHub,
    Store,
};

#[derive(Clone, Debug, PartialEq)]
struct Agent {
    name: String,
    counter: i32,
}

impl Agent {
    fn anonymous() -> Self {
        Self {
            name: "anonymous".to_string(),
            counter: 0,
        }
    }
}

reductions! {
    enum AgentAction for Agent {
        add(n: i32) => |state| Agent { counter: state.counter + n, ..state.clone() },
        rename(name: String, penalty: i32) => |state| Agent {
            name,
            counter: state.counter - penalty,
        },
    }
}

reductions! {
    enum Reset for Agent {
        reset() => |_state| Agent::anonymous(),
    }
}

model! {
    enum AgentField for Agent {
        name: String,
        counter: i32,
    }
}

#[test]
fn counter_accumulates_across_dispatches() {
    let (state, dispatcher) = ActionReducer::<AgentAction>::new().use_reducer(Agent::anonymous());
    let add = dispatcher.bind(AgentAction::add);

    add((1,));
    add((1,));

    assert_eq!(state.get().counter, 2);
}

#[test]
fn rename_applies_name_and_penalty() {
    let (state, dispatcher) = ActionReducer::<AgentAction>::new().use_reducer(Agent::anonymous());

    dispatcher.dispatch(AgentAction::rename("Bond, James".to_string(), 1));

    assert_eq!(
        state.get(),
        Agent {
            name: "Bond, James".to_string(),
            counter: -1,
        }
    );
}

#[test]
fn descendant_dispatch_is_visible_to_descendants() {
    let provider = ActionReducer::<AgentAction>::new().define_provider("Agent");
    let init = Agent {
        name: "Bond, James".to_string(),
        counter: 4,
    };

    provider.render(&Scope::root(), init, |children| {
        let rename = provider.use_dispatcher(children).unwrap().bind(AgentAction::rename);
        rename(("Chiffre, Le".to_string(), 3));

        let state = provider.use_state(children).unwrap();
        assert_eq!(state.name, "Chiffre, Le");
        assert_eq!(state.counter, 1);
    });
}

#[test]
fn accessors_outside_provider_fail() {
    let provider = ActionReducer::<AgentAction>::new().define_provider("Some");
    let root = Scope::root();

    assert!(provider
        .use_state(&root)
        .unwrap_err()
        .to_string()
        .contains("No state value was provided to SomeContext"));
    assert!(provider
        .use_dispatcher(&root)
        .unwrap_err()
        .to_string()
        .contains("No dispatcher value was provided to SomeContext"));
}

#[test]
fn hub_routes_typed_and_encoded_actions() {
    let hub = ReducerHub::builder()
        .reducer("agent", ActionReducer::<AgentAction>::new())
        .reducer("reset", ActionReducer::<Reset>::new())
        .build()
        .unwrap();
    let (state, dispatcher) = hub.use_reducer_hub(Agent::anonymous());

    dispatcher
        .reducer("agent")
        .dispatch(AgentAction::add(3))
        .unwrap();
    dispatcher
        .dispatch_event(HubEvent::new("agent", "rename", json!(["Bond, James", 1])).into())
        .unwrap();
    assert_eq!(
        state.get(),
        Agent {
            name: "Bond, James".to_string(),
            counter: 2,
        }
    );

    dispatcher.reducer("reset").dispatch(Reset::reset()).unwrap();
    assert_eq!(state.get(), Agent::anonymous());
}

#[test]
fn hub_misses_are_silent_by_default() {
    let hub = ReducerHub::builder()
        .reducer("agent", ActionReducer::<AgentAction>::new())
        .build()
        .unwrap();
    let (state, dispatcher) = hub.use_reducer_hub(Agent::anonymous());

    dispatcher.reducer("missing").dispatch(AgentAction::add(1)).unwrap();
    dispatcher.reducer("agent").dispatch(Reset::reset()).unwrap();
    dispatcher
        .reducer("agent")
        .dispatch_encoded("explode", json!([]))
        .unwrap();

    assert_eq!(state.get(), Agent::anonymous());
}

#[test]
fn hub_misses_are_errors_under_reject() {
    let hub = ReducerHub::builder()
        .reducer("agent", ActionReducer::<AgentAction>::new())
        .build()
        .unwrap();
    let store = Store::builder(hub)
        .initial(Agent::anonymous())
        .policy(MissPolicy::Reject)
        .build()
        .unwrap();

    let err = store
        .dispatcher()
        .reducer("missing")
        .dispatch(AgentAction::add(1))
        .unwrap_err();

    assert!(err.is_miss());
    assert_eq!(store.snapshot(), Agent::anonymous());
}

#[test]
fn nested_hubs_route_through_every_level() {
    let inner = ReducerHub::builder()
        .reducer("agent", ActionReducer::<AgentAction>::new())
        .build()
        .unwrap();
    let outer = ReducerHub::builder()
        .reducer("inner", inner)
        .reducer("reset", ActionReducer::<Reset>::new())
        .build()
        .unwrap();
    let (state, dispatcher) = outer.use_reducer_hub(Agent::anonymous());
    let agent = dispatcher.reducer("inner").reducer("agent");

    agent.dispatch(AgentAction::add(2)).unwrap();
    agent.dispatch_encoded("add", json!([5])).unwrap();

    assert_eq!(state.get().counter, 7);
    assert_eq!(agent.path().collect::<Vec<_>>(), vec!["inner", "agent"]);
}

#[test]
fn model_hub_inside_provider() {
    let provider = define_model_hub::<AgentField, AgentAction>()
        .define_provider("Agent")
        .policy(MissPolicy::Reject);
    let scope = provider.mount(&Scope::root(), Agent::anonymous());
    let dispatcher = provider.use_dispatcher(&scope).unwrap();

    dispatcher
        .model()
        .dispatch(AgentField::name("Bond, James".to_string()))
        .unwrap();
    dispatcher.actions().dispatch(AgentAction::add(7)).unwrap();

    assert_eq!(
        provider.use_state(&scope).unwrap(),
        Agent {
            name: "Bond, James".to_string(),
            counter: 7,
        }
    );
}
