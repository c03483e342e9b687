//! Counter
//!
//! This example demonstrates a single action set driving one store.
//!
//! Key concepts:
//! - Declaring reductions with the `reductions!` macro
//! - Binding action constructors into typed invokers
//! - Replaying encoded action events
//! - Reading state through a provider scope
//!
//! Run with: RUST_LOG=statehub=trace cargo run --example counter

use serde_json::json;
use statehub::context::Scope;
use statehub::{reductions, ActionEvent, ActionReducer, Reducer};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq)]
struct Agent {
    name: String,
    counter: i32,
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

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Counter Example ===\n");

    let reducer = ActionReducer::<AgentAction>::new();
    let (state, dispatcher) = reducer.use_reducer(Agent {
        name: "anonymous".to_string(),
        counter: 0,
    });

    let add = dispatcher.bind(AgentAction::add);
    add((1,));
    add((1,));
    println!("After two adds: {:?}", state.get());

    dispatcher.dispatch(AgentAction::rename("Bond, James".to_string(), 1));
    println!("After rename: {:?}", state.get());

    // Encoded events arrive by name; unknown names leave the state alone.
    for event in [
        ActionEvent::new("add", json!([10])),
        ActionEvent::new("teleport", json!([])),
    ] {
        match dispatcher.dispatch_event(event) {
            Ok(()) => println!("Applied event, state: {:?}", state.get()),
            Err(err) => println!("Rejected event: {err}"),
        }
    }

    println!("\n--- Provider ---");
    let provider = reducer.define_provider("Agent");

    match provider.use_state(&Scope::root()) {
        Ok(agent) => println!("Unexpected state: {agent:?}"),
        Err(err) => println!("Outside provider: {err}"),
    }

    provider.render(&Scope::root(), state.get(), |children| {
        if let Ok(dispatcher) = provider.use_dispatcher(children) {
            dispatcher.dispatch(AgentAction::rename("Chiffre, Le".to_string(), 3));
        }
        if let Ok(agent) = provider.use_state(children) {
            println!("Inside provider: {agent:?}");
        }
    });

    println!("\n=== Example Complete ===");
}
