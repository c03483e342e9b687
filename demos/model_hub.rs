//! Model Hub
//!
//! This example demonstrates composing reducers into hubs.
//!
//! Key concepts:
//! - Property replacement with the `model!` macro
//! - Fusing a model and an action set with `define_model_hub`
//! - Building hubs with validation and nesting them
//! - Choosing between silent and rejected misses
//!
//! Run with: RUST_LOG=statehub=debug cargo run --example model_hub

use statehub::{
    define_model_hub, model, reductions, ActionReducer, HubBuilder, MissPolicy, ReducerHub, Store,
};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq)]
struct Profile {
    id: u64,
    name: String,
    visits: u32,
}

model! {
    enum ProfileField for Profile {
        name: String,
        visits: u32,
    }
}

reductions! {
    enum ProfileAction for Profile {
        visit() => |state| Profile { visits: state.visits + 1, ..state.clone() },
    }
}

reductions! {
    enum Moderation for Profile {
        anonymize() => |state| Profile { name: String::new(), ..state.clone() },
    }
}

fn profile() -> Profile {
    Profile {
        id: 7,
        name: "Vesper".to_string(),
        visits: 0,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Model Hub Example ===\n");

    let hub = define_model_hub::<ProfileField, ProfileAction>();
    println!("Hub reducers: {:?}", hub.names().collect::<Vec<_>>());

    let (state, dispatcher) = hub.use_reducer_hub(profile());
    let _ = dispatcher.model().dispatch(ProfileField::name("Lynd".to_string()));
    let _ = dispatcher.actions().dispatch(ProfileAction::visit());
    println!("After model and action: {:?}", state.get());

    // `id` is not a model field, so addressing it by name is a miss.
    let _ = dispatcher
        .model()
        .dispatch_encoded("id", serde_json::json!([99]));
    println!("After encoded id: {:?}", state.get());

    println!("\n--- Validation ---");
    let invalid = HubBuilder::new()
        .reducer("", ActionReducer::<Moderation>::new())
        .reducer("profile", define_model_hub::<ProfileField, ProfileAction>())
        .reducer("profile", ActionReducer::<Moderation>::new())
        .build();
    if let Err(errors) = invalid {
        for err in errors.iter() {
            println!("Build error: {err}");
        }
    }

    println!("\n--- Nested hub, reject policy ---");
    let outer: ReducerHub<Profile> = match ReducerHub::builder()
        .reducer("profile", define_model_hub::<ProfileField, ProfileAction>())
        .reducer("moderation", ActionReducer::<Moderation>::new())
        .build()
    {
        Ok(hub) => hub,
        Err(errors) => {
            println!("Unexpected build errors: {errors:?}");
            return;
        }
    };
    let store = Store::with_policy(outer, profile(), MissPolicy::Reject);
    let visits = store.dispatcher().reducer("profile").reducer("action");

    let _ = visits.dispatch(ProfileAction::visit());
    let _ = store
        .dispatcher()
        .reducer("moderation")
        .dispatch(Moderation::anonymize());
    println!("After nested dispatches: {:?}", store.snapshot());

    match store.dispatcher().reducer("audit").dispatch(Moderation::anonymize()) {
        Ok(()) => println!("Unexpected success"),
        Err(err) => println!("Rejected: {err}"),
    }

    println!("\n=== Example Complete ===");
}
