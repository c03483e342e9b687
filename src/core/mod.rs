//! Core reducer types and logic.
//!
//! This module contains the pure functional core:
//! - Action definitions via the `Action` trait
//! - The `Reducer` abstraction shared by plain reducers and hubs
//! - Constructor binding for typed invokers
//!
//! Nothing here touches a state cell. Reductions receive the previous
//! state by reference and return the next one.

mod action;
mod constructor;
mod reducer;

pub use action::{decode_args, Action, ActionEvent};
pub use constructor::Constructor;
pub use reducer::{ActionReducer, Reducer};
