//! Builder API for ergonomic store and hub construction.
//!
//! This module provides fluent builders and declaration macros for creating
//! reducers and stores with minimal boilerplate while maintaining type
//! safety.

pub mod error;
pub mod hub;
pub mod macros;
pub mod store;

pub use error::BuildError;
pub use hub::HubBuilder;
pub use store::StoreBuilder;
