//! Builder for fusing reducers into a hub.

use crate::builder::error::BuildError;
use crate::core::Reducer;
use crate::hub::{ErasedReducer, ReducerHub};
use std::collections::{BTreeMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for fusing named reducers into a [`ReducerHub`].
///
/// Validation accumulates every problem instead of stopping at the first
/// one, so a misconfigured hub reports all bad names at once.
pub struct HubBuilder<S> {
    entries: Vec<(String, Box<dyn ErasedReducer<S>>)>,
}

impl<S: Clone + Send + Sync + 'static> HubBuilder<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `reducer` under `name`.
    pub fn reducer<R>(mut self, name: impl Into<String>, reducer: R) -> Self
    where
        R: Reducer<State = S>,
    {
        let entry: Box<dyn ErasedReducer<S>> = Box::new(reducer);
        self.entries.push((name.into(), entry));
        self
    }

    /// Check every registered name, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut seen = HashSet::new();
        let checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = self
            .entries
            .iter()
            .map(|(name, _)| {
                if name.is_empty() {
                    Validation::fail(BuildError::EmptyReducerName)
                } else if !seen.insert(name.as_str()) {
                    Validation::fail(BuildError::DuplicateReducer { name: name.clone() })
                } else {
                    Validation::success(())
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the hub.
    /// Returns every validation failure if any name is empty or repeated.
    pub fn build(self) -> Result<ReducerHub<S>, NonEmptyVec<BuildError>> {
        match self.validate() {
            Validation::Success(_) => {
                let entries: BTreeMap<_, _> = self.entries.into_iter().collect();
                Ok(ReducerHub::from_entries(entries))
            }
            Validation::Failure(errors) => Err(errors),
        }
    }
}

impl<S: Clone + Send + Sync + 'static> Default for HubBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
