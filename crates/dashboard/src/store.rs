// File: crates/dashboard/src/store.rs
// Summary: Reducer trait and a revisioned store that owns one piece of state.

use std::fmt::Debug;

use tracing::debug;

/// State that can be advanced by an action. Reducers are pure: the old state is left untouched.
pub trait Reducer: Sized {
    type Action: Debug;

    fn reduce(&self, action: Self::Action) -> Self;
}

#[derive(Clone, Debug, Default)]
pub struct Store<S> {
    state: S,
    revision: u64,
}

impl<S: Reducer> Store<S> {
    pub fn new(state: S) -> Self {
        Self { state, revision: 0 }
    }

    pub fn state(&self) -> &S { &self.state }

    /// Number of dispatched actions.
    pub fn revision(&self) -> u64 { self.revision }

    pub fn dispatch(&mut self, action: S::Action) {
        debug!(revision = self.revision + 1, action = ?action, "dispatch");
        self.state = self.state.reduce(action);
        self.revision += 1;
    }
}
