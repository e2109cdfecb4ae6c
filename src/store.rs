//! Local State Store
//!
//! Holds the last board state the server returned. The store is never the
//! source of truth: the only mutation is a wholesale replace with a server
//! response, so nothing is ever merged field by field.

use crate::model::BoardState;

/// Mirror of the server's board state
#[derive(Debug, Default)]
pub struct StateStore {
    state: Option<BoardState>,
    revision: u64,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, `None` until the first successful load
    pub fn state(&self) -> Option<&BoardState> {
        self.state.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_some()
    }

    /// Number of replacements applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole state with a server response
    pub fn replace(&mut self, state: BoardState) {
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            users = state.users.len(),
            chores = state.master_chores.len(),
            "Replaced board state"
        );
        self.state = Some(state);
    }
}
