//! Interaction Controller
//!
//! Owns the state store, the interaction state and the gateway. A dispatch
//! runs the reducer, sends the resulting call, and on success replaces the
//! store wholesale with the server's answer. On failure the store is left
//! exactly as it was and the error screen takes over.
//!
//! Calls are issued one at a time; there is no de-duplication or retry.

mod reducer;
mod ui;

pub use reducer::{apply_success, plan, Command, WEEK_RESET_ACK};
pub use ui::{AddChoreForm, FormError, Modal, Page, UiState};

use crate::api::{ChoreApi, GatewayError};
use crate::ids::{Clock, IdGenerator, RandomIds, SystemClock};
use crate::model::BoardState;
use crate::store::StateStore;
use crate::view::{render, Screen};

/// What a dispatch did
#[derive(Debug)]
pub enum Outcome {
    /// Only interaction state changed
    Local,
    /// The server accepted the call and the store was replaced
    Synced,
    /// The call failed; the store is unchanged
    Failed(GatewayError),
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Drives the board from user commands
pub struct Controller<G> {
    gateway: G,
    store: StateStore,
    ui: UiState,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl<G: ChoreApi> Controller<G> {
    /// Controller with random ids and the system clock
    pub fn new(gateway: G) -> Self {
        Self::with_sources(gateway, Box::new(RandomIds), Box::new(SystemClock))
    }

    pub fn with_sources(gateway: G, ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        Self {
            gateway,
            store: StateStore::new(),
            ui: UiState::default(),
            ids,
            clock,
        }
    }

    pub fn state(&self) -> Option<&BoardState> {
        self.store.state()
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Run one command to completion
    pub async fn dispatch(&mut self, command: Command) -> Outcome {
        tracing::debug!(?command, "Dispatching command");
        self.ui.acknowledgment = None;

        let call = match plan(
            &mut self.ui,
            self.store.state(),
            command,
            self.ids.as_ref(),
            self.clock.as_ref(),
        ) {
            Some(call) => call,
            None => return Outcome::Local,
        };

        match self.gateway.send(&call).await {
            Ok(state) => {
                self.store.replace(state);
                apply_success(&mut self.ui, &call);
                tracing::info!(
                    path = call.path(),
                    mutation = call.is_mutation(),
                    revision = self.store.revision(),
                    "Board synced"
                );
                Outcome::Synced
            }
            Err(e) => {
                tracing::warn!(
                    path = call.path(),
                    kept_state = self.store.is_loaded(),
                    "Call failed, board left unchanged"
                );
                self.ui.error = Some(e.user_message().to_string());
                Outcome::Failed(e)
            }
        }
    }

    /// Run commands in order, stopping at the first failure
    pub async fn dispatch_all(&mut self, commands: impl IntoIterator<Item = Command>) -> Outcome {
        let mut last = Outcome::Local;
        for command in commands {
            last = self.dispatch(command).await;
            if last.is_failed() {
                break;
            }
        }
        last
    }

    /// Current screen
    pub fn render(&self) -> Screen {
        render(self.store.state(), &self.ui)
    }
}
