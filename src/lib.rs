//! # Choreboard
//!
//! Household chore tracking client. The server keeps users, the chore
//! catalog and the current week; this crate mirrors that state, renders it,
//! and turns user actions into calls against the server's JSON endpoints.
//!
//! ## Modules
//!
//! - [`model`]: Board data types and score rules
//! - [`api`]: Gateway to the Choreboard REST endpoints
//! - [`store`]: Local mirror of the last server response
//! - [`controller`]: Commands, interaction state and dispatch
//! - [`view`]: Renderer from state to a view tree
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use choreboard::api::{GatewayConfig, HttpGateway};
//! use choreboard::controller::{Command, Controller};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = HttpGateway::new(GatewayConfig::new("http://localhost:5001"))?;
//!     let mut controller = Controller::new(gateway);
//!
//!     // Initial load, then log chore #1 for user #2
//!     controller.dispatch(Command::Load).await;
//!     controller.dispatch(Command::QuickAdd(1)).await;
//!     controller.dispatch(Command::SelectUser(2)).await;
//!
//!     println!("{}", controller.render());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod ids;
pub mod model;
pub mod store;
pub mod view;

// Re-export top-level types for convenience
pub use api::{ApiCall, ChoreApi, GatewayConfig, GatewayError, HttpGateway};

pub use model::{
    AssignedChore, BoardState, Chore, ChoreId, ChoreType, CompletionEntry, CurrentWeek, User,
    UserId,
};

pub use controller::{Command, Controller, Modal, Outcome, Page, UiState};

pub use store::StateStore;

pub use view::{render, Screen};

pub use config::{Config, ConfigError, LoadReport, LoggingConfig, ServerConfig};
