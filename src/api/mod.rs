//! Choreboard API Gateway
//!
//! Wraps the Choreboard server's fixed JSON endpoints.
//!
//! # Endpoints
//!
//! - `GET /api/state` - Full state load
//! - `POST /api/log_chore` - Record a repeatable-chore completion
//! - `POST /api/update_weekly_chore` - Toggle a weekly chore
//! - `POST /api/add_chore` - Create a catalog chore
//! - `POST /api/delete_chore` - Remove a catalog chore
//! - `POST /api/reset_week` - Start a new week with a new prize
//!
//! Every endpoint answers with the entire authoritative
//! [`BoardState`](crate::model::BoardState).
//!
//! # Example
//!
//! ```rust,no_run
//! use choreboard::api::{ApiCall, ChoreApi, GatewayConfig, HttpGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = HttpGateway::new(GatewayConfig::new("http://localhost:5001"))?;
//!     let state = gateway.send(&ApiCall::FetchState).await?;
//!     println!("{} users, prize: {}", state.users.len(), state.current_week.prize);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dto;
pub mod error;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{ChoreApi, GatewayConfig, HttpGateway};
pub use dto::{
    AddChoreRequest, ApiCall, DeleteChoreRequest, LogChoreRequest, Method, ResetWeekRequest,
    UpdateWeeklyChoreRequest,
};
pub use error::{GatewayError, GatewayResult, CONNECTIVITY_MESSAGE};
