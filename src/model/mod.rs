//! Board model
//!
//! Data types mirrored from the server and the score rules derived from them.

pub mod score;
mod types;

pub use score::{history, leader, totals, user_total, HistoryEntry, UserScore};
pub use types::{
    AssignedChore, BoardState, Chore, ChoreId, ChoreType, CompletionEntry, CurrentWeek, LogId,
    User, UserId,
};
