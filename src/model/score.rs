//! Score computation
//!
//! Points are resolved from the catalog at scoring time. Log entries whose
//! chore has since been deleted contribute nothing.

use super::types::{BoardState, ChoreId, CompletionEntry, User, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Name shown for log entries whose chore is no longer in the catalog
pub const DELETED_CHORE_NAME: &str = "(deleted chore)";

/// A user's total for the current week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserScore {
    pub user_id: UserId,
    pub name: String,
    pub points: i64,
}

/// A completion resolved against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub chore_id: ChoreId,
    pub chore_name: String,
    pub points: i64,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Points a single log entry is worth right now
pub fn entry_points(state: &BoardState, entry: &CompletionEntry) -> i64 {
    state.chore(entry.chore_id).map(|c| c.points).unwrap_or(0)
}

/// Sum of points for every log entry belonging to `user`
pub fn user_total(state: &BoardState, user: UserId) -> i64 {
    state
        .current_week
        .completed_log
        .iter()
        .filter(|e| e.user_id == user)
        .map(|e| entry_points(state, e))
        .sum()
}

/// Totals for every user, in user order
pub fn totals(state: &BoardState) -> Vec<UserScore> {
    state.users.iter().map(|u| score_for(state, u)).collect()
}

fn score_for(state: &BoardState, user: &User) -> UserScore {
    UserScore {
        user_id: user.id,
        name: user.name.clone(),
        points: user_total(state, user.id),
    }
}

/// The user with the strictly greatest total.
///
/// Ties keep the first user in iteration order, so with equal totals the
/// first listed user leads. Returns `None` when there are no users.
pub fn leader(state: &BoardState) -> Option<UserScore> {
    let mut best: Option<UserScore> = None;
    for score in totals(state) {
        match &best {
            Some(current) if score.points <= current.points => {}
            _ => best = Some(score),
        }
    }
    best
}

/// A user's completions in log order
pub fn history(state: &BoardState, user: UserId) -> Vec<HistoryEntry> {
    state
        .current_week
        .completed_log
        .iter()
        .filter(|e| e.user_id == user)
        .map(|e| {
            let chore = state.chore(e.chore_id);
            HistoryEntry {
                chore_id: e.chore_id,
                chore_name: chore
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| DELETED_CHORE_NAME.to_string()),
                points: chore.map(|c| c.points).unwrap_or(0),
                timestamp: e.timestamp,
            }
        })
        .collect()
}
