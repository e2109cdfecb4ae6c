//! Data Transfer Objects
//!
//! Request bodies for the Choreboard endpoints and the [`ApiCall`] value
//! that pairs each body with its route. Every endpoint answers with the
//! full [`BoardState`](crate::model::BoardState).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{ChoreId, ChoreType, LogId, UserId};

// ============================================
// REQUEST DTOs
// ============================================

/// Record a repeatable-chore completion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogChoreRequest {
    pub log_id: LogId,
    pub chore_id: ChoreId,
    pub user_id: UserId,
    pub timestamp: DateTime<Utc>,
}

/// Set a weekly chore's completed flag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWeeklyChoreRequest {
    pub chore_id: ChoreId,
    pub user_id: UserId,
    pub completed: bool,
    pub log_id: LogId,
    pub timestamp: DateTime<Utc>,
}

/// Create a catalog chore
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChoreRequest {
    pub id: ChoreId,
    pub name: String,
    pub points: u32,
    #[serde(rename = "type")]
    pub kind: ChoreType,
    /// Outer `None` omits the key (repeatable chores). Weekly chores always
    /// carry it, as `null` when no user was picked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<Option<UserId>>,
}

impl AddChoreRequest {
    pub fn new(id: ChoreId, name: impl Into<String>, points: u32, kind: ChoreType) -> Self {
        Self {
            id,
            name: name.into(),
            points,
            kind,
            assigned_user_id: None,
        }
    }

    /// Attach the assignee; only weekly chores carry the field
    pub fn assigned_to(mut self, user: Option<UserId>) -> Self {
        self.assigned_user_id = match self.kind {
            ChoreType::Weekly => Some(user),
            ChoreType::Repeatable => None,
        };
        self
    }
}

/// Remove a catalog chore
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteChoreRequest {
    pub chore_id: ChoreId,
}

/// Start a new week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResetWeekRequest {
    pub prize: String,
}

// ============================================
// CALLS
// ============================================

/// HTTP method used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One request against the Choreboard server
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    FetchState,
    LogChore(LogChoreRequest),
    UpdateWeeklyChore(UpdateWeeklyChoreRequest),
    AddChore(AddChoreRequest),
    DeleteChore(DeleteChoreRequest),
    ResetWeek(ResetWeekRequest),
}

impl ApiCall {
    pub fn path(&self) -> &'static str {
        match self {
            ApiCall::FetchState => "/api/state",
            ApiCall::LogChore(_) => "/api/log_chore",
            ApiCall::UpdateWeeklyChore(_) => "/api/update_weekly_chore",
            ApiCall::AddChore(_) => "/api/add_chore",
            ApiCall::DeleteChore(_) => "/api/delete_chore",
            ApiCall::ResetWeek(_) => "/api/reset_week",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            ApiCall::FetchState => Method::Get,
            _ => Method::Post,
        }
    }

    /// JSON body to send, if the endpoint takes one
    pub fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        let value = match self {
            ApiCall::FetchState => return Ok(None),
            ApiCall::LogChore(req) => serde_json::to_value(req)?,
            ApiCall::UpdateWeeklyChore(req) => serde_json::to_value(req)?,
            ApiCall::AddChore(req) => serde_json::to_value(req)?,
            ApiCall::DeleteChore(req) => serde_json::to_value(req)?,
            ApiCall::ResetWeek(req) => serde_json::to_value(req)?,
        };
        Ok(Some(value))
    }

    /// Whether the call changes server state
    pub fn is_mutation(&self) -> bool {
        self.method() == Method::Post
    }
}
