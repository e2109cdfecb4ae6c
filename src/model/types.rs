//! Board data types
//!
//! Mirrors the JSON document served by `GET /api/state`. Field names are
//! camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unique identifier for a household member
pub type UserId = u64;

/// Unique identifier for a catalog chore
pub type ChoreId = u64;

/// Unique identifier for a completion log entry
pub type LogId = u64;

/// A household member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// How a catalog chore is scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoreType {
    /// Anyone may complete it any number of times per week
    #[default]
    Repeatable,
    /// Assigned to one user for the week, tracked with a completed flag
    Weekly,
}

impl ChoreType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoreType::Repeatable => "repeatable",
            ChoreType::Weekly => "weekly",
        }
    }
}

impl fmt::Display for ChoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ChoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "repeatable" => Ok(ChoreType::Repeatable),
            "weekly" => Ok(ChoreType::Weekly),
            other => Err(format!(
                "Unknown chore type: {}. Use: repeatable, weekly",
                other
            )),
        }
    }
}

/// A reusable chore definition in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    pub id: ChoreId,
    pub name: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub points: i64,
    #[serde(rename = "type")]
    pub kind: ChoreType,
}

/// A weekly chore assigned to one user for the current week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedChore {
    pub chore_id: ChoreId,
    /// `None` when the chore was added as weekly without picking a user
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub completed: bool,
}

/// One recorded chore completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    /// Older servers fall back to the chore id when no log id was sent
    #[serde(default)]
    pub log_id: Option<LogId>,
    pub chore_id: ChoreId,
    pub user_id: UserId,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl CompletionEntry {
    /// Effective log id, mirroring the server's fallback to the chore id
    pub fn effective_log_id(&self) -> LogId {
        self.log_id.unwrap_or(self.chore_id)
    }
}

/// The period between two week resets
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeek {
    #[serde(default)]
    pub prize: String,
    #[serde(default)]
    pub assigned_chores: Vec<AssignedChore>,
    #[serde(default)]
    pub completed_log: Vec<CompletionEntry>,
}

/// The full authoritative state returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub master_chores: Vec<Chore>,
    #[serde(default)]
    pub current_week: CurrentWeek,
}

impl BoardState {
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn chore(&self, id: ChoreId) -> Option<&Chore> {
        self.master_chores.iter().find(|c| c.id == id)
    }

    /// Catalog chores of the given type, in catalog order
    pub fn chores_of_type(&self, kind: ChoreType) -> impl Iterator<Item = &Chore> {
        self.master_chores.iter().filter(move |c| c.kind == kind)
    }

    /// Weekly assignments belonging to a user
    pub fn assignments_for(&self, user: UserId) -> impl Iterator<Item = &AssignedChore> {
        self.current_week
            .assigned_chores
            .iter()
            .filter(move |a| a.user_id == Some(user))
    }

    pub fn assignment(&self, chore: ChoreId, user: UserId) -> Option<&AssignedChore> {
        self.current_week
            .assigned_chores
            .iter()
            .find(|a| a.chore_id == chore && a.user_id == Some(user))
    }
}

/// Accept `null` point values and read them as zero.
///
/// Browsers serialize a failed number parse as `null`, and the server stores
/// whatever it was sent.
fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_state() {
        let json = r#"{
            "users": [{"id": 1, "name": "Alex"}, {"id": 2, "name": "Jordan"}],
            "masterChores": [
                {"id": 1, "name": "Washed a dish", "points": 5, "type": "repeatable"},
                {"id": 7, "name": "Trash", "points": 15, "type": "weekly"}
            ],
            "currentWeek": {
                "prize": "Winner picks dinner!",
                "assignedChores": [{"choreId": 7, "userId": 2, "completed": true}],
                "completedLog": [
                    {"logId": 99, "choreId": 1, "userId": 1, "timestamp": "2024-03-01T10:00:00.000Z"},
                    {"logId": 7, "choreId": 7, "userId": 2, "timestamp": null}
                ]
            }
        }"#;

        let state: BoardState = serde_json::from_str(json).unwrap();
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.chore(7).unwrap().kind, ChoreType::Weekly);
        assert!(state.assignment(7, 2).unwrap().completed);
        assert!(state.current_week.completed_log[0].timestamp.is_some());
        assert!(state.current_week.completed_log[1].timestamp.is_none());
        assert_eq!(state.current_week.prize, "Winner picks dinner!");
    }

    #[test]
    fn test_null_points_read_as_zero() {
        let chore: Chore =
            serde_json::from_str(r#"{"id": 3, "name": "Odd", "points": null, "type": "repeatable"}"#)
                .unwrap();
        assert_eq!(chore.points, 0);
    }

    #[test]
    fn test_unvalidated_points_still_decode() {
        let json = r#"{
            "users": [{"id": 1, "name": "Alex"}],
            "masterChores": [
                {"id": 1, "name": "Broke a plate", "points": -5, "type": "repeatable"},
                {"id": 2, "name": "Rebuilt the shed", "points": 5000000000, "type": "repeatable"}
            ],
            "currentWeek": {"prize": "", "assignedChores": [], "completedLog": []}
        }"#;

        let state: BoardState = serde_json::from_str(json).unwrap();
        assert_eq!(state.chore(1).unwrap().points, -5);
        assert_eq!(state.chore(2).unwrap().points, 5_000_000_000);
    }

    #[test]
    fn test_unassigned_weekly_chore() {
        let assigned: AssignedChore =
            serde_json::from_str(r#"{"choreId": 3, "userId": null, "completed": false}"#).unwrap();
        assert_eq!(assigned.user_id, None);
    }

    #[test]
    fn test_missing_log_id_falls_back_to_chore() {
        let entry: CompletionEntry =
            serde_json::from_str(r#"{"choreId": 12, "userId": 1}"#).unwrap();
        assert_eq!(entry.effective_log_id(), 12);
    }

    #[test]
    fn test_serializes_camel_case() {
        let state = BoardState::default();
        let value = serde_json::to_value(&state).unwrap();
        assert!(value.get("masterChores").is_some());
        assert!(value["currentWeek"].get("completedLog").is_some());
    }

    #[test]
    fn test_chore_type_parse() {
        assert_eq!("Weekly".parse::<ChoreType>().unwrap(), ChoreType::Weekly);
        assert!("daily".parse::<ChoreType>().is_err());
    }
}
