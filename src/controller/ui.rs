//! Interaction state
//!
//! Everything the client keeps besides the server's board state: which page
//! is showing, whether the user picker is open, and the admin form drafts.
//! None of it is persisted.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::api::AddChoreRequest;
use crate::model::{ChoreId, ChoreType, UserId};

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Scoreboard,
    Admin,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Scoreboard, Page::Admin];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Scoreboard => "Scoreboard",
            Page::Admin => "Admin",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "scoreboard" | "scores" => Ok(Page::Scoreboard),
            "admin" => Ok(Page::Admin),
            other => Err(format!("Unknown page: {}. Use: home, scoreboard, admin", other)),
        }
    }
}

/// User picker state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Idle,
    /// Waiting for the user who completed `chore_id`
    SelectingUser { chore_id: ChoreId },
}

/// Add-chore form validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Chore name cannot be empty")]
    EmptyName,

    #[error("Points must be a whole number of zero or more, got {0:?}")]
    InvalidPoints(String),
}

/// Draft of the admin add-chore form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddChoreForm {
    pub name: String,
    /// Raw text as typed
    pub points: String,
    pub kind: ChoreType,
    pub assigned_user: Option<UserId>,
}

impl AddChoreForm {
    /// The assignee picker is only shown for weekly chores
    pub fn show_assign_user(&self) -> bool {
        self.kind == ChoreType::Weekly
    }

    /// Validate the draft into a request for chore `id`
    pub fn to_request(&self, id: ChoreId) -> Result<AddChoreRequest, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        let points = self
            .points
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidPoints(self.points.clone()))?;

        Ok(AddChoreRequest::new(id, name, points, self.kind).assigned_to(self.assigned_user))
    }
}

/// All client-side interaction state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub page: Page,
    pub modal: Modal,
    pub add_chore: AddChoreForm,
    pub prize_draft: String,
    /// Set by a failed call; replaces the whole view until a reload succeeds
    pub error: Option<String>,
    /// Local validation message for the add-chore form
    pub form_error: Option<String>,
    /// One-shot acknowledgment shown after a successful week reset
    pub acknowledgment: Option<String>,
}
