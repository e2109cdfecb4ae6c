//! Board Renderer
//!
//! [`render`] derives the whole view tree from the board state and the
//! interaction state. It is total: every call rebuilds every page, and the
//! active page is just a flag. The tree is toolkit independent; [`text`]
//! prints it for terminals and `serde` gives a JSON form.

mod text;

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::controller::{Modal, Page, UiState};
use crate::model::{
    history, leader, totals, BoardState, ChoreId, ChoreType, HistoryEntry, UserId, UserScore,
};

/// What the client shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// Replaces all normal content after a failed call
    Error { message: String },
    /// Nothing has been loaded yet
    Loading,
    Board(BoardView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub active_page: Page,
    pub nav: Vec<NavItem>,
    pub home: HomeView,
    pub scoreboard: ScoreboardView,
    pub admin: AdminView,
    pub modal: Option<ModalView>,
    pub acknowledgment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub score_cards: Vec<UserScore>,
    pub quick_add: Vec<QuickAddButton>,
    pub checklists: Vec<Checklist>,
}

/// Quick-add button for a repeatable chore
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickAddButton {
    pub chore_id: ChoreId,
    pub name: String,
    pub points: i64,
}

/// A user's weekly chores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checklist {
    pub user_id: UserId,
    pub user_name: String,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistItem {
    pub chore_id: ChoreId,
    pub name: String,
    pub points: i64,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreboardView {
    pub prize: String,
    pub leader: Option<UserScore>,
    pub histories: Vec<UserHistory>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserHistory {
    pub user_id: UserId,
    pub user_name: String,
    pub entries: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminView {
    pub chores: Vec<AdminChoreRow>,
    pub add_form: AddChoreFormView,
    pub prize_draft: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminChoreRow {
    pub chore_id: ChoreId,
    pub name: String,
    pub points: i64,
    pub kind: ChoreType,
    /// Assignee names for weekly chores
    pub assigned_to: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddChoreFormView {
    pub name: String,
    pub points: String,
    pub kind: ChoreType,
    pub show_assign_user: bool,
    pub assigned_user: Option<UserId>,
    pub user_options: Vec<UserOption>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserOption {
    pub user_id: UserId,
    pub name: String,
}

/// The user picker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalView {
    pub chore_id: ChoreId,
    pub chore_name: String,
    pub options: Vec<UserOption>,
}

/// Build the screen for the given state
pub fn render(state: Option<&BoardState>, ui: &UiState) -> Screen {
    if let Some(message) = &ui.error {
        return Screen::Error {
            message: message.clone(),
        };
    }
    match state {
        None => Screen::Loading,
        Some(state) => Screen::Board(render_board(state, ui)),
    }
}

fn render_board(state: &BoardState, ui: &UiState) -> BoardView {
    BoardView {
        active_page: ui.page,
        nav: Page::ALL
            .iter()
            .map(|page| NavItem {
                page: *page,
                label: page.label(),
                active: *page == ui.page,
            })
            .collect(),
        home: render_home(state),
        scoreboard: render_scoreboard(state),
        admin: render_admin(state, ui),
        modal: render_modal(state, ui.modal),
        acknowledgment: ui.acknowledgment.clone(),
    }
}

fn render_home(state: &BoardState) -> HomeView {
    let quick_add = state
        .chores_of_type(ChoreType::Repeatable)
        .map(|c| QuickAddButton {
            chore_id: c.id,
            name: c.name.clone(),
            points: c.points,
        })
        .collect();

    let checklists = state
        .users
        .iter()
        .map(|user| Checklist {
            user_id: user.id,
            user_name: user.name.clone(),
            items: state
                .assignments_for(user.id)
                .filter_map(|a| {
                    let chore = state.chore(a.chore_id)?;
                    Some(ChecklistItem {
                        chore_id: chore.id,
                        name: chore.name.clone(),
                        points: chore.points,
                        completed: a.completed,
                    })
                })
                .collect(),
        })
        .collect();

    HomeView {
        score_cards: totals(state),
        quick_add,
        checklists,
    }
}

fn render_scoreboard(state: &BoardState) -> ScoreboardView {
    ScoreboardView {
        prize: state.current_week.prize.clone(),
        leader: leader(state),
        histories: state
            .users
            .iter()
            .map(|user| UserHistory {
                user_id: user.id,
                user_name: user.name.clone(),
                entries: history(state, user.id),
            })
            .collect(),
    }
}

fn render_admin(state: &BoardState, ui: &UiState) -> AdminView {
    let chores = state
        .master_chores
        .iter()
        .map(|chore| AdminChoreRow {
            chore_id: chore.id,
            name: chore.name.clone(),
            points: chore.points,
            kind: chore.kind,
            assigned_to: state
                .current_week
                .assigned_chores
                .iter()
                .filter(|a| a.chore_id == chore.id)
                .map(|a| {
                    a.user_id
                        .and_then(|id| state.user(id))
                        .map(|u| u.name.clone())
                        .unwrap_or_else(|| "(unassigned)".to_string())
                })
                .collect(),
        })
        .collect();

    let form = &ui.add_chore;
    AdminView {
        chores,
        add_form: AddChoreFormView {
            name: form.name.clone(),
            points: form.points.clone(),
            kind: form.kind,
            show_assign_user: form.show_assign_user(),
            assigned_user: form.assigned_user,
            user_options: user_options(state),
            error: ui.form_error.clone(),
        },
        prize_draft: ui.prize_draft.clone(),
    }
}

fn render_modal(state: &BoardState, modal: Modal) -> Option<ModalView> {
    match modal {
        Modal::Idle => None,
        Modal::SelectingUser { chore_id } => Some(ModalView {
            chore_id,
            chore_name: state
                .chore(chore_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| crate::model::score::DELETED_CHORE_NAME.to_string()),
            options: user_options(state),
        }),
    }
}

fn user_options(state: &BoardState) -> Vec<UserOption> {
    state
        .users
        .iter()
        .map(|u| UserOption {
            user_id: u.id,
            name: u.name.clone(),
        })
        .collect()
}

/// Short local time for history entries
fn format_timestamp(ts: &Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.with_timezone(&Local).format("%a %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
