//! Command reducer
//!
//! Each user action is a [`Command`]. [`plan`] applies the local part of the
//! transition and returns the call to issue, if any. [`apply_success`] runs
//! the post-response part once the server has answered.

use crate::api::{
    ApiCall, DeleteChoreRequest, LogChoreRequest, ResetWeekRequest, UpdateWeeklyChoreRequest,
};
use crate::ids::{Clock, IdGenerator};
use crate::model::{BoardState, ChoreId, ChoreType, UserId};

use super::ui::{AddChoreForm, Modal, Page, UiState};

/// Shown after a successful week reset
pub const WEEK_RESET_ACK: &str = "New week started! Scores have been reset.";

/// A user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the full state (initial load or reload)
    Load,
    Navigate(Page),
    /// Quick-add button on a repeatable chore
    QuickAdd(ChoreId),
    /// Pick a user in the open picker
    SelectUser(UserId),
    CancelModal,
    /// Weekly checkbox changed; `completed` is the box's new checked state
    ToggleWeekly {
        chore_id: ChoreId,
        user_id: UserId,
        completed: bool,
    },
    SetChoreName(String),
    SetChorePoints(String),
    SetChoreType(ChoreType),
    SetAssignedUser(Option<UserId>),
    SubmitAddChore,
    DeleteChore(ChoreId),
    SetPrize(String),
    SubmitResetWeek,
}

/// Apply the local transition for `command` and return the call to make.
pub fn plan(
    ui: &mut UiState,
    state: Option<&BoardState>,
    command: Command,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
) -> Option<ApiCall> {
    match command {
        Command::Load => Some(ApiCall::FetchState),

        Command::Navigate(page) => {
            ui.page = page;
            None
        }

        Command::QuickAdd(chore_id) => {
            let chore = state?.chore(chore_id)?;
            if chore.kind != ChoreType::Repeatable {
                tracing::warn!(chore_id, "Quick-add ignored for weekly chore");
                return None;
            }
            ui.modal = Modal::SelectingUser { chore_id };
            None
        }

        Command::SelectUser(user_id) => match ui.modal {
            Modal::SelectingUser { chore_id } => Some(ApiCall::LogChore(LogChoreRequest {
                log_id: ids.next_id(),
                chore_id,
                user_id,
                timestamp: clock.now(),
            })),
            Modal::Idle => None,
        },

        Command::CancelModal => {
            ui.modal = Modal::Idle;
            None
        }

        Command::ToggleWeekly {
            chore_id,
            user_id,
            completed,
        } => Some(ApiCall::UpdateWeeklyChore(UpdateWeeklyChoreRequest {
            chore_id,
            user_id,
            completed,
            log_id: ids.next_id(),
            timestamp: clock.now(),
        })),

        Command::SetChoreName(name) => {
            ui.add_chore.name = name;
            None
        }

        Command::SetChorePoints(points) => {
            ui.add_chore.points = points;
            None
        }

        Command::SetChoreType(kind) => {
            ui.add_chore.kind = kind;
            None
        }

        Command::SetAssignedUser(user) => {
            ui.add_chore.assigned_user = user;
            None
        }

        Command::SubmitAddChore => match ui.add_chore.to_request(ids.next_id()) {
            Ok(request) => {
                ui.form_error = None;
                Some(ApiCall::AddChore(request))
            }
            Err(e) => {
                tracing::debug!(error = %e, "Add-chore form rejected");
                ui.form_error = Some(e.to_string());
                None
            }
        },

        Command::DeleteChore(chore_id) => {
            Some(ApiCall::DeleteChore(DeleteChoreRequest { chore_id }))
        }

        Command::SetPrize(prize) => {
            ui.prize_draft = prize;
            None
        }

        Command::SubmitResetWeek => Some(ApiCall::ResetWeek(ResetWeekRequest {
            prize: ui.prize_draft.clone(),
        })),
    }
}

/// Transition after the server accepted `call`
pub fn apply_success(ui: &mut UiState, call: &ApiCall) {
    match call {
        ApiCall::FetchState => ui.error = None,
        ApiCall::LogChore(_) => ui.modal = Modal::Idle,
        ApiCall::AddChore(_) => ui.add_chore = AddChoreForm::default(),
        ApiCall::ResetWeek(_) => {
            ui.prize_draft.clear();
            ui.page = Page::Home;
            ui.acknowledgment = Some(WEEK_RESET_ACK.to_string());
        }
        ApiCall::UpdateWeeklyChore(_) | ApiCall::DeleteChore(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{FixedClock, SequentialIds};
    use crate::model::{Chore, User};
    use chrono::{TimeZone, Utc};

    fn board() -> BoardState {
        let mut state = BoardState::default();
        state.users.push(User {
            id: 1,
            name: "Alice".to_string(),
        });
        state.master_chores.push(Chore {
            id: 10,
            name: "Dishes".to_string(),
            points: 5,
            kind: ChoreType::Repeatable,
        });
        state.master_chores.push(Chore {
            id: 20,
            name: "Trash".to_string(),
            points: 10,
            kind: ChoreType::Weekly,
        });
        state
    }

    fn run(ui: &mut UiState, state: &BoardState, command: Command) -> Option<ApiCall> {
        let ids = SequentialIds::starting_at(500);
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());
        plan(ui, Some(state), command, &ids, &clock)
    }

    #[test]
    fn test_quick_add_opens_picker() {
        let mut ui = UiState::default();
        assert!(run(&mut ui, &board(), Command::QuickAdd(10)).is_none());
        assert_eq!(ui.modal, Modal::SelectingUser { chore_id: 10 });
    }

    #[test]
    fn test_quick_add_ignores_weekly_and_unknown() {
        let mut ui = UiState::default();
        run(&mut ui, &board(), Command::QuickAdd(20));
        run(&mut ui, &board(), Command::QuickAdd(99));
        assert_eq!(ui.modal, Modal::Idle);
    }

    #[test]
    fn test_select_user_logs_pending_chore() {
        let mut ui = UiState {
            modal: Modal::SelectingUser { chore_id: 10 },
            ..Default::default()
        };
        let call = run(&mut ui, &board(), Command::SelectUser(1)).unwrap();
        match call {
            ApiCall::LogChore(req) => {
                assert_eq!(req.chore_id, 10);
                assert_eq!(req.user_id, 1);
                assert_eq!(req.log_id, 500);
            }
            other => panic!("unexpected call {:?}", other),
        }
        // Picker stays open until the server answers
        assert_eq!(ui.modal, Modal::SelectingUser { chore_id: 10 });
    }

    #[test]
    fn test_select_user_without_picker_is_noop() {
        let mut ui = UiState::default();
        assert!(run(&mut ui, &board(), Command::SelectUser(1)).is_none());
    }

    #[test]
    fn test_cancel_closes_picker_without_call() {
        let mut ui = UiState {
            modal: Modal::SelectingUser { chore_id: 10 },
            ..Default::default()
        };
        assert!(run(&mut ui, &board(), Command::CancelModal).is_none());
        assert_eq!(ui.modal, Modal::Idle);
    }

    #[test]
    fn test_navigation_is_local() {
        let mut ui = UiState::default();
        assert!(run(&mut ui, &board(), Command::Navigate(Page::Admin)).is_none());
        assert_eq!(ui.page, Page::Admin);
    }

    #[test]
    fn test_invalid_form_sets_error_without_call() {
        let mut ui = UiState::default();
        run(&mut ui, &board(), Command::SetChoreName("Sweep".to_string()));
        run(&mut ui, &board(), Command::SetChorePoints("lots".to_string()));
        assert!(run(&mut ui, &board(), Command::SubmitAddChore).is_none());
        assert!(ui.form_error.is_some());
        assert_eq!(ui.add_chore.name, "Sweep");
    }

    #[test]
    fn test_reset_success_goes_home() {
        let mut ui = UiState {
            page: Page::Admin,
            prize_draft: "Movie night".to_string(),
            ..Default::default()
        };
        let call = run(&mut ui, &board(), Command::SubmitResetWeek).unwrap();
        assert_eq!(
            call,
            ApiCall::ResetWeek(ResetWeekRequest {
                prize: "Movie night".to_string()
            })
        );

        apply_success(&mut ui, &call);
        assert_eq!(ui.page, Page::Home);
        assert!(ui.prize_draft.is_empty());
        assert_eq!(ui.acknowledgment.as_deref(), Some(WEEK_RESET_ACK));
    }
}
