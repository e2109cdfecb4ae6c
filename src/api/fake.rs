//! In-memory gateway for tests
//!
//! Applies calls the way the Choreboard server does and records every call
//! it receives. Can be told to fail the next calls.

use async_trait::async_trait;
use std::sync::Mutex;

use super::client::ChoreApi;
use super::dto::ApiCall;
use super::error::{GatewayError, GatewayResult};
use crate::model::{AssignedChore, BoardState, Chore, CompletionEntry};

#[derive(Default)]
struct Inner {
    state: BoardState,
    calls: Vec<ApiCall>,
    failures_pending: usize,
}

pub struct FakeGateway {
    inner: Mutex<Inner>,
}

impl FakeGateway {
    pub fn new(state: BoardState) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state,
                ..Default::default()
            }),
        }
    }

    /// Make the next `n` calls fail with a status error
    pub fn fail_next(&self, n: usize) {
        self.inner.lock().unwrap().failures_pending = n;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn last_call(&self) -> Option<ApiCall> {
        self.inner.lock().unwrap().calls.last().cloned()
    }

    pub fn server_state(&self) -> BoardState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Change the server's state behind the client's back
    pub fn set_server_state(&self, state: BoardState) {
        self.inner.lock().unwrap().state = state;
    }
}

#[async_trait]
impl ChoreApi for FakeGateway {
    async fn send(&self, call: &ApiCall) -> GatewayResult<BoardState> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call.clone());

        if inner.failures_pending > 0 {
            inner.failures_pending -= 1;
            return Err(GatewayError::Status {
                path: call.path().to_string(),
                status: 503,
                body: "unavailable".to_string(),
            });
        }

        apply(&mut inner.state, call);
        Ok(inner.state.clone())
    }
}

fn apply(state: &mut BoardState, call: &ApiCall) {
    let week = &mut state.current_week;
    match call {
        ApiCall::FetchState => {}
        ApiCall::LogChore(req) => week.completed_log.push(CompletionEntry {
            log_id: Some(req.log_id),
            chore_id: req.chore_id,
            user_id: req.user_id,
            timestamp: Some(req.timestamp),
        }),
        ApiCall::UpdateWeeklyChore(req) => {
            if let Some(assigned) = week
                .assigned_chores
                .iter_mut()
                .find(|a| a.chore_id == req.chore_id && a.user_id == Some(req.user_id))
            {
                assigned.completed = req.completed;
            }
            let matches =
                |e: &CompletionEntry| e.chore_id == req.chore_id && e.user_id == req.user_id;
            if req.completed {
                if !week.completed_log.iter().any(matches) {
                    week.completed_log.push(CompletionEntry {
                        log_id: Some(req.log_id),
                        chore_id: req.chore_id,
                        user_id: req.user_id,
                        timestamp: Some(req.timestamp),
                    });
                }
            } else {
                week.completed_log.retain(|e| !matches(e));
            }
        }
        ApiCall::AddChore(req) => {
            state.master_chores.push(Chore {
                id: req.id,
                name: req.name.clone(),
                points: i64::from(req.points),
                kind: req.kind,
            });
            if let Some(user_id) = req.assigned_user_id {
                week.assigned_chores.push(AssignedChore {
                    chore_id: req.id,
                    user_id,
                    completed: false,
                });
            }
        }
        ApiCall::DeleteChore(req) => {
            state.master_chores.retain(|c| c.id != req.chore_id);
            week.assigned_chores.retain(|a| a.chore_id != req.chore_id);
            week.completed_log.retain(|e| e.chore_id != req.chore_id);
        }
        ApiCall::ResetWeek(req) => {
            week.prize = req.prize.clone();
            week.completed_log.clear();
            for assigned in &mut week.assigned_chores {
                assigned.completed = false;
            }
        }
    }
}
