//! Identifier and time sources
//!
//! Chore and log ids are generated on the client. They are drawn at random
//! and kept below 2^53 so that browser clients sharing the same server can
//! still represent them exactly as JSON numbers.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

/// Largest id that survives a round trip through a JavaScript number
pub const MAX_SAFE_ID: u64 = (1 << 53) - 1;

/// Produces ids for new chores and log entries
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> u64;
}

/// Random ids from UUID v4 entropy
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> u64 {
        let bits = uuid::Uuid::new_v4().as_u128() as u64;
        (bits & MAX_SAFE_ID).max(1)
    }
}

/// Counting ids, handy for reproducible runs
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Source of completion timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
