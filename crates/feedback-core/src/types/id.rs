//! Time-based feedback record identifiers.
//!
//! An id is the decimal count of milliseconds since the Unix epoch at which
//! the record was created, stored as a string. [`IdGenerator`] bumps the
//! value when two records land in the same millisecond, so ids handed out by
//! one generator are unique and strictly increasing.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a feedback record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(String);

impl FeedbackId {
    /// Wrap an existing identifier string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the millisecond timestamp encoded in the id, if it has one.
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands out time-based ids that never repeat within one process.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// Create a generator with no ids issued yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the id for a record created at `now`.
    pub fn next_id(&self, now: DateTime<Utc>) -> FeedbackId {
        let candidate = now.timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = candidate.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return FeedbackId(next.to_string()),
                Err(current) => last = current,
            }
        }
    }
}
