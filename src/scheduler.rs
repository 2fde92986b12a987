//! One-shot deadlines polled from the frame loop.
//!
//! Nothing here runs on its own: the owner calls `poll` every frame with the
//! current time. Dropping a `Scheduled` drops its payload, so a task can never
//! fire into a view that has already been torn down.

use chrono::{DateTime, Duration, Local};

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

#[derive(Debug, Clone)]
pub struct Scheduled<T> {
    due: DateTime<Local>,
    payload: Option<T>,
}

impl<T> Scheduled<T> {
    /// Delays longer than a year are shortened to one.
    pub fn after(now: DateTime<Local>, delay: Duration, payload: T) -> Self {
        let delay = delay.min(Duration::days(365));
        Scheduled {
            due: now.checked_add_signed(delay).unwrap_or(now),
            payload: Some(payload),
        }
    }

    pub fn due(&self) -> DateTime<Local> {
        self.due
    }

    pub fn is_pending(&self) -> bool {
        self.payload.is_some()
    }

    /// Hands out the payload once the deadline has passed. Later calls return `None`.
    pub fn poll(&mut self, now: DateTime<Local>) -> Option<T> {
        if now >= self.due {
            self.payload.take()
        } else {
            None
        }
    }

    /// Time left before the task fires. Zero once it is due, fired or cancelled.
    pub fn remaining(&self, now: DateTime<Local>) -> Duration {
        if self.is_pending() {
            (self.due - now).max(Duration::zero())
        } else {
            Duration::zero()
        }
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.payload.take()
    }
}

/// Earliest of several optional deadlines, used to schedule the next repaint.
pub fn earliest(deadlines: impl IntoIterator<Item = Option<DateTime<Local>>>) -> Option<DateTime<Local>> {
    deadlines.into_iter().flatten().min()
}
