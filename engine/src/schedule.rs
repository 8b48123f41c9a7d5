//! Cancelable scheduled tasks for the cooperative frame clock.

use std::time::Duration;

/// A single pending callback, expressed as the time left until it fires.
///
/// At most one firing is ever pending: [`schedule`](Self::schedule) replaces any
/// earlier deadline instead of queueing a second one. The owner advances the
/// clock with [`elapse`](Self::elapse) and consumes the firing with
/// [`take_due`](Self::take_due).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduledTask {
    remaining: Option<Duration>,
}

impl ScheduledTask {
    #[must_use]
    pub const fn idle() -> Self {
        Self { remaining: None }
    }

    /// Arm the task to fire after `after`, superseding a pending deadline.
    pub fn schedule(&mut self, after: Duration) {
        self.remaining = Some(after);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time left before the pending firing, if any.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    pub fn elapse(&mut self, delta: Duration) {
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_sub(delta);
        }
    }

    /// Returns `true` exactly once per firing and leaves the task idle.
    pub fn take_due(&mut self) -> bool {
        if self.remaining == Some(Duration::ZERO) {
            self.remaining = None;
            true
        } else {
            false
        }
    }
}

/// Soonest pending deadline among `tasks`.
pub(crate) fn next_deadline(tasks: &[&ScheduledTask]) -> Option<Duration> {
    tasks.iter().filter_map(|task| task.remaining()).min()
}
