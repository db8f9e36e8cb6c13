//! Transient copy indicator
//!
//! The indicator holds at most one revert deadline. Arming it again replaces
//! the pending deadline, so an older copy can never reset the state of a
//! newer one. Dropping the indicator drops its deadline with it.
//!
//! A copy handed to the terminal (OSC 52) cannot be confirmed, so it gets
//! its own `Sent` state and label instead of claiming "Copied".

use std::time::{Duration, Instant};

/// Default time the indicator stays up after a copy
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copied { until: Instant },
    Sent { until: Instant },
    Failed { until: Instant },
}

#[derive(Debug, Clone)]
pub struct CopyFeedback {
    state: CopyState,
    duration: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK_DURATION)
    }
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: CopyState::Idle,
            duration,
        }
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The copy flag: true while a successful copy is being acknowledged
    ///
    /// Covers unconfirmed terminal delivery too; use [`Self::is_confirmed`]
    /// to tell the two apart.
    pub fn is_copied(&self) -> bool {
        matches!(self.state, CopyState::Copied { .. } | CopyState::Sent { .. })
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.state, CopyState::Copied { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, CopyState::Failed { .. })
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.state = CopyState::Copied {
            until: now + self.duration,
        };
    }

    pub fn mark_sent(&mut self, now: Instant) {
        self.state = CopyState::Sent {
            until: now + self.duration,
        };
    }

    pub fn mark_failed(&mut self, now: Instant) {
        self.state = CopyState::Failed {
            until: now + self.duration,
        };
    }

    /// Revert to idle once the deadline has passed
    ///
    /// Returns true when this call performed the revert.
    pub fn tick(&mut self, now: Instant) -> bool {
        let until = match self.state {
            CopyState::Idle => return false,
            CopyState::Copied { until }
            | CopyState::Sent { until }
            | CopyState::Failed { until } => until,
        };
        if now >= until {
            self.state = CopyState::Idle;
            true
        } else {
            false
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            CopyState::Idle => "Copy Code",
            CopyState::Copied { .. } => "Copied",
            CopyState::Sent { .. } => "Sent to terminal",
            CopyState::Failed { .. } => "Copy Failed",
        }
    }
}
