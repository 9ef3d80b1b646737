//! Cancellable per-level countdown.

/// What one tick did to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// No countdown running (untimed level, paused, or cancelled)
    Idle,
    Running { remaining: u32 },
    /// Reached zero on this tick; the timer disarms itself
    Expired,
}

/// Countdown owned by the session. Every exit path from play cancels it, so a
/// stray tick can never reach a finished level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownTimer {
    remaining: Option<u32>,
    paused: bool,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting down from `seconds`; `None` leaves the timer idle.
    pub fn arm(&mut self, seconds: Option<u32>) {
        self.remaining = seconds;
        self.paused = false;
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    pub fn tick(&mut self) -> TimerTick {
        if self.paused {
            return TimerTick::Idle;
        }
        match self.remaining {
            None => TimerTick::Idle,
            Some(left) if left <= 1 => {
                self.remaining = None;
                TimerTick::Expired
            }
            Some(left) => {
                self.remaining = Some(left - 1);
                TimerTick::Running {
                    remaining: left - 1,
                }
            }
        }
    }
}
