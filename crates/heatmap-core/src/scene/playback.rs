use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Whether hourly playback is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
}

/// What playback does after showing the last hour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackEnd {
    /// Stop on the last hour.
    #[default]
    Stop,
    /// Wrap around to hour 0 and keep playing.
    Loop,
}

impl std::fmt::Display for PlaybackEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stop => write!(f, "Stop"),
            Self::Loop => write!(f, "Loop"),
        }
    }
}

/// Fixed-rate tick source polled from the event loop.
///
/// The driver never calls back on its own: the owner polls it with the
/// current time, so once [`cancel`](Self::cancel) returns no tick can be
/// delivered until the next [`start`](Self::start).
#[derive(Clone, Debug)]
pub struct PlaybackDriver {
    interval: Duration,
    next_tick: Option<Instant>,
}

impl PlaybackDriver {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm the driver. The first tick is due one interval after `now`.
    /// Restarts the schedule if already active.
    pub fn start(&mut self, now: Instant) {
        self.next_tick = Some(now + self.interval);
    }

    /// Disarm the driver. Safe to call when not started.
    pub fn cancel(&mut self) {
        self.next_tick = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn state(&self) -> PlaybackState {
        if self.is_active() {
            PlaybackState::Playing
        } else {
            PlaybackState::Idle
        }
    }

    /// When the next tick is due, if active.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Consume the pending tick if it is due at `now`.
    ///
    /// At most one tick is delivered per call. Deadlines advance by whole
    /// intervals; if the loop fell more than an interval behind, the schedule
    /// restarts from `now` instead of bursting.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_tick else {
            return false;
        };
        if now < deadline {
            return false;
        }
        let mut next = deadline + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_tick = Some(next);
        true
    }
}
