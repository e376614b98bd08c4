//! Round progression timing.
//!
//! The countdown is a wall-clock state machine: no internal thread, the
//! caller polls and the engine decides how many whole seconds are due
//! since the last tick.

use serde::{Deserialize, Serialize};

use crate::hal::Clock;
use crate::session::SessionState;

/// How the countdown treats polling gaps longer than one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickPolicy {
    /// `false`: subtract exactly one second per poll with >= 1000 ms
    /// elapsed, absorbing any excess (the timer drifts late while audio
    /// blocks the loop). `true`: subtract every whole second the gap
    /// covers, keeping the sub-second remainder.
    pub catch_up: bool,
}

impl Default for TickPolicy {
    fn default() -> Self {
        Self { catch_up: false }
    }
}

/// Whole seconds owed by the current poll, plus the new tick anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueTicks {
    pub seconds: u32,
    pub last_tick_ms: u64,
}

/// Drives the countdown within the active round.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundEngine {
    pub policy: TickPolicy,
}

impl RoundEngine {
    pub fn new(policy: TickPolicy) -> Self {
        Self { policy }
    }

    /// Check whether at least one whole second has elapsed since the last
    /// tick. Returns `None` when the countdown is not yet due.
    pub fn due<C: Clock>(&self, clock: &C, state: &SessionState) -> Option<DueTicks> {
        let now = clock.now_ms();
        let elapsed = clock.diff_ms(now, state.last_tick_ms);
        if elapsed < 1000 {
            return None;
        }
        if self.policy.catch_up {
            let seconds = (elapsed / 1000) as u32;
            Some(DueTicks {
                seconds,
                last_tick_ms: state.last_tick_ms + u64::from(seconds) * 1000,
            })
        } else {
            Some(DueTicks {
                seconds: 1,
                last_tick_ms: now,
            })
        }
    }
}
