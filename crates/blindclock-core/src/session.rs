//! Session state and operating modes.
//!
//! One `SessionState` exists per power cycle. It is owned exclusively by
//! the [`crate::Controller`] and mutated only by the mode transition
//! handlers and the round progression engine; nothing survives power-off.

use serde::{Deserialize, Serialize};

/// Hard ceiling on the small blind. Doubling clamps here instead of
/// overflowing the four-digit display.
pub const SMALL_BLIND_CAP: u32 = 9999;

/// Ceiling on the chime stage. The escalation fanfare indexes the scale at
/// `stage - 1 ..= stage + 2`, so 10 keeps the top index inside a 13-note
/// table while the round counter keeps climbing.
pub const CHIME_STAGE_CAP: u8 = 10;

/// The four operating modes of the appliance. Exactly one is active and
/// only confirm-button transitions change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Power-on splash. Initial mode.
    Setup,
    /// Editing the starting small blind with the rotary encoder.
    EditSmallBlind,
    /// Editing the minutes-per-round interval.
    EditInterval,
    /// Unattended countdown; terminal for mode changes.
    RoundTimer,
}

/// Result of one round advancement, for rendering and the session log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundAdvance {
    pub round: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub chime_stage: u8,
}

/// All mutable state of a single game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Current small blind. The big blind is always twice this.
    pub small_blind: u32,
    /// Minutes of play per round.
    pub interval_minutes: u32,
    /// Round counter, unbounded.
    pub current_round: u32,
    /// Capped index selecting the escalation fanfare pitch range.
    pub chime_stage: u8,
    /// Countdown within the active round.
    pub seconds_remaining: u32,
    /// Monotonic timestamp of the last whole-second tick.
    pub last_tick_ms: u64,
}

impl SessionState {
    pub fn new(small_blind: u32, interval_minutes: u32) -> Self {
        Self {
            small_blind,
            interval_minutes,
            current_round: 0,
            chime_stage: 0,
            seconds_remaining: 0,
            last_tick_ms: 0,
        }
    }

    pub fn big_blind(&self) -> u32 {
        self.small_blind * 2
    }

    /// Arm the countdown for round one. Called on entry to the round timer.
    pub fn begin_first_round(&mut self, now_ms: u64) {
        self.seconds_remaining = self.interval_minutes * 60;
        self.current_round = 1;
        self.chime_stage = 1;
        self.last_tick_ms = now_ms;
    }

    /// Subtract up to `secs` from the countdown, flooring at zero.
    pub fn decrement_seconds(&mut self, secs: u32) -> u32 {
        self.seconds_remaining = self.seconds_remaining.saturating_sub(secs);
        self.seconds_remaining
    }

    /// Cross a round boundary: bump the round, escalate the chime stage
    /// (capped), double the small blind (capped).
    ///
    /// Does not reset the countdown; the caller finishes the escalation
    /// cues first and then calls [`Self::reset_countdown`].
    pub fn advance_round(&mut self) -> RoundAdvance {
        self.current_round += 1;
        self.chime_stage = (self.chime_stage + 1).min(CHIME_STAGE_CAP);
        self.small_blind = (self.small_blind * 2).min(SMALL_BLIND_CAP);
        RoundAdvance {
            round: self.current_round,
            small_blind: self.small_blind,
            big_blind: self.big_blind(),
            chime_stage: self.chime_stage,
        }
    }

    /// Refill the countdown for the next round.
    pub fn reset_countdown(&mut self) {
        self.seconds_remaining = self.interval_minutes * 60;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_blind_is_twice_small() {
        let state = SessionState::new(25, 10);
        assert_eq!(state.big_blind(), 50);
    }

    #[test]
    fn begin_first_round_arms_countdown() {
        let mut state = SessionState::new(50, 10);
        state.begin_first_round(1234);
        assert_eq!(state.seconds_remaining, 600);
        assert_eq!(state.current_round, 1);
        assert_eq!(state.chime_stage, 1);
        assert_eq!(state.last_tick_ms, 1234);
    }

    #[test]
    fn advance_doubles_small_blind() {
        let mut state = SessionState::new(25, 10);
        state.begin_first_round(0);
        let adv = state.advance_round();
        assert_eq!(adv.round, 2);
        assert_eq!(adv.small_blind, 50);
        assert_eq!(adv.big_blind, 100);
    }

    #[test]
    fn small_blind_caps_at_9999() {
        let mut state = SessionState::new(5000, 10);
        state.begin_first_round(0);
        let adv = state.advance_round();
        assert_eq!(adv.small_blind, 9999);
        // Stays pinned on further advancements.
        let adv = state.advance_round();
        assert_eq!(adv.small_blind, 9999);
    }

    #[test]
    fn chime_stage_caps_at_10() {
        let mut state = SessionState::new(25, 10);
        state.begin_first_round(0);
        for _ in 0..15 {
            state.advance_round();
        }
        assert_eq!(state.chime_stage, 10);
        assert_eq!(state.current_round, 16);
    }

    #[test]
    fn decrement_floors_at_zero() {
        let mut state = SessionState::new(25, 10);
        state.seconds_remaining = 3;
        assert_eq!(state.decrement_seconds(5), 0);
    }
}
