//! Hardware abstraction traits.
//!
//! The controller never talks to peripherals directly; everything it needs
//! from the device is expressed here. Real implementations live with the
//! host (the CLI ships terminal-backed ones), mocks live in [`crate::mock`].

use serde::{Deserialize, Serialize};

/// The fixed set of widgets on the device face.
///
/// The display owns layout; the controller only addresses widgets by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    /// Splash logo shown while idle at power-on.
    Logo,
    /// Prompt line ("Starting small blinds", "Mins between rounds", "Round N").
    PageTitle,
    /// Large numeric readout used by the setup prompts.
    BigNumber,
    /// "Push" button prompt background and label.
    PushPrompt,
    /// Arrow pointing at the physical button.
    DownArrow,
    /// Current small blind value during a round.
    SmallBlind,
    /// Current big blind value during a round.
    BigBlind,
    /// Caption next to the small blind value.
    SmallBlindCaption,
    /// Caption next to the big blind value.
    BigBlindCaption,
    /// Minutes remaining in the round.
    MinutesRemaining,
    /// Seconds remaining in the round.
    SecondsRemaining,
    /// Caption under the minutes readout.
    MinutesCaption,
    /// Caption under the seconds readout.
    SecondsCaption,
}

/// Display output. Calls are idempotent and never fail; a host whose
/// display is gone is expected to abort the whole process.
pub trait DisplayAdapter {
    fn set_text(&mut self, widget: Widget, text: &str);
    fn set_visible(&mut self, widget: Widget, visible: bool);
    /// Clear the whole screen to an RGB color (0xRRGGBB).
    fn fill_screen(&mut self, rgb: u32);
}

/// Speaker output. `tone` and `rest` block the caller for the full
/// duration; the cue sequencer relies on that to order multi-note cues.
pub trait AudioDevice {
    fn tone(&mut self, freq_hz: u16, duration_ms: u32);
    /// Blocking silence between notes.
    fn rest(&mut self, duration_ms: u32);
    /// Volume as a fraction in 0.0..=1.0. Called once at power-on.
    fn set_volume(&mut self, fraction: f32);
}

/// Rotary encoder input.
///
/// The driver buffers at most one unconsumed delta and resets its counter
/// on read, so `take_delta` has exactly-once semantics: call it a single
/// time per pending event and cache the value. A second call in the same
/// tick silently yields zero.
pub trait RotaryInput {
    fn has_pending_delta(&self) -> bool;
    /// Destructive single read of the accumulated delta.
    fn take_delta(&mut self) -> i32;
}

/// Monotonic clock with millisecond resolution.
pub trait Clock {
    fn now_ms(&self) -> u64;

    /// Milliseconds from `earlier` to `now`, saturating at zero.
    fn diff_ms(&self, now: u64, earlier: u64) -> u64 {
        now.saturating_sub(earlier)
    }
}

/// Power-hold control. The device stays on while the hold line is active;
/// releasing it hands control to the hardware shutdown circuit.
pub trait PowerControl {
    fn hold_line(&mut self, active: bool);
    /// Re-arm the shutdown button watch after the line is released.
    fn arm_shutdown_watch(&mut self);
}

/// `Clock` backed by [`std::time::Instant`], anchored at construction.
pub struct SystemClock {
    origin: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn diff_ms_saturates() {
        let clock = SystemClock::new();
        assert_eq!(clock.diff_ms(5, 10), 0);
        assert_eq!(clock.diff_ms(1500, 400), 1100);
    }
}
