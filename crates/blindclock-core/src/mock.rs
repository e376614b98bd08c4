//! Mock hardware for tests and headless simulation.
//!
//! Every mock records the calls it receives so tests can assert on exact
//! sequences (tone ordering matters: the fanfare must finish before the
//! countdown resets).

use std::cell::Cell;
use std::collections::HashMap;

use crate::hal::{AudioDevice, Clock, DisplayAdapter, PowerControl, RotaryInput, Widget};

/// Records widget text and visibility.
#[derive(Debug, Default)]
pub struct MockDisplay {
    pub texts: HashMap<Widget, String>,
    pub visible: HashMap<Widget, bool>,
    pub fills: Vec<u32>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, widget: Widget) -> Option<&str> {
        self.texts.get(&widget).map(String::as_str)
    }

    pub fn is_visible(&self, widget: Widget) -> bool {
        self.visible.get(&widget).copied().unwrap_or(false)
    }
}

impl DisplayAdapter for MockDisplay {
    fn set_text(&mut self, widget: Widget, text: &str) {
        self.texts.insert(widget, text.to_string());
    }

    fn set_visible(&mut self, widget: Widget, visible: bool) {
        self.visible.insert(widget, visible);
    }

    fn fill_screen(&mut self, rgb: u32) {
        self.fills.push(rgb);
    }
}

/// One recorded speaker operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioOp {
    Tone(u16, u32),
    Rest(u32),
    Volume(f32),
}

/// Records tones, rests and volume changes in call order.
#[derive(Debug, Default)]
pub struct MockAudio {
    pub ops: Vec<AudioOp>,
}

impl MockAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frequencies of all tones played, in order.
    pub fn tone_freqs(&self) -> Vec<u16> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                AudioOp::Tone(freq, _) => Some(*freq),
                _ => None,
            })
            .collect()
    }
}

impl AudioDevice for MockAudio {
    fn tone(&mut self, freq_hz: u16, duration_ms: u32) {
        self.ops.push(AudioOp::Tone(freq_hz, duration_ms));
    }

    fn rest(&mut self, duration_ms: u32) {
        self.ops.push(AudioOp::Rest(duration_ms));
    }

    fn set_volume(&mut self, fraction: f32) {
        self.ops.push(AudioOp::Volume(fraction));
    }
}

/// Buffers at most one delta and counts destructive reads, mirroring the
/// reset-on-read hardware counter.
#[derive(Debug, Default)]
pub struct MockRotary {
    pending: Option<i32>,
    pub take_calls: u32,
}

impl MockRotary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the encoder accumulating a turn.
    pub fn turn(&mut self, delta: i32) {
        self.pending = Some(delta);
    }
}

impl RotaryInput for MockRotary {
    fn has_pending_delta(&self) -> bool {
        self.pending.is_some()
    }

    fn take_delta(&mut self) -> i32 {
        self.take_calls += 1;
        // Reads after the first yield zero, like the real driver.
        self.pending.take().unwrap_or(0)
    }
}

/// Hand-advanced monotonic clock.
#[derive(Debug, Default)]
pub struct ManualClock {
    ms: Cell<u64>,
}

impl ManualClock {
    pub fn new(ms: u64) -> Self {
        Self { ms: Cell::new(ms) }
    }

    pub fn advance(&self, ms: u64) {
        self.ms.set(self.ms.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        self.ms.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.ms.get()
    }
}

/// Records hold-line writes and shutdown-watch arms.
#[derive(Debug, Default)]
pub struct MockPower {
    pub line_writes: Vec<bool>,
    pub watch_armed: u32,
}

impl MockPower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_is_held(&self) -> bool {
        self.line_writes.last().copied().unwrap_or(false)
    }
}

impl PowerControl for MockPower {
    fn hold_line(&mut self, active: bool) {
        self.line_writes.push(active);
    }

    fn arm_shutdown_watch(&mut self) {
        self.watch_armed += 1;
    }
}
