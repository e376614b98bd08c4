//! Bounded rotary value editor.
//!
//! Both setup prompts adjust a number in fixed steps between a floor and a
//! ceiling. Spinning one step past a limit snaps to the limit instead of
//! ignoring the turn, so the display never looks unresponsive; the snap is
//! signalled with the boundary tone instead of the directional blip.

use serde::{Deserialize, Serialize};

/// Step size and range for one editable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorParams {
    pub step: u32,
    pub min: u32,
    pub max: u32,
}

/// Small blind prompt: 25-chip steps from 25 to 200.
pub const SMALL_BLIND_EDITOR: EditorParams = EditorParams {
    step: 25,
    min: 25,
    max: 200,
};

/// Round interval prompt: 5-minute steps from 5 to 45.
pub const INTERVAL_EDITOR: EditorParams = EditorParams {
    step: 5,
    min: 5,
    max: 45,
};

/// Which limit an adjustment ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limit {
    Floor,
    Ceiling,
}

/// Outcome of applying one rotary delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub value: u32,
    /// Set when the result was clamped; selects the boundary tone.
    pub clamped: Option<Limit>,
}

impl EditorParams {
    /// Apply a signed encoder delta to `current`.
    ///
    /// Values past either limit clamp to the limit. An encoder delta is
    /// almost always ±1, for which this is exactly the one-step-over snap;
    /// larger deltas from a fast spin clamp the same way rather than
    /// landing out of range.
    pub fn apply(&self, current: u32, delta: i32) -> Adjustment {
        let next = current as i64 + self.step as i64 * delta as i64;
        if next > self.max as i64 {
            Adjustment {
                value: self.max,
                clamped: Some(Limit::Ceiling),
            }
        } else if next < self.min as i64 {
            Adjustment {
                value: self.min,
                clamped: Some(Limit::Floor),
            }
        } else {
            Adjustment {
                value: next as u32,
                clamped: None,
            }
        }
    }
}
