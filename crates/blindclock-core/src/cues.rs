//! Audio cue sequencing.
//!
//! All cues are short fixed sequences of square-wave tones. Playback is
//! blocking: each `tone`/`rest` call returns only after its duration, so a
//! cue finishes before the polling loop runs again. The escalation fanfare
//! is the longest at roughly 3.8 seconds.

use crate::hal::AudioDevice;
use crate::session::CHIME_STAGE_CAP;

/// Ascending escalation scale, C7 through C8 in Hz.
pub const ESCALATION_SCALE: [u16; 13] = [
    2093, 2217, 2349, 2489, 2637, 2793, 2959, 3135, 3322, 3520, 3729, 3951, 4186,
];

/// Boundary cue pitch (G#6), deliberately below the scale.
pub const NOTE_BOUNDARY: u16 = 1661;
/// Downward adjustment pitch (F7).
pub const NOTE_DOWN: u16 = 2793;
/// Affirm/startup lead pitch (G7).
pub const NOTE_AFFIRM_LO: u16 = 3135;
/// Upward adjustment pitch (A7).
pub const NOTE_UP: u16 = 3520;
/// Affirm/startup closing pitch (C8).
pub const NOTE_AFFIRM_HI: u16 = 4186;

const FANFARE_TONE_MS: u32 = 500;
const FANFARE_REST_MS: u32 = 600;

/// Two-note rising chirp acknowledging a forward mode transition.
pub fn affirm<A: AudioDevice>(audio: &mut A) {
    audio.tone(NOTE_AFFIRM_LO, 150);
    audio.rest(150);
    audio.tone(NOTE_AFFIRM_HI, 150);
}

/// Longer two-note chirp played once at power-on.
pub fn startup<A: AudioDevice>(audio: &mut A) {
    audio.tone(NOTE_AFFIRM_LO, 200);
    audio.rest(150);
    audio.tone(NOTE_AFFIRM_HI, 200);
}

/// Low thunk played when the value editor clamps at a limit.
pub fn boundary<A: AudioDevice>(audio: &mut A) {
    audio.tone(NOTE_BOUNDARY, 400);
}

/// Feedback blip for an accepted adjustment; pitch encodes direction.
pub fn directional<A: AudioDevice>(audio: &mut A, delta: i32) {
    let freq = if delta > 0 { NOTE_UP } else { NOTE_DOWN };
    audio.tone(freq, 150);
}

/// Scale indices sounded by the fanfare for a given chime stage.
///
/// The stage is clamped into `[1, 10]` so the top index never leaves the
/// 13-entry table; the progression engine already maintains that cap.
pub fn escalation_indices(stage: u8) -> [usize; 4] {
    let base = stage.clamp(1, CHIME_STAGE_CAP) as usize - 1;
    [base, base + 1, base + 2, base + 3]
}

/// Four-tone ascending fanfare marking a blind escalation. The pitch range
/// climbs one scale step per round until the stage cap.
pub fn escalation<A: AudioDevice>(audio: &mut A, stage: u8) {
    let indices = escalation_indices(stage);
    for (i, &idx) in indices.iter().enumerate() {
        audio.tone(ESCALATION_SCALE[idx], FANFARE_TONE_MS);
        if i + 1 < indices.len() {
            audio.rest(FANFARE_REST_MS);
        }
    }
}
