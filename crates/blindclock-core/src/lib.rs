//! # Blindclock Core Library
//!
//! Core logic for a single-device poker blind timer: the operator answers
//! two prompts (starting small blind, minutes per round) and the device
//! then runs an unattended countdown that doubles the blinds each round
//! with audible cues.
//!
//! ## Architecture
//!
//! - **Controller**: screen state machine; owns the session and mediates
//!   every mode transition from a single confirm button
//! - **Editor**: bounded rotary value adjustment with limit snapping
//! - **Round engine**: wall-clock countdown; the host polls, no threads
//! - **Cues**: fixed blocking tone sequences, including the escalating
//!   four-note round fanfare
//!
//! Peripherals (display, speaker, rotary encoder, clock, power hold) sit
//! behind the traits in [`hal`]; the crate never touches hardware.

pub mod config;
pub mod controller;
pub mod cues;
pub mod editor;
pub mod engine;
pub mod error;
pub mod events;
pub mod hal;
pub mod log;
pub mod schedule;
pub mod session;

#[cfg(any(test, feature = "testing-support"))]
pub mod mock;

pub use config::Config;
pub use controller::Controller;
pub use editor::{Adjustment, EditorParams, Limit, INTERVAL_EDITOR, SMALL_BLIND_EDITOR};
pub use engine::{RoundEngine, TickPolicy};
pub use error::{ConfigError, CoreError};
pub use events::{Event, Setting};
pub use hal::{AudioDevice, Clock, DisplayAdapter, PowerControl, RotaryInput, SystemClock, Widget};
pub use log::SessionLog;
pub use schedule::{preview, BlindLevel};
pub use session::{Mode, RoundAdvance, SessionState, CHIME_STAGE_CAP, SMALL_BLIND_CAP};
