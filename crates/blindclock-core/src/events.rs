use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::editor::Limit;
use crate::session::Mode;

/// Which editable setting an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    SmallBlind,
    IntervalMinutes,
}

/// Every externally observable change produces an Event. The session log
/// collects them; the CLI prints them as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    PoweredOn {
        at: DateTime<Utc>,
    },
    ModeEntered {
        mode: Mode,
        at: DateTime<Utc>,
    },
    ValueAdjusted {
        setting: Setting,
        value: u32,
        at: DateTime<Utc>,
    },
    /// An adjustment ran into a limit and snapped to it.
    ValueClamped {
        setting: Setting,
        value: u32,
        limit: Limit,
        at: DateTime<Utc>,
    },
    RoundAdvanced {
        round: u32,
        small_blind: u32,
        big_blind: u32,
        chime_stage: u8,
        at: DateTime<Utc>,
    },
    /// The confirm button was pressed during a round: the power-hold line
    /// was released and the shutdown watch re-armed.
    ShutdownRequested {
        at: DateTime<Utc>,
    },
}
