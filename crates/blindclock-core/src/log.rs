//! In-memory session log.
//!
//! Append-only record of everything that happened this power cycle. Not
//! persisted anywhere; the device forgets on power-off, and the simulator
//! dumps it as JSON instead.

use crate::events::Event;

#[derive(Debug, Default, Clone)]
pub struct SessionLog {
    entries: Vec<Event>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.entries.push(event);
    }

    pub fn entries(&self) -> &[Event] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Round advancements recorded so far.
    pub fn rounds_advanced(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Event::RoundAdvanced { .. }))
            .count()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn counts_round_advancements() {
        let mut log = SessionLog::new();
        log.push(Event::PoweredOn { at: Utc::now() });
        log.push(Event::RoundAdvanced {
            round: 2,
            small_blind: 50,
            big_blind: 100,
            chime_stage: 2,
            at: Utc::now(),
        });
        assert_eq!(log.len(), 2);
        assert_eq!(log.rounds_advanced(), 1);
    }

    #[test]
    fn serializes_with_type_tags() {
        let mut log = SessionLog::new();
        log.push(Event::PoweredOn { at: Utc::now() });
        let json = log.to_json_pretty().unwrap();
        assert!(json.contains("\"type\": \"powered_on\""));
    }
}
