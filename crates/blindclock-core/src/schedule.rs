//! Blind schedule preview.
//!
//! Pure projection of the doubling progression a game will follow, for the
//! CLI `schedule` command. The device itself never looks ahead; it doubles
//! one round at a time.

use serde::{Deserialize, Serialize};

use crate::session::SMALL_BLIND_CAP;

/// One upcoming blind level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindLevel {
    pub round: u32,
    pub small_blind: u32,
    pub big_blind: u32,
}

/// Project `levels` rounds of blinds starting from `starting_small_blind`,
/// doubling each round and clamping at the display cap.
pub fn preview(starting_small_blind: u32, levels: u32) -> Vec<BlindLevel> {
    let mut out = Vec::with_capacity(levels as usize);
    let mut small = starting_small_blind.min(SMALL_BLIND_CAP);
    for round in 1..=levels {
        out.push(BlindLevel {
            round,
            small_blind: small,
            big_blind: small * 2,
        });
        small = (small * 2).min(SMALL_BLIND_CAP);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_each_round() {
        let levels = preview(25, 4);
        let smalls: Vec<u32> = levels.iter().map(|l| l.small_blind).collect();
        assert_eq!(smalls, vec![25, 50, 100, 200]);
        assert_eq!(levels[3].big_blind, 400);
    }

    #[test]
    fn caps_at_9999() {
        let levels = preview(5000, 3);
        let smalls: Vec<u32> = levels.iter().map(|l| l.small_blind).collect();
        assert_eq!(smalls, vec![5000, 9999, 9999]);
    }

    #[test]
    fn rounds_are_numbered_from_one() {
        let levels = preview(25, 2);
        assert_eq!(levels[0].round, 1);
        assert_eq!(levels[1].round, 2);
    }

    #[test]
    fn zero_levels_is_empty() {
        assert!(preview(25, 0).is_empty());
    }
}
