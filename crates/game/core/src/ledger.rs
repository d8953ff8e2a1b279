//! Cumulative win counters.

use crate::battle::Winner;

/// Running win tally across sessions.
///
/// `player` and `cpu` are roles of selection, not of any particular
/// entity. Mutated exactly once per completed contest; ties leave both
/// counters untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ledger {
    pub player_wins: u32,
    pub cpu_wins: u32,
}

impl Ledger {
    pub const fn new(player_wins: u32, cpu_wins: u32) -> Self {
        Self {
            player_wins,
            cpu_wins,
        }
    }

    /// Credits the winning side. Returns whether a counter changed.
    pub fn record(&mut self, winner: Winner) -> bool {
        match winner {
            Winner::Player => {
                self.player_wins += 1;
                true
            }
            Winner::Cpu => {
                self.cpu_wins += 1;
                true
            }
            Winner::Tie => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_wins_per_side_and_ignores_ties() {
        let mut ledger = Ledger::default();

        assert!(ledger.record(Winner::Player));
        assert!(ledger.record(Winner::Player));
        assert!(ledger.record(Winner::Cpu));
        assert!(!ledger.record(Winner::Tie));

        assert_eq!(ledger, Ledger::new(2, 1));
    }

    #[test]
    fn reset_zeroes_both_counters() {
        let mut ledger = Ledger::new(3, 5);
        ledger.reset();
        assert_eq!(ledger, Ledger::default());
    }
}
