//! Mapping between the [`Ledger`] counters and the keyed score store.

use game_core::Ledger;

use super::{ScoreStore, StoreError};

const KEY_PLAYER_WINS: &str = "player_wins";
const KEY_CPU_WINS: &str = "cpu_wins";

/// Persists and restores the win counters through a [`ScoreStore`].
///
/// Loading never fails: a missing, unreadable, or unparseable counter is
/// a zero. Saving writes both counters together.
pub struct LedgerRepository {
    store: Box<dyn ScoreStore>,
}

impl LedgerRepository {
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        Self { store }
    }

    /// Restore the persisted ledger, defaulting each counter to 0.
    pub fn load(&self) -> Ledger {
        Ledger::new(
            self.load_counter(KEY_PLAYER_WINS),
            self.load_counter(KEY_CPU_WINS),
        )
    }

    /// Persist both counters.
    pub fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        self.store
            .set(KEY_PLAYER_WINS, &ledger.player_wins.to_string())?;
        self.store.set(KEY_CPU_WINS, &ledger.cpu_wins.to_string())
    }

    /// Clear both counters from persistent storage.
    pub fn reset(&self) -> Result<(), StoreError> {
        self.store.remove(KEY_PLAYER_WINS)?;
        self.store.remove(KEY_CPU_WINS)
    }

    fn load_counter(&self, key: &str) -> u32 {
        let value = match self.store.get(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!("Failed to read score key {key}: {error}");
                return 0;
            }
        };

        match value {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring unparseable score value for {key}: {raw:?}");
                0
            }),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryScoreStore;

    #[test]
    fn save_then_load_round_trips_counters() {
        let repository = LedgerRepository::new(Box::new(MemoryScoreStore::new()));

        repository.save(&Ledger::new(3, 5)).unwrap();

        assert_eq!(repository.load(), Ledger::new(3, 5));
    }

    #[test]
    fn missing_keys_default_to_zero() {
        let repository = LedgerRepository::new(Box::new(MemoryScoreStore::new()));
        assert_eq!(repository.load(), Ledger::default());
    }

    #[test]
    fn unparseable_values_default_to_zero() {
        let store = MemoryScoreStore::new();
        store.set("player_wins", "not-a-number").unwrap();
        store.set("cpu_wins", "7").unwrap();

        let repository = LedgerRepository::new(Box::new(store));

        assert_eq!(repository.load(), Ledger::new(0, 7));
    }

    #[test]
    fn reset_clears_persisted_counters() {
        let repository = LedgerRepository::new(Box::new(MemoryScoreStore::new()));
        repository.save(&Ledger::new(2, 4)).unwrap();

        repository.reset().unwrap();

        assert_eq!(repository.load(), Ledger::default());
    }
}
