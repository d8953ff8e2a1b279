//! Score persistence.
//!
//! The persistence collaborator is a string-keyed store ([`ScoreStore`]);
//! [`LedgerRepository`] maps the two win counters onto it. Malformed or
//! missing values are treated as zero, never as fatal errors, so a
//! damaged store can at worst forget the tally.
mod file;
mod ledger;
mod memory;

use thiserror::Error;

pub use file::FileScoreStore;
pub use ledger::LedgerRepository;
pub use memory::MemoryScoreStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed")]
    Io(#[from] std::io::Error),

    #[error("store serialization failed: {0}")]
    Serialization(String),
}

/// String-keyed storage for score counters.
///
/// Implementations must persist `set` values across `get` calls on the
/// same store; durable implementations persist them across process
/// restarts as well.
pub trait ScoreStore: Send + Sync {
    /// Read a value, `None` when the key was never set or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key; removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
