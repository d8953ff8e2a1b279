//! Session notifications published by the worker.

use game_core::{Ledger, Phase, Winner};

/// Events broadcast to subscribers as the session advances.
///
/// Delivery is best-effort: the presentation layer re-queries the
/// session snapshot when it needs the full picture, so a lagged
/// subscriber never observes corrupted state.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// The session moved to a new phase.
    PhaseChanged { phase: Phase },
    /// A distinct pair of entities is ready for selection.
    ContestReady,
    /// The battle resolved; the outcome is stored on the session.
    BattleResolved { winner: Winner },
    /// A ledger counter changed (win recorded or counters reset).
    LedgerUpdated { ledger: Ledger },
    /// An entity fetch failed; the session is in its error phase.
    FetchFailed { message: String },
}
