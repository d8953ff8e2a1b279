//! Session state machine for the battle flow.
//!
//! The [`Session`] is the authoritative record of one round: which contest
//! is on the table, which fighter the user picked, and the stored outcome.
//! All mutation flows through [`SessionEngine`], which validates every
//! transition against the phase diagram
//!
//! ```text
//! Loading -> Selection -> Ready -> Battling -> Complete
//!    |                                            |  |
//!    +-> Error (fetch failed)        (replay) <---+  +-> Loading (new battle)
//! ```
//!
//! Out-of-precondition commands return a [`TransitionError`] and leave the
//! session untouched; callers treat them as no-ops rather than crashes.

use thiserror::Error;

use crate::battle::{self, Outcome};
use crate::entity::{Contest, Entity, FighterSlot};

/// Current phase of the battle flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Loading,
    Selection,
    Ready,
    Battling,
    Complete,
    Error,
}

/// A command arrived while the session was in a phase that does not
/// accept it. The session state is guaranteed unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot {command} during the {phase} phase")]
    InvalidPhase {
        command: &'static str,
        phase: Phase,
    },

    #[error("battle start requested before a fighter was selected")]
    NoFighterSelected,
}

/// One round of the game: contest, selection, outcome, and phase.
///
/// Invariants, maintained by [`SessionEngine`]:
/// - `outcome` is `Some` only in [`Phase::Complete`];
/// - `selected` is `Some` only in `Ready`, `Battling`, and `Complete`;
/// - `contest` is `Some` in every phase past `Loading` except `Error`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    phase: Phase,
    contest: Option<Contest>,
    selected: Option<FighterSlot>,
    outcome: Option<Outcome>,
    error: Option<String>,
}

impl Session {
    /// A fresh session, already in `Loading` awaiting its first contest.
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            contest: None,
            selected: None,
            outcome: None,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn contest(&self) -> Option<&Contest> {
        self.contest.as_ref()
    }

    pub fn selected(&self) -> Option<FighterSlot> {
        self.selected
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Human-readable fetch failure, present only in [`Phase::Error`].
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The entity fighting on the user's behalf, once one is selected.
    pub fn player(&self) -> Option<&Entity> {
        let contest = self.contest.as_ref()?;
        Some(contest.entity(self.selected?))
    }

    /// The entity the CPU was left with.
    pub fn cpu(&self) -> Option<&Entity> {
        let contest = self.contest.as_ref()?;
        Some(contest.entity(self.selected?.other()))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Reducer applying battle-flow transitions to a borrowed [`Session`].
///
/// Each method corresponds to one edge of the phase diagram and either
/// applies the transition or returns a [`TransitionError`] without
/// touching the session.
pub struct SessionEngine<'a> {
    session: &'a mut Session,
}

impl<'a> SessionEngine<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// `Complete`/`Error` → `Loading`: discard the round and start a new
    /// fetch. Clears contest, selection, outcome, and any stored error.
    pub fn request_new_battle(&mut self) -> Result<(), TransitionError> {
        match self.session.phase {
            Phase::Complete | Phase::Error => {
                *self.session = Session::new();
                Ok(())
            }
            phase => Err(TransitionError::InvalidPhase {
                command: "request a new battle",
                phase,
            }),
        }
    }

    /// `Loading` → `Selection`: a distinct pair of entities arrived.
    pub fn contest_ready(&mut self, contest: Contest) -> Result<(), TransitionError> {
        self.expect_phase(Phase::Loading, "store a contest")?;
        self.session.contest = Some(contest);
        self.session.phase = Phase::Selection;
        Ok(())
    }

    /// `Loading` → `Error`: the fetch failed; no partial contest is kept.
    pub fn fetch_failed(&mut self, message: impl Into<String>) -> Result<(), TransitionError> {
        self.expect_phase(Phase::Loading, "record a fetch failure")?;
        self.session.error = Some(message.into());
        self.session.phase = Phase::Error;
        Ok(())
    }

    /// `Selection` → `Ready`: the user picked a fighter; the other slot
    /// becomes the CPU's.
    pub fn select_fighter(&mut self, slot: FighterSlot) -> Result<(), TransitionError> {
        self.expect_phase(Phase::Selection, "select a fighter")?;
        self.session.selected = Some(slot);
        self.session.phase = Phase::Ready;
        Ok(())
    }

    /// `Ready` → `Battling`: the resolution timer may now be scheduled.
    pub fn start_battle(&mut self) -> Result<(), TransitionError> {
        self.expect_phase(Phase::Ready, "start the battle")?;
        if self.session.selected.is_none() {
            return Err(TransitionError::NoFighterSelected);
        }
        self.session.phase = Phase::Battling;
        Ok(())
    }

    /// `Battling` → `Complete`: computes the outcome via the battle engine
    /// and stores it. Returns the outcome so the caller can credit the
    /// ledger in the same step.
    pub fn complete_battle(&mut self) -> Result<Outcome, TransitionError> {
        self.expect_phase(Phase::Battling, "complete the battle")?;
        let (player, cpu) = self
            .session
            .player()
            .zip(self.session.cpu())
            .ok_or(TransitionError::NoFighterSelected)?;

        let outcome = battle::resolve(player, cpu);
        self.session.outcome = Some(outcome);
        self.session.phase = Phase::Complete;
        Ok(outcome)
    }

    /// `Complete` → `Battling`: rerun the same contest with the same
    /// selection. Only the outcome is cleared.
    pub fn replay(&mut self) -> Result<(), TransitionError> {
        self.expect_phase(Phase::Complete, "replay the battle")?;
        self.session.outcome = None;
        self.session.phase = Phase::Battling;
        Ok(())
    }

    fn expect_phase(&self, expected: Phase, command: &'static str) -> Result<(), TransitionError> {
        if self.session.phase != expected {
            return Err(TransitionError::InvalidPhase {
                command,
                phase: self.session.phase,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::Winner;
    use crate::entity::{AttributeSet, Entity, EntityId};

    fn contest() -> Contest {
        // First sweeps second on every attribute.
        let strong = Entity::new(
            EntityId(1),
            "strong",
            "http://example.test/1.png",
            AttributeSet::new(120, 80, 90),
        );
        let weak = Entity::new(
            EntityId(2),
            "weak",
            "http://example.test/2.png",
            AttributeSet::new(90, 70, 60),
        );
        Contest::new(strong, weak).unwrap()
    }

    fn session_in_ready() -> Session {
        let mut session = Session::new();
        let mut engine = SessionEngine::new(&mut session);
        engine.contest_ready(contest()).unwrap();
        engine.select_fighter(FighterSlot::First).unwrap();
        session
    }

    #[test]
    fn full_round_reaches_complete_with_outcome() {
        let mut session = session_in_ready();
        let mut engine = SessionEngine::new(&mut session);

        engine.start_battle().unwrap();
        assert_eq!(session.phase(), Phase::Battling);
        assert!(session.outcome().is_none());

        let mut engine = SessionEngine::new(&mut session);
        let outcome = engine.complete_battle().unwrap();
        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.outcome(), Some(&outcome));
    }

    #[test]
    fn start_battle_before_selection_is_rejected() {
        let mut session = Session::new();
        let mut engine = SessionEngine::new(&mut session);
        engine.contest_ready(contest()).unwrap();

        let before = session.clone();
        let mut engine = SessionEngine::new(&mut session);
        let err = engine.start_battle().unwrap_err();

        assert_eq!(
            err,
            TransitionError::InvalidPhase {
                command: "start the battle",
                phase: Phase::Selection,
            }
        );
        assert_eq!(session, before, "rejected command must not mutate state");
    }

    #[test]
    fn selecting_second_slot_assigns_cpu_the_first() {
        let mut session = Session::new();
        let mut engine = SessionEngine::new(&mut session);
        engine.contest_ready(contest()).unwrap();
        engine.select_fighter(FighterSlot::Second).unwrap();

        assert_eq!(session.player().unwrap().id, EntityId(2));
        assert_eq!(session.cpu().unwrap().id, EntityId(1));
    }

    #[test]
    fn replay_keeps_contest_and_selection_but_clears_outcome() {
        let mut session = session_in_ready();
        let mut engine = SessionEngine::new(&mut session);
        engine.start_battle().unwrap();
        SessionEngine::new(&mut session).complete_battle().unwrap();

        SessionEngine::new(&mut session).replay().unwrap();

        assert_eq!(session.phase(), Phase::Battling);
        assert!(session.outcome().is_none());
        assert!(session.contest().is_some());
        assert_eq!(session.selected(), Some(FighterSlot::First));
    }

    #[test]
    fn new_battle_clears_the_whole_round() {
        let mut session = session_in_ready();
        let mut engine = SessionEngine::new(&mut session);
        engine.start_battle().unwrap();
        SessionEngine::new(&mut session).complete_battle().unwrap();

        SessionEngine::new(&mut session)
            .request_new_battle()
            .unwrap();

        assert_eq!(session, Session::new());
    }

    #[test]
    fn new_battle_is_rejected_mid_round() {
        let mut session = session_in_ready();
        let err = SessionEngine::new(&mut session)
            .request_new_battle()
            .unwrap_err();
        assert!(matches!(err, TransitionError::InvalidPhase { .. }));
        assert_eq!(session.phase(), Phase::Ready);
    }

    #[test]
    fn fetch_failure_moves_to_error_and_retry_reenters_loading() {
        let mut session = Session::new();
        SessionEngine::new(&mut session)
            .fetch_failed("provider unreachable")
            .unwrap();

        assert_eq!(session.phase(), Phase::Error);
        assert_eq!(session.error(), Some("provider unreachable"));
        assert!(session.contest().is_none());

        SessionEngine::new(&mut session)
            .request_new_battle()
            .unwrap();
        assert_eq!(session.phase(), Phase::Loading);
        assert!(session.error().is_none());
    }

    #[test]
    fn complete_is_rejected_outside_battling() {
        let mut session = session_in_ready();
        let err = SessionEngine::new(&mut session)
            .complete_battle()
            .unwrap_err();
        assert!(matches!(err, TransitionError::InvalidPhase { .. }));
        assert!(session.outcome().is_none());
    }
}
