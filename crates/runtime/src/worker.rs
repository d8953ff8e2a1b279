//! Session worker that owns the authoritative [`game_core::Session`].
//!
//! Receives commands from [`SessionHandle`], applies transitions via
//! [`game_core::SessionEngine`], and publishes [`SessionEvent`]
//! notifications. The worker is the single thread of control for the
//! battle flow: entity fetches are awaited inline in the command handler,
//! so fetches are serialized and no two contests are ever in flight, and
//! at most one resolution timer is pending at a time.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::{self, Instant};
use tracing::{debug, warn};

use game_core::{Contest, FighterSlot, Ledger, Phase, Session, SessionEngine, TransitionError};

use crate::api::{EntityProvider, FetchError, SessionView};
use crate::events::SessionEvent;
use crate::store::LedgerRepository;

/// Commands that can be sent to the session worker.
pub(crate) enum Command {
    /// Discard the round and fetch a fresh contest (also the error retry).
    NewBattle { reply: oneshot::Sender<()> },
    /// Record the user's fighter pick.
    SelectFighter {
        slot: FighterSlot,
        reply: oneshot::Sender<()>,
    },
    /// Enter the battling phase and schedule resolution.
    StartBattle { reply: oneshot::Sender<()> },
    /// Rerun the stored contest with the stored selection.
    Replay { reply: oneshot::Sender<()> },
    /// Zero the win counters and clear persisted storage.
    ResetLedger { reply: oneshot::Sender<()> },
    /// Query session and ledger together (read-only).
    Snapshot {
        reply: oneshot::Sender<SessionView>,
    },
}

/// Background task that processes battle-flow commands.
pub(crate) struct SessionWorker {
    session: Session,
    ledger: Ledger,
    provider: Box<dyn EntityProvider>,
    repository: LedgerRepository,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<SessionEvent>,
    resolution_delay: Duration,
    max_duplicate_refetches: u32,
    /// Deadline of the pending battling→complete transition, if any.
    resolution_deadline: Option<Instant>,
}

impl SessionWorker {
    pub(crate) fn new(
        ledger: Ledger,
        provider: Box<dyn EntityProvider>,
        repository: LedgerRepository,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<SessionEvent>,
        resolution_delay: Duration,
        max_duplicate_refetches: u32,
    ) -> Self {
        Self {
            session: Session::new(),
            ledger,
            provider,
            repository,
            command_rx,
            event_tx,
            resolution_delay,
            max_duplicate_refetches,
            resolution_deadline: None,
        }
    }

    /// Main worker loop.
    ///
    /// The session starts in the loading phase, so the first fetch begins
    /// immediately, mirroring the game opening on a fresh contest.
    pub(crate) async fn run(mut self) {
        self.fetch_contest().await;

        loop {
            tokio::select! {
                maybe_cmd = self.command_rx.recv() => match maybe_cmd {
                    Some(cmd) => self.handle_command(cmd).await,
                    None => break,
                },
                _ = resolution_elapsed(self.resolution_deadline) => {
                    self.resolution_deadline = None;
                    self.resolve_battle();
                }
            }
        }
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::NewBattle { reply } => {
                let accepted = self.apply("new battle", |engine| engine.request_new_battle());
                let _ = reply.send(());
                if accepted {
                    self.fetch_contest().await;
                }
            }
            Command::SelectFighter { slot, reply } => {
                self.apply("select fighter", |engine| engine.select_fighter(slot));
                let _ = reply.send(());
            }
            Command::StartBattle { reply } => {
                if self.apply("start battle", |engine| engine.start_battle()) {
                    self.resolution_deadline = Some(Instant::now() + self.resolution_delay);
                }
                let _ = reply.send(());
            }
            Command::Replay { reply } => {
                if self.apply("replay", |engine| engine.replay()) {
                    self.resolution_deadline = Some(Instant::now() + self.resolution_delay);
                }
                let _ = reply.send(());
            }
            Command::ResetLedger { reply } => {
                self.ledger.reset();
                if let Err(error) = self.repository.reset() {
                    warn!("Failed to clear persisted scores: {error}");
                }
                let _ = self.event_tx.send(SessionEvent::LedgerUpdated {
                    ledger: self.ledger,
                });
                let _ = reply.send(());
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(SessionView {
                    session: self.session.clone(),
                    ledger: self.ledger,
                });
            }
        }
    }

    /// Applies one transition, publishing the phase change on success and
    /// logging a debug rejection on an out-of-precondition command.
    /// Rejected commands are no-ops: the session is left untouched.
    fn apply(
        &mut self,
        command: &'static str,
        transition: impl FnOnce(&mut SessionEngine<'_>) -> Result<(), TransitionError>,
    ) -> bool {
        let mut engine = SessionEngine::new(&mut self.session);
        match transition(&mut engine) {
            Ok(()) => {
                self.publish_phase();
                true
            }
            Err(error) => {
                debug!(command, %error, "Command rejected");
                false
            }
        }
    }

    /// Drives the loading phase to selection or error.
    ///
    /// Awaited inline so every fetch (including distinctness refetches)
    /// completes before the next command is processed.
    async fn fetch_contest(&mut self) {
        debug_assert_eq!(self.session.phase(), Phase::Loading);

        match self.fetch_distinct_pair().await {
            Ok(contest) => {
                debug!(
                    first = %contest.first().id,
                    second = %contest.second().id,
                    "Contest fetched"
                );
                if self
                    .apply("store contest", |engine| engine.contest_ready(contest))
                {
                    let _ = self.event_tx.send(SessionEvent::ContestReady);
                }
            }
            Err(error) => {
                warn!(%error, "Entity fetch failed");
                let message = error.to_string();
                if self.apply("record fetch failure", |engine| {
                    engine.fetch_failed(message.clone())
                }) {
                    let _ = self.event_tx.send(SessionEvent::FetchFailed { message });
                }
            }
        }
    }

    /// Fetches two entities, refetching the second until its id differs
    /// from the first's, bounded by `max_duplicate_refetches`.
    async fn fetch_distinct_pair(&self) -> Result<Contest, FetchError> {
        let first = self.provider.fetch_random_entity().await?;

        let mut attempts = 0;
        let second = loop {
            let candidate = self.provider.fetch_random_entity().await?;
            if candidate.id != first.id {
                break candidate;
            }

            attempts += 1;
            if attempts >= self.max_duplicate_refetches {
                return Err(FetchError::RetriesExhausted { attempts });
            }
            debug!(id = %first.id, attempts, "Duplicate entity, refetching second");
        };

        Contest::new(first, second).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    /// The resolution timer elapsed: compute the outcome and credit the
    /// ledger in the same synchronous step, so subscribers never observe
    /// one without the other.
    fn resolve_battle(&mut self) {
        let outcome = match SessionEngine::new(&mut self.session).complete_battle() {
            Ok(outcome) => outcome,
            Err(error) => {
                // Unreachable through the public API: the timer is only
                // armed on a battling transition and cleared on elapse.
                debug!(%error, "Resolution timer fired outside battling");
                return;
            }
        };

        if self.ledger.record(outcome.winner) {
            if let Err(error) = self.repository.save(&self.ledger) {
                warn!("Failed to persist scores: {error}");
            }
            let _ = self.event_tx.send(SessionEvent::LedgerUpdated {
                ledger: self.ledger,
            });
        }

        self.publish_phase();
        let _ = self.event_tx.send(SessionEvent::BattleResolved {
            winner: outcome.winner,
        });
    }

    fn publish_phase(&self) {
        let _ = self.event_tx.send(SessionEvent::PhaseChanged {
            phase: self.session.phase(),
        });
    }
}

/// Pends forever while no resolution is scheduled.
async fn resolution_elapsed(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
