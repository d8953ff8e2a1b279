//! Cloneable façade for issuing commands to the session worker.
//!
//! [`SessionHandle`] hides channel plumbing and offers async helpers for
//! driving the battle flow and streaming session events. These commands
//! are the only mutation paths into the session.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{FighterSlot, Ledger, Session};

use super::errors::{Result, RuntimeError};
use crate::events::SessionEvent;
use crate::worker::Command;

/// Read-only snapshot of the session and ledger, taken together.
///
/// The default view is a fresh loading-phase session with a zero
/// ledger, suitable for rendering before the first snapshot arrives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionView {
    pub session: Session,
    pub ledger: Ledger,
}

/// Client-facing handle to interact with the runtime.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<SessionEvent>,
}

impl SessionHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<SessionEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Discard the current round and fetch a fresh contest.
    ///
    /// Legal from the complete and error phases; elsewhere the worker
    /// ignores it. Also the retry path after a failed fetch.
    pub async fn new_battle(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.dispatch(Command::NewBattle { reply: reply_tx }, reply_rx)
            .await
    }

    /// Pick a fighter; the other slot becomes the CPU's.
    pub async fn select_fighter(&self, slot: FighterSlot) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.dispatch(
            Command::SelectFighter {
                slot,
                reply: reply_tx,
            },
            reply_rx,
        )
        .await
    }

    /// Begin the battle; the outcome lands after the resolution delay.
    pub async fn start_battle(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.dispatch(Command::StartBattle { reply: reply_tx }, reply_rx)
            .await
    }

    /// Rerun the same contest with the same selection.
    pub async fn replay(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.dispatch(Command::Replay { reply: reply_tx }, reply_rx)
            .await
    }

    /// Zero both win counters and clear persisted storage.
    pub async fn reset_ledger(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.dispatch(Command::ResetLedger { reply: reply_tx }, reply_rx)
            .await
    }

    /// Query the current session and ledger (read-only snapshot).
    pub async fn snapshot(&self) -> Result<SessionView> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to session events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    async fn dispatch(&self, command: Command, reply_rx: oneshot::Receiver<()>) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Phase;

    #[test]
    fn default_view_is_a_fresh_loading_session() {
        let view = SessionView::default();
        assert_eq!(view.session.phase(), Phase::Loading);
        assert_eq!(view.ledger, Ledger::default());
    }
}
