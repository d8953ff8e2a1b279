//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the battle flow.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::api::{EntityProvider, Result, RuntimeError, SessionHandle};
use crate::events::SessionEvent;
use crate::store::{LedgerRepository, ScoreStore};
use crate::worker::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and the worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Pause between starting a battle and applying its outcome. Purely
    /// presentational; carries no game logic.
    pub resolution_delay: Duration,
    /// Bound on refetches of the second entity when the provider keeps
    /// returning the first one's id.
    pub max_duplicate_refetches: u32,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            resolution_delay: Duration::from_millis(1500),
            max_duplicate_refetches: 10,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates the battle-flow session.
///
/// Design: Runtime owns the worker task and restores the ledger at build
/// time. [`SessionHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: SessionHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Subscribe to session events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.handle.subscribe()
    }

    /// Shutdown the runtime gracefully.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    provider: Option<Box<dyn EntityProvider>>,
    store: Option<Box<dyn ScoreStore>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            provider: None,
            store: None,
        }
    }

    /// Override runtime configuration.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required entity provider.
    pub fn provider(mut self, provider: impl EntityProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Set the required score store.
    pub fn store(mut self, store: impl ScoreStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Build the runtime.
    ///
    /// Restores the persisted ledger, spawns the session worker, and
    /// kicks off the initial entity fetch. Must run inside a tokio
    /// runtime.
    pub fn build(self) -> Result<Runtime> {
        let provider = self.provider.ok_or(RuntimeError::MissingProvider)?;
        let store = self.store.ok_or(RuntimeError::MissingStore)?;

        let repository = LedgerRepository::new(store);
        let ledger = repository.load();

        tracing::info!(
            player_wins = ledger.player_wins,
            cpu_wins = ledger.cpu_wins,
            "Ledger restored"
        );

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (event_tx, _event_rx) =
            broadcast::channel::<SessionEvent>(self.config.event_buffer_size);

        let handle = SessionHandle::new(command_tx, event_tx.clone());

        let worker = SessionWorker::new(
            ledger,
            provider,
            repository,
            command_rx,
            event_tx,
            self.config.resolution_delay,
            self.config.max_duplicate_refetches,
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
