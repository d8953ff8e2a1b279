//! Runtime orchestration for the battle-flow session.
//!
//! This crate wires the entity provider abstraction, score persistence,
//! and the session worker into a cohesive runtime API. Consumers embed
//! [`Runtime`] to drive a session and interact with it through
//! [`SessionHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] carries session notifications to subscribers
//! - [`store`] provides score persistence adapters
//! - the worker that owns the session stays internal to the crate
pub mod api;
pub mod events;
pub mod runtime;
pub mod store;

mod worker;

pub use api::{EntityProvider, FetchError, Result, RuntimeError, SessionHandle, SessionView};
pub use events::SessionEvent;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use store::{FileScoreStore, LedgerRepository, MemoryScoreStore, ScoreStore, StoreError};
