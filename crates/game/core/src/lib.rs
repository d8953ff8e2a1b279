//! Deterministic battle-flow logic shared across the runtime and client.
//!
//! `game-core` defines the canonical rules of the game: entity data, the
//! stat-comparison battle engine, the session state machine, and the win
//! ledger. Everything here is pure and synchronous; fetching entities,
//! timers, and persistence live in the `runtime` crate. All session
//! mutation flows through [`session::SessionEngine`].
pub mod battle;
pub mod entity;
pub mod ledger;
pub mod session;

pub use battle::{Advantage, AttributeResults, Outcome, Winner, resolve};
pub use entity::{AttributeKind, AttributeSet, Contest, ContestError, Entity, EntityId, FighterSlot};
pub use ledger::Ledger;
pub use session::{Phase, Session, SessionEngine, TransitionError};
