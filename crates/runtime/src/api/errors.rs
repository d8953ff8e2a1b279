//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, the score store, and entity
//! providers so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

pub use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires an entity provider before building")]
    MissingProvider,

    #[error("runtime requires a score store before building")]
    MissingStore,

    #[error(transparent)]
    Store(#[from] StoreError),
}
