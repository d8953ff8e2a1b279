//! Asynchronous abstraction for sourcing random entities.
//!
//! Runtime users plug in an [`EntityProvider`] implementation so the
//! session can run against a real data source, scripted fixtures, or
//! testing stubs. The runtime never assumes a particular wire format; it
//! only requires a unique id, display metadata, and the three attributes.
use async_trait::async_trait;
use thiserror::Error;

use game_core::Entity;

/// Failure modes of an entity fetch.
///
/// All of these move the session to its error phase with a retry path;
/// none are fatal to the process.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("entity provider unreachable: {0}")]
    Unreachable(String),

    #[error("entity provider returned malformed data: {0}")]
    Malformed(String),

    #[error("could not fetch a distinct second entity after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

/// Trait for fetching one randomly selected entity.
///
/// Different implementations can handle:
/// - A real HTTP data source (client crate)
/// - Scripted/replayed entities
/// - Testing fixtures that deliberately produce duplicates or failures
#[async_trait]
pub trait EntityProvider: Send + Sync {
    /// Fetch one random entity.
    ///
    /// Calls are serialized by the session worker; an implementation is
    /// never asked for two entities concurrently.
    async fn fetch_random_entity(&self) -> std::result::Result<Entity, FetchError>;
}
