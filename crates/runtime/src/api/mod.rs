//! Public API surface of the runtime crate.
//!
//! Clients interact with the session exclusively through these types: the
//! [`SessionHandle`] command façade, the [`EntityProvider`] seam they
//! implement, and the error taxonomy.
mod errors;
mod handle;
mod providers;

pub use errors::{Result, RuntimeError};
pub use handle::{SessionHandle, SessionView};
pub use providers::{EntityProvider, FetchError};
