//! Widget renderers composing the battle screen.
pub mod arena;
pub mod footer;
pub mod header;
