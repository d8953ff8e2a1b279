//! Terminal rendering for the battle flow.
pub mod terminal;
pub mod ui;
pub mod widgets;
