//! Composes the widgets into the full battle screen.
use anyhow::Result;
use ratatui::layout::{Constraint, Layout};

use runtime::SessionView;

use crate::presentation::{terminal::Tui, widgets};

/// Draw one frame: header, arena, footer.
pub fn render(terminal: &mut Tui, view: &SessionView) -> Result<()> {
    terminal.draw(|frame| {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Arena
            Constraint::Length(4), // Footer
        ])
        .split(frame.area());

        widgets::header::render(frame, chunks[0], view);
        widgets::arena::render(frame, chunks[1], view);
        widgets::footer::render(frame, chunks[2], view);
    })?;

    Ok(())
}
