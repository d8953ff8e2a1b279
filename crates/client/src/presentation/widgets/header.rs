//! Header widget displaying the scoreboard and current phase.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use runtime::SessionView;

/// Render the header panel with the running tally and session phase.
pub fn render(frame: &mut Frame, area: Rect, view: &SessionView) {
    let text = vec![Line::from(vec![
        Span::raw("You: "),
        Span::styled(
            view.ledger.player_wins.to_string(),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | CPU: "),
        Span::styled(
            view.ledger.cpu_wins.to_string(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Phase: "),
        Span::styled(
            view.session.phase().to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Stat Duel"));

    frame.render_widget(paragraph, area);
}
