//! Footer widget: result banner, error messages, and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use game_core::{Phase, Winner};
use runtime::SessionView;

/// Render the status line and the key hints for the current phase.
pub fn render(frame: &mut Frame, area: Rect, view: &SessionView) {
    let session = &view.session;

    let (status, style) = match session.phase() {
        Phase::Loading => ("Summoning fighters...".to_owned(), Style::default()),
        Phase::Selection => (
            "Choose your fighter".to_owned(),
            Style::default().fg(Color::Cyan),
        ),
        Phase::Ready => (
            "Ready to rumble".to_owned(),
            Style::default().fg(Color::Cyan),
        ),
        Phase::Battling => (
            "Battle in progress...".to_owned(),
            Style::default().fg(Color::Yellow),
        ),
        Phase::Complete => match session.outcome().map(|outcome| outcome.winner) {
            Some(Winner::Player) => (
                "You win!".to_owned(),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(Winner::Cpu) => (
                "The CPU wins.".to_owned(),
                Style::default().fg(Color::LightRed),
            ),
            _ => ("It's a tie.".to_owned(), Style::default().fg(Color::Yellow)),
        },
        Phase::Error => (
            session
                .error()
                .unwrap_or("Something went wrong.")
                .to_owned(),
            Style::default().fg(Color::LightRed),
        ),
    };

    let hints = match session.phase() {
        Phase::Loading | Phase::Battling => "q: quit",
        Phase::Selection => "1/2: pick a fighter | q: quit",
        Phase::Ready => "enter: fight | q: quit",
        Phase::Complete => "n: new battle | r: replay | x: reset score | q: quit",
        Phase::Error => "n: retry | q: quit",
    };

    let text = vec![
        Line::from(Span::styled(status, style)),
        Line::from(Span::styled(
            hints,
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
