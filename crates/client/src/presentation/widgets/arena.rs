//! Arena widget: the two fighter cards side by side.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use game_core::{Advantage, AttributeKind, FighterSlot, Phase, Session};
use runtime::SessionView;

/// Render both fighter cards, or a placeholder while no contest exists.
pub fn render(frame: &mut Frame, area: Rect, view: &SessionView) {
    let session = &view.session;

    if session.contest().is_none() {
        let text = match session.phase() {
            Phase::Error => "No fighters available.",
            _ => "Summoning fighters...",
        };
        let paragraph =
            Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Arena"));
        frame.render_widget(paragraph, area);
        return;
    }

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_card(frame, columns[0], session, FighterSlot::First);
    render_card(frame, columns[1], session, FighterSlot::Second);
}

fn render_card(frame: &mut Frame, area: Rect, session: &Session, slot: FighterSlot) {
    let Some(contest) = session.contest() else {
        return;
    };
    let entity = contest.entity(slot);

    let key = match slot {
        FighterSlot::First => "1",
        FighterSlot::Second => "2",
    };
    let role = match session.selected() {
        Some(selected) if selected == slot => " - YOU",
        Some(_) => " - CPU",
        None => "",
    };
    let title = format!("[{key}] {} {}{role}", entity.name, entity.id);

    let border_style = match session.selected() {
        Some(selected) if selected == slot => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    };

    let mut lines = Vec::with_capacity(4);
    for kind in AttributeKind::iter() {
        let value = entity.attributes.get(kind);
        let style = attribute_style(session, slot, kind);
        lines.push(Line::from(vec![
            Span::raw(format!("{kind:>8}: ")),
            Span::styled(value.to_string(), style),
        ]));
    }
    lines.push(Line::from(Span::styled(
        entity.image.clone(),
        Style::default().add_modifier(Modifier::DIM),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    frame.render_widget(paragraph, area);
}

/// Styles an attribute row from the stored outcome, seen from this
/// card's side. Neutral until the battle completes; the UI never
/// recomputes comparisons itself.
fn attribute_style(session: &Session, slot: FighterSlot, kind: AttributeKind) -> Style {
    let (Some(outcome), Some(selected)) = (session.outcome(), session.selected()) else {
        return Style::default();
    };

    let this_side_won = match outcome.attributes.get(kind) {
        Advantage::Player => slot == selected,
        Advantage::Cpu => slot != selected,
        Advantage::Even => return Style::default().add_modifier(Modifier::DIM),
    };

    if this_side_won {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::LightRed)
    }
}
