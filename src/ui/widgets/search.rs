use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::card_block;
use crate::{app::state::AppState, ui::theme::Theme};

pub const PLACEHOLDER: &str = "Enter city name";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let block = card_block("Search", theme).title_bottom(
        Line::from(Span::styled(
            " Enter search · Ctrl+U clear · Esc quit ",
            Style::default().fg(theme.muted_text),
        ))
        .right_aligned(),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let room = usize::from(inner.width.saturating_sub(1));
    let line = if state.view.query_city.is_empty() {
        Line::from(vec![
            Span::styled("▏", Style::default().fg(theme.accent)),
            Span::styled(PLACEHOLDER, Style::default().fg(theme.muted_text)),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                visible_tail(&state.view.query_city, room),
                Style::default().fg(theme.text),
            ),
            Span::styled("▏", Style::default().fg(theme.accent)),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);
}

/// Keeps the end of the query in view as it grows past the box.
fn visible_tail(query: &str, width: usize) -> String {
    let count = query.chars().count();
    if count <= width {
        return query.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::from('…');
    out.extend(query.chars().skip(count + 1 - width));
    out
}
