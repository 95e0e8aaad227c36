use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::{card_block, truncate};
use crate::{
    app::state::AppState,
    cli::IconMode,
    domain::weather::{ForecastEntry, capitalize_words, weather_icon},
    ui::theme::Theme,
};

pub const TITLE: &str = "5-Day Forecast";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let entries = &state.view.forecast;
    if entries.is_empty() {
        return;
    }
    let block = card_block(TITLE, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let count = u32::try_from(entries.len()).unwrap_or(u32::MAX);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(entries.iter().map(|_| Constraint::Ratio(1, count)))
        .split(inner);

    for (entry, column) in entries.iter().zip(columns.iter()) {
        let width = usize::from(column.width.saturating_sub(1));
        frame.render_widget(
            Paragraph::new(column_lines(entry, state.icon_mode, theme, width))
                .alignment(Alignment::Center),
            *column,
        );
    }
}

fn column_lines(
    entry: &ForecastEntry,
    icon_mode: IconMode,
    theme: Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let icon = weather_icon(entry.presentation().icon, icon_mode);
    vec![
        Line::from(Span::styled(
            entry.weekday_label(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(icon, Style::default().fg(theme.accent))),
        Line::from(Span::styled(
            truncate(&capitalize_words(&entry.description), width),
            Style::default().fg(theme.muted_text),
        )),
        Line::from(Span::styled(
            format!("{}°C", entry.rounded_temp()),
            Style::default().fg(theme.text),
        )),
    ]
}
