use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::{app::state::AppState, ui::theme::Theme};

pub const LOADING_LABEL: &str = "Fetching weather...";

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

#[must_use]
pub fn spinner_frame(tick: u64) -> &'static str {
    let idx = usize::try_from(tick % SPINNER.len() as u64).unwrap_or_default();
    SPINNER[idx]
}

pub fn render_loading(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_frame(state.frame_tick)),
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            LOADING_LABEL,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn render_error(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let Some(message) = state.view.error_message.as_deref() else {
        return;
    };
    let banner = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(theme.danger).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.danger))
            .style(Style::default().bg(theme.surface)),
    );
    frame.render_widget(banner, area);
}
