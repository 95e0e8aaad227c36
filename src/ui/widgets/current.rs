use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::shared::card_block;
use crate::{
    app::state::AppState,
    cli::IconMode,
    domain::weather::{CurrentWeather, capitalize_words, weather_icon},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let Some(current) = state.view.current.as_ref() else {
        return;
    };
    let block = card_block("Now", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(card_lines(current, state.icon_mode, theme)).alignment(Alignment::Center),
        inner,
    );
}

pub(crate) fn card_lines(
    current: &CurrentWeather,
    icon_mode: IconMode,
    theme: Theme,
) -> Vec<Line<'static>> {
    let icon = weather_icon(current.presentation().icon, icon_mode);
    vec![
        Line::from(Span::styled(
            current.location_name.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(theme.accent)),
            Span::styled(
                capitalize_words(&current.description),
                Style::default().fg(theme.text),
            ),
        ]),
        Line::from(Span::styled(
            format!("{}°C", current.rounded_temp()),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("Humidity: {}%", current.humidity_pct),
                Style::default().fg(theme.muted_text),
            ),
            Span::raw("   "),
            Span::styled(
                format!("Wind: {} m/s", current.wind_speed_ms),
                Style::default().fg(theme.muted_text),
            ),
        ]),
    ]
}
