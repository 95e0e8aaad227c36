use chrono::NaiveDateTime;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::state::AppState, ui::theme::Theme};

pub const TITLE: &str = "Weather Dashboard";

/// Full weekday plus 12-hour time, e.g. "Monday 09:05 AM".
#[must_use]
pub fn clock_label(now: NaiveDateTime) -> String {
    now.format("%A %I:%M %p").to_string()
}

#[must_use]
pub fn theme_toggle_label(dark_mode: bool) -> &'static str {
    if dark_mode {
        "☀ Light mode [F2]"
    } else {
        "☾ Dark mode [F2]"
    }
}

pub fn render_theme_toggle(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let label = Span::styled(
        format!(" {} ", theme_toggle_label(state.view.dark_mode)),
        Style::default().fg(theme.text).bg(theme.surface),
    );
    frame.render_widget(
        Paragraph::new(Line::from(label)).alignment(Alignment::Right),
        area,
    );
}

pub fn render_title(frame: &mut Frame, area: Rect, theme: Theme) {
    let title = Span::styled(
        TITLE,
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    );
    frame.render_widget(
        Paragraph::new(Line::from(title)).alignment(Alignment::Center),
        area,
    );
}

pub fn render_clock(frame: &mut Frame, area: Rect, now: NaiveDateTime, theme: Theme) {
    let clock = Span::styled(clock_label(now), Style::default().fg(theme.muted_text));
    frame.render_widget(
        Paragraph::new(Line::from(clock)).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 16)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .expect("valid fixture time")
    }

    #[test]
    fn clock_label_uses_weekday_and_twelve_hour_time() {
        assert_eq!(clock_label(at(9, 5)), "Monday 09:05 AM");
        assert_eq!(clock_label(at(21, 40)), "Monday 09:40 PM");
    }

    #[test]
    fn toggle_label_offers_the_other_theme() {
        assert!(theme_toggle_label(false).contains("Dark mode"));
        assert!(theme_toggle_label(true).contains("Light mode"));
    }
}
