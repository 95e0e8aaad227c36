pub mod particles;
pub mod report;
pub mod theme;
pub mod widgets;

use chrono::{Local, NaiveDateTime};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;
use theme::{ColorCapability, Theme, detect_color_capability, theme_for};

pub const MIN_WIDTH: u16 = 40;
/// Every section at full height plus the one-row margin above and below.
pub const MIN_HEIGHT: u16 = 24;

/// Which sections the current view produces, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ThemeToggle,
    Header,
    Clock,
    Search,
    Current,
    Forecast,
    Loading,
    Error,
}

impl Section {
    fn constraint(self) -> Constraint {
        match self {
            Self::ThemeToggle | Self::Header | Self::Clock | Self::Loading => Constraint::Length(1),
            Self::Search | Self::Error => Constraint::Length(3),
            Self::Current | Self::Forecast => Constraint::Length(6),
        }
    }
}

#[must_use]
pub fn sections(state: &AppState) -> Vec<Section> {
    let view = &state.view;
    let mut out = vec![
        Section::ThemeToggle,
        Section::Header,
        Section::Clock,
        Section::Search,
    ];
    if view.current.is_some() {
        out.push(Section::Current);
    }
    if !view.forecast.is_empty() {
        out.push(Section::Forecast);
    }
    if view.is_loading {
        out.push(Section::Loading);
    }
    if view.error_message.is_some() {
        out.push(Section::Error);
    }
    out
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let capability = detect_color_capability(state.color_mode);
    render_at(frame, state, Local::now().naive_local(), capability);
}

/// Draws the panel for a fixed wall-clock time.
pub fn render_at(
    frame: &mut Frame,
    state: &AppState,
    now: NaiveDateTime,
    capability: ColorCapability,
) {
    let area = frame.area();
    let theme = theme_for(state.view.background(), state.view.dark_mode, capability);

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area, theme);
        return;
    }

    frame.render_widget(
        widgets::background::GradientBackground {
            theme,
            particles: &state.particles.particles,
        },
        area,
    );

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let sections = sections(state);
    let mut constraints: Vec<Constraint> = sections.iter().map(|s| s.constraint()).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (section, chunk) in sections.iter().zip(chunks.iter()) {
        let chunk = *chunk;
        match section {
            Section::ThemeToggle => {
                widgets::header::render_theme_toggle(frame, chunk, state, theme);
            }
            Section::Header => widgets::header::render_title(frame, chunk, theme),
            Section::Clock => widgets::header::render_clock(frame, chunk, now, theme),
            Section::Search => widgets::search::render(frame, chunk, state, theme),
            Section::Current => widgets::current::render(frame, chunk, state, theme),
            Section::Forecast => widgets::forecast::render(frame, chunk, state, theme),
            Section::Loading => widgets::status::render_loading(frame, chunk, state, theme),
            Section::Error => widgets::status::render_error(frame, chunk, state, theme),
        }
    }
}

fn render_too_small(frame: &mut Frame, area: Rect, theme: Theme) {
    let warning = Paragraph::new(Line::from(format!(
        "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
    )))
    .style(Style::default().fg(theme.text).bg(theme.surface))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("weather-panel")
            .title_style(Style::default().add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(warning, area);
}
