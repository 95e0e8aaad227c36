use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use crate::ui::theme::Theme;

pub(super) fn card_style(theme: Theme) -> Style {
    Style::default().fg(theme.text).bg(theme.surface)
}

pub(super) fn card_block(title: &'static str, theme: Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(card_style(theme))
        .border_style(Style::default().fg(theme.border).bg(theme.surface))
}

/// Shortens `text` to `width` columns, ending in an ellipsis when cut.
pub(super) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}
