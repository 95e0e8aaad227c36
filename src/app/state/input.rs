use super::*;

pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeyCommand {
    Quit,
    ToggleDarkMode,
    ClearQuery,
    Submit,
    Backspace,
}

pub(super) fn key_command(key: KeyEvent) -> Option<KeyCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(KeyCommand::Quit),
            KeyCode::Char('d' | 'D') => Some(KeyCommand::ToggleDarkMode),
            KeyCode::Char('u' | 'U') => Some(KeyCommand::ClearQuery),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc => Some(KeyCommand::Quit),
        KeyCode::F(2) => Some(KeyCommand::ToggleDarkMode),
        KeyCode::Enter => Some(KeyCommand::Submit),
        KeyCode::Backspace => Some(KeyCommand::Backspace),
        _ => None,
    }
}

/// Printable character destined for the search box.
pub(super) fn query_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) if is_city_char(ch) => Some(ch),
        _ => None,
    }
}
