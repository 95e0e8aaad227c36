use super::ColorCapability;
use crate::cli::ColorArg;

/// Terminal variables that decide how many colours the panel may use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct TermEnv {
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub no_color: bool,
}

impl TermEnv {
    pub(super) fn from_process() -> Self {
        Self {
            term: std::env::var("TERM").ok(),
            colorterm: std::env::var("COLORTERM").ok(),
            no_color: std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()),
        }
    }

    fn advertised(&self) -> Option<ColorCapability> {
        let term = self.term.as_deref().unwrap_or_default().to_ascii_lowercase();
        let colorterm = self
            .colorterm
            .as_deref()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if matches!(colorterm.as_str(), "truecolor" | "24bit") || term.ends_with("direct") {
            Some(ColorCapability::TrueColor)
        } else if term.contains("256color") {
            Some(ColorCapability::Xterm256)
        } else {
            None
        }
    }

    fn is_dumb(&self) -> bool {
        self.term
            .as_deref()
            .is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
    }
}

/// `Never` pins the 16-colour palette. `Always` trusts the terminal's advertisement and
/// otherwise assumes 256 colours. `Auto` honours `NO_COLOR` and dumb terminals.
pub(super) fn capability_for(mode: ColorArg, env: &TermEnv) -> ColorCapability {
    match mode {
        ColorArg::Never => ColorCapability::Basic16,
        ColorArg::Always => env.advertised().unwrap_or(ColorCapability::Xterm256),
        ColorArg::Auto if env.no_color || env.is_dumb() => ColorCapability::Basic16,
        ColorArg::Auto => env.advertised().unwrap_or(ColorCapability::Basic16),
    }
}
