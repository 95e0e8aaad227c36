#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::data::openweather::DEFAULT_API_URL;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-panel",
    version,
    about = "Terminal weather lookup panel"
)]
pub struct Cli {
    /// City to search on startup (skips location detection)
    pub city: Option<String>,

    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// OpenWeather API base URL
    #[arg(long, env = "OPENWEATHER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Do not detect the current location
    #[arg(long)]
    pub no_locate: bool,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Disable background animation
    #[arg(long)]
    pub no_animation: bool,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Start in dark mode for this session
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Start in light mode for this session
    #[arg(long)]
    pub light: bool,

    /// Write logs to this file
    #[arg(long, env = "WEATHER_PANEL_LOG")]
    pub log_file: Option<PathBuf>,

    /// Print the weather for CITY to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon))
                if crate::domain::weather::Coordinates::new(lat, lon).is_none() =>
            {
                anyhow::bail!("--lat must be within [-90, 90] and --lon within [-180, 180]")
            }
            _ => {}
        }
        if self.one_shot && self.search_city().is_none() {
            anyhow::bail!("--one-shot requires a city");
        }
        Ok(())
    }

    /// Trimmed startup city, if any.
    #[must_use]
    pub fn search_city(&self) -> Option<String> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map(str::to_string)
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }

    /// Session override of the persisted theme.
    #[must_use]
    pub fn dark_mode_override(&self) -> Option<bool> {
        if self.dark {
            Some(true)
        } else if self.light {
            Some(false)
        } else {
            None
        }
    }
}
