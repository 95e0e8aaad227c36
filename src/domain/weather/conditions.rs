use crate::cli::IconMode;

use super::CurrentWeather;

/// Top-level condition keyword reported by the provider (`weather[0].main`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Haze,
    Fog,
    Smoke,
    Sand,
    Ash,
    Dust,
    Squall,
    Tornado,
    Unknown,
}

const CONDITION_KEYWORDS: &[(&str, ConditionKind)] = &[
    ("Clear", ConditionKind::Clear),
    ("Clouds", ConditionKind::Clouds),
    ("Rain", ConditionKind::Rain),
    ("Drizzle", ConditionKind::Drizzle),
    ("Thunderstorm", ConditionKind::Thunderstorm),
    ("Snow", ConditionKind::Snow),
    ("Mist", ConditionKind::Mist),
    ("Haze", ConditionKind::Haze),
    ("Fog", ConditionKind::Fog),
    ("Smoke", ConditionKind::Smoke),
    ("Sand", ConditionKind::Sand),
    ("Ash", ConditionKind::Ash),
    ("Dust", ConditionKind::Dust),
    ("Squall", ConditionKind::Squall),
    ("Tornado", ConditionKind::Tornado),
];

impl ConditionKind {
    /// Case-sensitive lookup; anything outside the table is `Unknown`.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        CONDITION_KEYWORDS
            .iter()
            .find_map(|(candidate, kind)| (*candidate == keyword).then_some(*kind))
            .unwrap_or(Self::Unknown)
    }

    #[must_use]
    pub fn all_known() -> impl Iterator<Item = (&'static str, Self)> {
        CONDITION_KEYWORDS.iter().copied()
    }

    /// Unknown keywords borrow the clear-sky icon.
    #[must_use]
    pub fn icon(self) -> IconRef {
        match self {
            Self::Clear | Self::Unknown => IconRef::Clear,
            Self::Clouds => IconRef::Clouds,
            Self::Rain | Self::Squall => IconRef::Rain,
            Self::Drizzle => IconRef::Drizzle,
            Self::Thunderstorm | Self::Tornado => IconRef::Storm,
            Self::Snow => IconRef::Snow,
            Self::Mist
            | Self::Haze
            | Self::Fog
            | Self::Smoke
            | Self::Sand
            | Self::Ash
            | Self::Dust => IconRef::Haze,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRef {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Storm,
    Snow,
    Haze,
}

impl IconRef {
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::Clear => "clear-day",
            Self::Clouds => "cloudy",
            Self::Rain => "extreme-rain",
            Self::Drizzle => "partly-cloudy-day-drizzle",
            Self::Storm => "thunderstorms-extreme",
            Self::Snow => "snow",
            Self::Haze => "fog",
        }
    }
}

/// Coarse backdrop grouping; several conditions share one gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundClass {
    Clear,
    Clouds,
    Rain,
    Snow,
    Haze,
    /// Condition present but not in the table.
    Neutral,
    /// Nothing fetched yet.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    None,
    Sun,
    Clouds,
    Rain,
    Snow,
}

impl BackgroundClass {
    #[must_use]
    pub fn for_current(current: Option<&CurrentWeather>) -> Self {
        current.map_or(Self::Idle, |weather| background_for(&weather.condition_main))
    }

    #[must_use]
    pub fn animation(self) -> Animation {
        match self {
            Self::Clear => Animation::Sun,
            Self::Clouds | Self::Haze | Self::Idle => Animation::Clouds,
            Self::Rain => Animation::Rain,
            Self::Snow => Animation::Snow,
            Self::Neutral => Animation::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub icon: IconRef,
    pub background: BackgroundClass,
}

/// Maps a condition keyword to its icon and backdrop. Never fails.
#[must_use]
pub fn normalize(condition_main: &str) -> Presentation {
    Presentation {
        icon: ConditionKind::from_keyword(condition_main).icon(),
        background: background_for(condition_main),
    }
}

/// Background grouping is keyed on the lowercased keyword.
#[must_use]
pub fn background_for(condition_main: &str) -> BackgroundClass {
    match condition_main.to_lowercase().as_str() {
        "clear" => BackgroundClass::Clear,
        "clouds" => BackgroundClass::Clouds,
        "rain" | "drizzle" | "thunderstorm" => BackgroundClass::Rain,
        "snow" => BackgroundClass::Snow,
        "mist" | "fog" | "haze" | "smoke" | "ash" | "sand" | "dust" => BackgroundClass::Haze,
        _ => BackgroundClass::Neutral,
    }
}

#[must_use]
pub fn weather_icon(icon: IconRef, mode: IconMode) -> &'static str {
    let (ascii, emoji, unicode) = icon_tokens(icon);
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
        IconMode::Unicode => unicode,
    }
}

fn icon_tokens(icon: IconRef) -> (&'static str, &'static str, &'static str) {
    match icon {
        IconRef::Clear => ("SUN", "☀️", "☀"),
        IconRef::Clouds => ("CLD", "☁️", "☁"),
        IconRef::Rain => ("RAN", "🌧️", "☂"),
        IconRef::Drizzle => ("DRZ", "🌦️", "☔"),
        IconRef::Storm => ("THN", "⛈️", "⚡"),
        IconRef::Snow => ("SNW", "🌨️", "❄"),
        IconRef::Haze => ("FOG", "🌫️", "░"),
    }
}
