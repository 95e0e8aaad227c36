use std::fmt::Write as _;

use crate::{
    cli::IconMode,
    domain::weather::{CurrentWeather, ForecastEntry, capitalize_words, weather_icon},
};

/// Plain-text rendering of the current card and forecast strip for `--one-shot`.
#[must_use]
pub fn plain_report(
    current: &CurrentWeather,
    forecast: &[ForecastEntry],
    icon_mode: IconMode,
) -> String {
    let mut out = String::new();
    let icon = weather_icon(current.presentation().icon, icon_mode);
    let _ = writeln!(out, "{}", current.location_name);
    let _ = writeln!(
        out,
        "{icon} {}  {}°C",
        capitalize_words(&current.description),
        current.rounded_temp()
    );
    let _ = writeln!(
        out,
        "Humidity: {}%  Wind: {} m/s",
        current.humidity_pct, current.wind_speed_ms
    );

    if !forecast.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "5-Day Forecast");
        for entry in forecast {
            let icon = weather_icon(entry.presentation().icon, icon_mode);
            let _ = writeln!(
                out,
                "{:<4}{icon} {:>4}°C  {}",
                entry.weekday_label(),
                entry.rounded_temp(),
                capitalize_words(&entry.description)
            );
        }
    }
    out
}
