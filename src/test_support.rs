use std::sync::Arc;

use clap::Parser;

use crate::{
    app::{
        preferences::MemoryPreferenceStore,
        state::{AppState, Services},
    },
    cli::Cli,
    data::{geolocation::FixedGeolocator, openweather::WeatherClient},
    domain::weather::{Coordinates, CurrentWeather, RawForecastSample},
};

/// Nothing listens here; requests fail fast.
pub(crate) const UNROUTABLE_URL: &str = "http://127.0.0.1:1";

pub(crate) fn state_test_cli() -> Cli {
    Cli::parse_from(["weather-panel", "--no-animation", "--api-key", "test-key"])
}

pub(crate) fn paris_coords() -> Coordinates {
    Coordinates::new(48.8566, 2.3522).expect("valid coordinates fixture")
}

pub(crate) fn test_services() -> Services {
    Services {
        client: WeatherClient::with_base_url(UNROUTABLE_URL, "test-key"),
        geolocator: Arc::new(FixedGeolocator(paris_coords())),
        preferences: Box::new(MemoryPreferenceStore::default()),
    }
}

pub(crate) fn test_state() -> AppState {
    AppState::new(&state_test_cli(), test_services())
}

pub(crate) fn sample_current(name: &str, condition: &str) -> CurrentWeather {
    CurrentWeather {
        location_name: name.to_string(),
        condition_main: condition.to_string(),
        description: "light rain".to_string(),
        temperature_c: 11.6,
        humidity_pct: 81,
        wind_speed_ms: 4.1,
    }
}

/// Five days of 3-hourly samples starting at midnight on 2026-02-12.
pub(crate) fn sample_forecast() -> Vec<RawForecastSample> {
    (0..40)
        .map(|idx: i64| {
            let day = 12 + idx / 8;
            let hour = (idx % 8) * 3;
            RawForecastSample {
                dt: 1_770_854_400 + idx * 10_800,
                dt_txt: format!("2026-02-{day:02} {hour:02}:00:00"),
                temperature_c: 5.0,
                condition_main: "Clouds".to_string(),
                description: "broken clouds".to_string(),
            }
        })
        .collect()
}
