#![allow(dead_code)]

use std::sync::Arc;

use clap::Parser;
use serde_json::{Value, json};
use weather_panel::{
    app::{
        preferences::MemoryPreferenceStore,
        state::{AppState, Services},
    },
    cli::Cli,
    data::{
        geolocation::{DeniedGeolocator, FixedGeolocator, Geolocator},
        openweather::WeatherClient,
    },
    domain::weather::{Coordinates, CurrentWeather, RawForecastSample},
};

pub fn test_cli(args: &[&str]) -> Cli {
    let mut argv = vec!["weather-panel", "--no-animation", "--api-key", "test-key"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

pub fn paris() -> Coordinates {
    Coordinates::new(48.8566, 2.3522).expect("valid coordinates")
}

pub fn services(base_url: &str, geolocator: Arc<dyn Geolocator>) -> Services {
    Services {
        client: WeatherClient::with_base_url(base_url, "test-key"),
        geolocator,
        preferences: Box::new(MemoryPreferenceStore::default()),
    }
}

pub fn located_state(base_url: &str, cli: &Cli) -> AppState {
    AppState::new(cli, services(base_url, Arc::new(FixedGeolocator(paris()))))
}

pub fn denied_state(base_url: &str, cli: &Cli) -> AppState {
    AppState::new(cli, services(base_url, Arc::new(DeniedGeolocator)))
}

pub fn current_body(name: &str, main: &str, description: &str, temp: f32) -> Value {
    json!({
        "name": name,
        "weather": [{ "main": main, "description": description }],
        "main": { "temp": temp, "humidity": 81 },
        "wind": { "speed": 4.1 }
    })
}

/// Five days of 3-hourly entries starting at midnight on 2026-02-12.
pub fn forecast_body() -> Value {
    let list: Vec<Value> = (0..40)
        .map(|idx: i64| {
            let day = 12 + idx / 8;
            let hour = (idx % 8) * 3;
            json!({
                "dt": 1_770_854_400 + idx * 10_800,
                "dt_txt": format!("2026-02-{day:02} {hour:02}:00:00"),
                "main": { "temp": 4.0 + (hour as f64) / 3.0 },
                "weather": [{ "main": "Clouds", "description": "broken clouds" }]
            })
        })
        .collect();
    json!({ "cod": "200", "list": list })
}

pub fn current_weather(name: &str, condition: &str) -> CurrentWeather {
    CurrentWeather {
        location_name: name.to_string(),
        condition_main: condition.to_string(),
        description: "light rain".to_string(),
        temperature_c: 11.6,
        humidity_pct: 81,
        wind_speed_ms: 4.1,
    }
}

pub fn raw_samples() -> Vec<RawForecastSample> {
    (0..40)
        .map(|idx: i64| {
            let day = 12 + idx / 8;
            let hour = (idx % 8) * 3;
            RawForecastSample {
                dt: 1_770_854_400 + idx * 10_800,
                dt_txt: format!("2026-02-{day:02} {hour:02}:00:00"),
                temperature_c: 5.0,
                condition_main: "Snow".to_string(),
                description: "light snow".to_string(),
            }
        })
        .collect()
}
