use std::{sync::Arc, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{
            AppEvent, SearchOutcome, frame_period, spawn_fetch_cycle, spawn_position_request,
            start_frame_task,
        },
        preferences::{PreferenceStore, default_store, read_dark_mode, write_dark_mode},
    },
    cli::{Cli, ColorArg, IconMode},
    data::{
        geolocation::{DeniedGeolocator, FixedGeolocator, Geolocator, IpGeolocator},
        openweather::WeatherClient,
    },
    domain::{
        errors::{FetchError, GeolocationError, LookupError},
        forecast::reduce_daily,
        weather::{BackgroundClass, Coordinates, CurrentWeather, ForecastEntry},
    },
    ui::particles::ParticleEngine,
};

mod input;
mod methods_async;
mod methods_fetch;

pub(crate) use input::is_city_char;

/// Phase of the most recently started or settled fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Error,
    Quit,
}

/// Everything the panel renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub query_city: String,
    pub current: Option<CurrentWeather>,
    pub forecast: Vec<ForecastEntry>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub dark_mode: bool,
}

impl ViewState {
    #[must_use]
    pub fn background(&self) -> BackgroundClass {
        BackgroundClass::for_current(self.current.as_ref())
    }
}

/// Collaborators injected into the controller at startup.
#[derive(Debug)]
pub struct Services {
    pub client: WeatherClient,
    pub geolocator: Arc<dyn Geolocator>,
    pub preferences: Box<dyn PreferenceStore>,
}

impl Services {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let geolocator: Arc<dyn Geolocator> = if cli.no_locate {
            Arc::new(DeniedGeolocator)
        } else if let Some(coords) = cli
            .lat
            .zip(cli.lon)
            .and_then(|(lat, lon)| Coordinates::new(lat, lon))
        {
            Arc::new(FixedGeolocator(coords))
        } else {
            Arc::new(IpGeolocator::default())
        };

        Self {
            client: WeatherClient::with_base_url(cli.api_url.clone(), cli.api_key.clone()),
            geolocator,
            preferences: default_store(),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub view: ViewState,
    pub pending_cycles: usize,
    pub particles: ParticleEngine,
    pub last_frame_at: Instant,
    pub frame_tick: u64,
    pub icon_mode: IconMode,
    pub color_mode: ColorArg,
    client: WeatherClient,
    geolocator: Arc<dyn Geolocator>,
    preferences: Box<dyn PreferenceStore>,
}

impl AppState {
    pub fn new(cli: &Cli, services: Services) -> Self {
        let Services {
            client,
            geolocator,
            preferences,
        } = services;
        let dark_mode = cli
            .dark_mode_override()
            .unwrap_or_else(|| read_dark_mode(preferences.as_ref()));

        Self {
            mode: AppMode::Idle,
            running: true,
            view: ViewState {
                dark_mode,
                ..ViewState::default()
            },
            pending_cycles: 0,
            particles: ParticleEngine::new(cli.no_animation),
            last_frame_at: Instant::now(),
            frame_tick: 0,
            icon_mode: cli.icon_mode(),
            color_mode: cli.effective_color_mode(),
            client,
            geolocator,
            preferences,
        }
    }

    #[must_use]
    pub fn preferences(&self) -> &dyn PreferenceStore {
        self.preferences.as_ref()
    }

    /// Flips the theme and writes it through to the preference store.
    pub fn toggle_dark_mode(&mut self) {
        self.view.dark_mode = !self.view.dark_mode;
        if let Err(err) = write_dark_mode(self.preferences.as_mut(), self.view.dark_mode) {
            tracing::warn!(error = %err, "persisting dark mode failed");
        }
    }
}
