use chrono::NaiveDateTime;

mod conditions;
mod conversions;

pub use conditions::{
    Animation, BackgroundClass, ConditionKind, IconRef, Presentation, background_for, normalize,
    weather_icon,
};
pub use conversions::{capitalize_words, parse_forecast_time, round_temp};

/// A position on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Returns `None` when either component is outside its valid range or not finite.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        (lat_ok && lon_ok).then_some(Self {
            latitude,
            longitude,
        })
    }
}

/// Snapshot of the conditions reported by the `/weather` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub location_name: String,
    pub condition_main: String,
    pub description: String,
    pub temperature_c: f32,
    pub humidity_pct: u8,
    pub wind_speed_ms: f32,
}

impl CurrentWeather {
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        normalize(&self.condition_main)
    }

    #[must_use]
    pub fn rounded_temp(&self) -> i32 {
        round_temp(self.temperature_c)
    }
}

/// One 3-hour step of the `/forecast` time series, before daily reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct RawForecastSample {
    pub dt: i64,
    pub dt_txt: String,
    pub temperature_c: f32,
    pub condition_main: String,
    pub description: String,
}

/// Daily representative sample, taken at local noon.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub timestamp_local_noon: NaiveDateTime,
    pub condition_main: String,
    pub description: String,
    pub temperature_c: f32,
}

impl ForecastEntry {
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        normalize(&self.condition_main)
    }

    #[must_use]
    pub fn weekday_label(&self) -> String {
        self.timestamp_local_noon.format("%a").to_string()
    }

    #[must_use]
    pub fn rounded_temp(&self) -> i32 {
        round_temp(self.temperature_c)
    }
}
