use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

use crate::domain::{
    errors::{CITY_NOT_FOUND, FetchError},
    weather::{Coordinates, CurrentWeather, RawForecastSample},
};

pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Thin client over the `/weather` and `/forecast` endpoints.
///
/// Units are fixed to metric. No retries, no caching.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    /// `None` when the TLS backend could not be initialised; every request then fails.
    client: Option<Client>,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_API_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: build_http_client(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub async fn fetch_current_by_coordinates(
        &self,
        coords: Coordinates,
    ) -> Result<CurrentWeather, FetchError> {
        let payload: CurrentResponse = self
            .get_json(
                "weather",
                &[
                    ("lat", coords.latitude.to_string()),
                    ("lon", coords.longitude.to_string()),
                ],
            )
            .await?;
        Ok(payload.into_current())
    }

    pub async fn fetch_current_by_city(&self, city: &str) -> Result<CurrentWeather, FetchError> {
        let payload: CurrentResponse = self.get_json("weather", &[("q", city.to_string())]).await?;
        Ok(payload.into_current())
    }

    pub async fn fetch_forecast_by_city(
        &self,
        city: &str,
    ) -> Result<Vec<RawForecastSample>, FetchError> {
        let payload: ForecastResponse =
            self.get_json("forecast", &[("q", city.to_string())]).await?;
        Ok(payload.into_samples())
    }

    /// Runs both city lookups concurrently; either failure fails the pair.
    ///
    /// The current-conditions error wins; a rejected forecast alone reads as "City not found".
    pub async fn search(
        &self,
        city: &str,
    ) -> Result<(CurrentWeather, Vec<RawForecastSample>), FetchError> {
        let (current, forecast) = tokio::join!(
            self.fetch_current_by_city(city),
            self.fetch_forecast_by_city(city)
        );
        match (current, forecast) {
            (Ok(current), Ok(forecast)) => Ok((current, forecast)),
            (Err(err), _) => Err(err),
            // Only the current-conditions body carries the user-facing message.
            (Ok(_), Err(FetchError::NotFound(_))) => {
                Err(FetchError::NotFound(CITY_NOT_FOUND.to_string()))
            }
            (Ok(_), Err(err)) => Err(err),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{endpoint}", self.base_url);
        tracing::debug!(endpoint, "dispatching provider request");

        let client = self.client.as_ref().ok_or_else(|| FetchError::RequestFailed {
            detail: "http client unavailable".to_string(),
        })?;
        let response = client
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|err| request_failed(endpoint, &err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| request_failed(endpoint, &err))?;

        if !status.is_success() {
            let message = provider_message(&body).unwrap_or_else(|| CITY_NOT_FOUND.to_string());
            tracing::warn!(endpoint, status = status.as_u16(), %message, "provider rejected request");
            return Err(FetchError::NotFound(message));
        }

        serde_json::from_str(&body).map_err(|err| request_failed(endpoint, &err))
    }
}

fn build_http_client() -> Option<Client> {
    Client::builder()
        .build()
        .map_err(|err| tracing::error!(error = %err, "building http client failed"))
        .ok()
}

fn request_failed(endpoint: &str, err: &dyn std::error::Error) -> FetchError {
    tracing::warn!(endpoint, error = %err, "provider request failed");
    FetchError::RequestFailed {
        detail: err.to_string(),
    }
}

/// Error bodies look like `{"cod":"404","message":"city not found"}`.
fn provider_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|payload| payload.message)
        .filter(|message| !message.trim().is_empty())
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConditionBlock {
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    main: CurrentMain,
    wind: WindBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentMain {
    temp: f32,
    humidity: f32,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f32,
}

impl CurrentResponse {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn into_current(self) -> CurrentWeather {
        let condition = self.weather.into_iter().next().unwrap_or_default();
        CurrentWeather {
            location_name: self.name,
            condition_main: condition.main,
            description: condition.description,
            temperature_c: self.main.temp,
            humidity_pct: self.main.humidity.round().clamp(0.0, 100.0) as u8,
            wind_speed_ms: self.wind.speed.max(0.0),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: i64,
    dt_txt: String,
    main: ForecastMain,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f32,
}

impl ForecastResponse {
    fn into_samples(self) -> Vec<RawForecastSample> {
        self.list
            .into_iter()
            .map(|item| {
                let condition = item.weather.into_iter().next().unwrap_or_default();
                RawForecastSample {
                    dt: item.dt,
                    dt_txt: item.dt_txt,
                    temperature_c: item.main.temp,
                    condition_main: condition.main,
                    description: condition.description,
                }
            })
            .collect()
    }
}
