use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::{errors::GeolocationError, weather::Coordinates};

pub const IP_LOOKUP_URL: &str = "https://ipapi.co/json/";
pub const IP_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// One-shot source of the user's position.
#[async_trait]
pub trait Geolocator: Send + Sync + std::fmt::Debug {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Position supplied up front (`--lat`/`--lon`).
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator(pub Coordinates);

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Ok(self.0)
    }
}

/// The user declined location access (`--no-locate`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedGeolocator;

#[async_trait]
impl Geolocator for DeniedGeolocator {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::Denied)
    }
}

/// Approximate position from the public IP address.
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    client: Option<Client>,
    url: String,
}

impl Default for IpGeolocator {
    fn default() -> Self {
        Self::with_url(IP_LOOKUP_URL)
    }
}

impl IpGeolocator {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::with_timeout(url, IP_LOOKUP_TIMEOUT)
    }

    /// A stalled lookup settles as `Unsupported` once `timeout` elapses.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| tracing::error!(error = %err, "building geolocation client failed"))
            .ok();
        Self {
            client,
            url: url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        let Some(client) = self.client.as_ref() else {
            return Err(GeolocationError::Unsupported);
        };
        let response = client.get(&self.url).send().await.map_err(|err| {
            tracing::warn!(error = %err, "ip geolocation request failed");
            GeolocationError::Unsupported
        })?;
        let payload: IpApiResponse = response.json().await.map_err(|err| {
            tracing::warn!(error = %err, "ip geolocation payload unreadable");
            GeolocationError::Unsupported
        })?;
        match (payload.latitude, payload.longitude) {
            (Some(lat), Some(lon)) => {
                Coordinates::new(lat, lon).ok_or(GeolocationError::Unsupported)
            }
            _ => Err(GeolocationError::Unsupported),
        }
    }
}
