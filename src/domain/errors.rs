use thiserror::Error;

pub const CITY_NOT_FOUND: &str = "City not found";

/// Failure of a single provider request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-success status; carries the provider's `message` or a generic fallback.
    #[error("{0}")]
    NotFound(String),
    /// Transport or decode failure.
    #[error("request failed")]
    RequestFailed { detail: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("location access denied")]
    Denied,
    #[error("location detection unsupported")]
    Unsupported,
}

/// Everything a fetch cycle can surface to the user. `Display` is the banner text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Please allow location access.")]
    GeolocationDenied,
    #[error("Location detection is not supported here.")]
    GeolocationUnsupported,
    #[error("{0}")]
    FetchFailed(String),
    #[error("{0}")]
    CityNotFound(String),
}

impl From<GeolocationError> for LookupError {
    fn from(err: GeolocationError) -> Self {
        match err {
            GeolocationError::Denied => Self::GeolocationDenied,
            GeolocationError::Unsupported => Self::GeolocationUnsupported,
        }
    }
}

impl LookupError {
    /// Search cycles show the provider's message for bad lookups.
    #[must_use]
    pub fn from_search(err: &FetchError) -> Self {
        match err {
            FetchError::NotFound(message) => Self::CityNotFound(message.clone()),
            FetchError::RequestFailed { .. } => Self::FetchFailed("Something went wrong".into()),
        }
    }

    /// Location cycles collapse provider errors into fixed wording.
    #[must_use]
    pub fn from_location_fetch(err: &FetchError) -> Self {
        match err {
            FetchError::NotFound(_) => Self::FetchFailed("Unable to fetch location weather".into()),
            FetchError::RequestFailed { .. } => {
                Self::FetchFailed("Geolocation weather fetch failed".into())
            }
        }
    }
}
