pub mod geolocation;
pub mod openweather;
