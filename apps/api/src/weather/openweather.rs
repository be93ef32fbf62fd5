use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::upstream::{read_json, UpstreamError};
use crate::weather::{CurrentWeather, WeatherProvider};

const OPENWEATHER_BASE_URL: &str = "http://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// OpenWeatherMap current-weather client. Always requests metric units.
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self::with_base_url(client, api_key, OPENWEATHER_BASE_URL.to_string())
    }

    pub fn with_base_url(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, location: &str) -> Result<CurrentWeather, UpstreamError> {
        let response = self
            .client
            .get(format!("{}{CURRENT_WEATHER_PATH}", self.base_url))
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let weather: CurrentWeather = read_json(response).await?;

        debug!(
            "OpenWeather reading for '{}': {}°C",
            location, weather.main.temp
        );

        Ok(weather)
    }
}
