//! Current-weather lookup. Only the temperature feeds the wardrobe matcher;
//! the rest of the payload is passed through for display.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::upstream::UpstreamError;

pub mod openweather;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

/// The `main` block of the current-weather payload. Units are metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: f64,
    pub humidity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sea_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grnd_level: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub coord: Coordinates,
    pub main: MainReadings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: f64,
}

impl CurrentWeather {
    pub fn reading(&self) -> WeatherReading {
        WeatherReading {
            temperature: self.main.temp,
        }
    }
}

/// Source of current conditions for a free-text location.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, location: &str) -> Result<CurrentWeather, UpstreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 803, "main": "Clouds"}],
        "main": {
            "temp": 14.2,
            "feels_like": 13.6,
            "temp_min": 12.9,
            "temp_max": 15.3,
            "pressure": 1012,
            "humidity": 77,
            "sea_level": 1012,
            "grnd_level": 1008
        },
        "name": "London"
    }"#;

    #[test]
    fn test_current_weather_deserializes_and_ignores_extra_fields() {
        let weather: CurrentWeather = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(weather.name.as_deref(), Some("London"));
        assert!((weather.main.humidity - 77.0).abs() < f64::EPSILON);
        assert_eq!(weather.main.grnd_level, Some(1008.0));
    }

    #[test]
    fn test_reading_uses_main_temp() {
        let weather: CurrentWeather = serde_json::from_str(PAYLOAD).unwrap();
        assert!((weather.reading().temperature - 14.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sea_level_is_optional() {
        let json = r#"{
            "coord": {"lon": 0.0, "lat": 0.0},
            "main": {"temp": -4.0, "feels_like": -9.0, "temp_min": -5.0,
                     "temp_max": -3.0, "pressure": 1030, "humidity": 60}
        }"#;
        let weather: CurrentWeather = serde_json::from_str(json).unwrap();
        assert!(weather.main.sea_level.is_none());
        assert!(weather.name.is_none());
    }
}
