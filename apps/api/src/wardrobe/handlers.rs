//! Axum route handlers for the wardrobe recommender.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::upstream::UpstreamError;
use crate::wardrobe::matcher::recommend;
use crate::wardrobe::membership::Wardrobe;
use crate::wardrobe::models::{Formality, GarmentType, TemperatureRange, WardrobeItem};
use crate::weather::{CurrentWeather, WeatherReading};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MembershipRequest {
    #[serde(default)]
    pub wardrobe: Wardrobe,
    pub item: WardrobeItem,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub temperature: f64,
    #[serde(default)]
    pub wardrobe: Wardrobe,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommended_outfits: Vec<WardrobeItem>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherRecommendRequest {
    pub location: String,
    #[serde(default)]
    pub wardrobe: Wardrobe,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherRecommendResponse {
    pub weather: CurrentWeather,
    pub reading: WeatherReading,
    pub recommended_outfits: Vec<WardrobeItem>,
    pub fetched_at: DateTime<Utc>,
}

/// Choices offered by the add-item form.
#[derive(Debug, Serialize, Deserialize)]
pub struct WardrobeOptions {
    pub types: Vec<GarmentType>,
    pub temperature_ranges: Vec<TemperatureRange>,
    pub formalities: Vec<Formality>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/wardrobe/options
pub async fn handle_wardrobe_options() -> Json<WardrobeOptions> {
    Json(WardrobeOptions {
        types: GarmentType::ALL.to_vec(),
        temperature_ranges: TemperatureRange::PRESETS
            .iter()
            .map(|&label| TemperatureRange::new(label))
            .collect(),
        formalities: Formality::ALL.to_vec(),
    })
}

/// POST /api/v1/wardrobe/add
///
/// Returns the wardrobe with the item appended; unchanged if it was already present.
pub async fn handle_wardrobe_add(Json(request): Json<MembershipRequest>) -> Json<Wardrobe> {
    Json(request.wardrobe.add(request.item))
}

/// POST /api/v1/wardrobe/remove
pub async fn handle_wardrobe_remove(Json(request): Json<MembershipRequest>) -> Json<Wardrobe> {
    Json(request.wardrobe.remove(&request.item))
}

/// POST /api/v1/wardrobe/recommend
///
/// Runs the matcher against a caller-supplied temperature. No upstream call.
pub async fn handle_wardrobe_recommend(
    Json(request): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    Json(RecommendResponse {
        recommended_outfits: recommend(request.temperature, request.wardrobe.items()),
    })
}

/// POST /api/v1/weather-recommender
///
/// Fetches current weather for the location and recommends the wardrobe items
/// whose temperature range covers the reading. An unknown location is a 404.
pub async fn handle_weather_recommender(
    State(state): State<AppState>,
    Json(request): Json<WeatherRecommendRequest>,
) -> Result<Json<WeatherRecommendResponse>, AppError> {
    let location = request.location.trim();
    if location.is_empty() {
        return Err(AppError::Validation("location cannot be empty".to_string()));
    }

    let weather = state
        .weather
        .current(location)
        .await
        .map_err(|e| match e {
            UpstreamError::Api { status: 404, .. } => {
                AppError::NotFound(format!("Location '{location}' not found"))
            }
            e => AppError::Upstream(format!("Weather lookup failed: {e}")),
        })?;

    let reading = weather.reading();
    let recommended_outfits = recommend(reading.temperature, request.wardrobe.items());

    info!(
        "Weather recommender for '{}': {}°C, {}/{} items recommended",
        location,
        reading.temperature,
        recommended_outfits.len(),
        request.wardrobe.len()
    );

    Ok(Json(WeatherRecommendResponse {
        weather,
        reading,
        recommended_outfits,
        fetched_at: Utc::now(),
    }))
}
