pub mod health;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};

use crate::company::handlers::handle_company_data;
use crate::recipes::handlers::handle_recipe_finder;
use crate::state::AppState;
use crate::wardrobe::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/services", get(services::services_handler))
        // Company data
        .route("/api/v1/company-data", post(handle_company_data))
        // Recipe finder
        .route("/api/v1/recipe-finder", post(handle_recipe_finder))
        // Weather recommender
        .route(
            "/api/v1/weather-recommender",
            post(handlers::handle_weather_recommender),
        )
        .route(
            "/api/v1/wardrobe/options",
            get(handlers::handle_wardrobe_options),
        )
        .route("/api/v1/wardrobe/add", post(handlers::handle_wardrobe_add))
        .route(
            "/api/v1/wardrobe/remove",
            post(handlers::handle_wardrobe_remove),
        )
        .route(
            "/api/v1/wardrobe/recommend",
            post(handlers::handle_wardrobe_recommend),
        )
        .with_state(state)
}
