mod company;
mod config;
mod errors;
mod llm_client;
mod recipes;
mod routes;
mod state;
mod upstream;
mod wardrobe;
mod weather;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::company::google_search::GoogleSearchClient;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::recipes::spoonacular::SpoonacularClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::upstream::build_http_client;
use crate::weather::openweather::OpenWeatherClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting demo-hub API v{}", env!("CARGO_PKG_VERSION"));

    // One pooled HTTP client shared by every upstream
    let http = build_http_client()?;

    let weather = OpenWeatherClient::new(http.clone(), config.weather_api_key.clone());
    let recipes = SpoonacularClient::new(http.clone(), config.spoonacular_api_key.clone());
    let search = GoogleSearchClient::new(
        http.clone(),
        config.google_search_api_key.clone(),
        config.google_search_engine_id.clone(),
    );
    let llm = LlmClient::new(http, config.gemini_api_key.clone());
    info!("Upstream clients initialized (LLM model: {})", llm_client::MODEL);

    let state = AppState {
        weather: Arc::new(weather),
        recipes: Arc::new(recipes),
        search: Arc::new(search),
        llm: Arc::new(llm),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // front end is served from a separate origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
