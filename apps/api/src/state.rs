use std::sync::Arc;

use crate::company::NewsSearch;
use crate::llm_client::TextGenerator;
use crate::recipes::RecipeProvider;
use crate::weather::WeatherProvider;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every upstream sits behind a trait object so the concrete client can be swapped
/// (tests use in-memory stubs).
#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<dyn WeatherProvider>,
    pub recipes: Arc<dyn RecipeProvider>,
    pub search: Arc<dyn NewsSearch>,
    pub llm: Arc<dyn TextGenerator>,
}
