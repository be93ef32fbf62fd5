//! In-memory providers for handler tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::company::{NewsSearch, SearchResult};
use crate::llm_client::TextGenerator;
use crate::recipes::{RecipeMatch, RecipeProvider};
use crate::state::AppState;
use crate::upstream::UpstreamError;
use crate::weather::{Coordinates, CurrentWeather, MainReadings, WeatherProvider};

fn api_error(status: u16, message: &str) -> UpstreamError {
    UpstreamError::Api {
        status,
        message: message.to_string(),
    }
}

pub enum StubWeather {
    Reading(f64),
    Status(u16),
}

impl StubWeather {
    pub fn reading(temperature: f64) -> Self {
        Self::Reading(temperature)
    }

    /// Fails every lookup with the given upstream status.
    pub fn status(status: u16) -> Self {
        Self::Status(status)
    }
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn current(&self, location: &str) -> Result<CurrentWeather, UpstreamError> {
        let temp = match *self {
            StubWeather::Reading(temp) => temp,
            StubWeather::Status(status) => return Err(api_error(status, "city not found")),
        };
        Ok(CurrentWeather {
            coord: Coordinates { lon: 10.75, lat: 59.91 },
            main: MainReadings {
                temp,
                feels_like: temp - 1.0,
                temp_min: temp - 2.0,
                temp_max: temp + 2.0,
                pressure: 1015.0,
                humidity: 70.0,
                sea_level: None,
                grnd_level: None,
            },
            name: Some(location.to_string()),
        })
    }
}

pub struct StubRecipes(bool);

impl StubRecipes {
    pub fn failing() -> Self {
        Self(false)
    }
}

fn recipe(id: i64, used: u32) -> RecipeMatch {
    RecipeMatch {
        id,
        title: format!("Recipe {id}"),
        image: None,
        used_ingredient_count: used,
        missed_ingredient_count: 1,
        used_ingredients: vec![],
        missed_ingredients: vec![],
    }
}

#[async_trait]
impl RecipeProvider for StubRecipes {
    async fn find_by_ingredients(
        &self,
        _ingredients: &str,
    ) -> Result<Vec<RecipeMatch>, UpstreamError> {
        if !self.0 {
            return Err(api_error(402, "daily points limit reached"));
        }
        Ok(vec![recipe(1, 3), recipe(2, 1), recipe(3, 2)])
    }
}

pub struct StubSearch(bool);

impl StubSearch {
    pub fn failing() -> Self {
        Self(false)
    }
}

#[async_trait]
impl NewsSearch for StubSearch {
    async fn company_news(&self, _company: &str) -> Result<Vec<SearchResult>, UpstreamError> {
        if !self.0 {
            return Err(api_error(403, "quota exceeded"));
        }
        Ok(vec![
            SearchResult {
                title: "Acme raises Series B".to_string(),
                link: "https://news.example/acme-b".to_string(),
                snippet: "Acme closed a round...".to_string(),
            },
            SearchResult {
                title: "Acme opens Berlin office".to_string(),
                link: "https://news.example/acme-berlin".to_string(),
                snippet: String::new(),
            },
        ])
    }
}

/// Answers with whatever follows the data separator in the prompt.
pub struct EchoLlm;

#[async_trait]
impl TextGenerator for EchoLlm {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        prompt
            .rsplit("given the data., ")
            .next()
            .map(str::to_string)
            .ok_or(UpstreamError::EmptyContent)
    }
}

/// Every generation call fails as if the model kept returning 503.
pub struct FailingLlm;

#[async_trait]
impl TextGenerator for FailingLlm {
    async fn generate(&self, _prompt: &str) -> Result<String, UpstreamError> {
        Err(UpstreamError::RateLimited { retries: 3 })
    }
}

pub fn stub_state() -> AppState {
    AppState {
        weather: Arc::new(StubWeather::reading(15.0)),
        recipes: Arc::new(StubRecipes(true)),
        search: Arc::new(StubSearch(true)),
        llm: Arc::new(EchoLlm),
    }
}
