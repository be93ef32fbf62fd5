use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::recipes::{RecipeMatch, RecipeProvider};
use crate::upstream::{read_json, UpstreamError};

const FIND_BY_INGREDIENTS_URL: &str = "https://api.spoonacular.com/recipes/findByIngredients";

#[derive(Clone)]
pub struct SpoonacularClient {
    client: Client,
    api_key: String,
}

impl SpoonacularClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    async fn find_by_ingredients(
        &self,
        ingredients: &str,
    ) -> Result<Vec<RecipeMatch>, UpstreamError> {
        let response = self
            .client
            .get(FIND_BY_INGREDIENTS_URL)
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("ingredients", ingredients),
            ])
            .send()
            .await?;

        let matches: Vec<RecipeMatch> = read_json(response).await?;
        debug!("Spoonacular returned {} recipes", matches.len());

        Ok(matches)
    }
}
