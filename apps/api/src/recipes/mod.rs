// Recipe finder: ingredient list -> Spoonacular findByIngredients -> ranked matches.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::upstream::UpstreamError;

pub mod handlers;
pub mod ranking;
pub mod spoonacular;

/// An ingredient as reported against a recipe match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// One recipe returned for an ingredient search. Field names follow the upstream payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    pub used_ingredient_count: u32,
    pub missed_ingredient_count: u32,
    #[serde(default)]
    pub used_ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub missed_ingredients: Vec<RecipeIngredient>,
}

#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// `ingredients` is the comma-separated list exactly as the user typed it.
    async fn find_by_ingredients(&self, ingredients: &str)
        -> Result<Vec<RecipeMatch>, UpstreamError>;
}
