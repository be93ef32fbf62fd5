use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::recipes::ranking::rank_by_used_ingredients;
use crate::recipes::RecipeMatch;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecipeFinderRequest {
    /// Comma-separated, e.g. `"apples,flour,sugar"`.
    pub ingredients: String,
}

/// POST /api/v1/recipe-finder
pub async fn handle_recipe_finder(
    State(state): State<AppState>,
    Json(request): Json<RecipeFinderRequest>,
) -> Result<Json<Vec<RecipeMatch>>, AppError> {
    let ingredients = request.ingredients.trim();
    if ingredients.is_empty() {
        return Err(AppError::Validation(
            "ingredients cannot be empty".to_string(),
        ));
    }

    let matches = state
        .recipes
        .find_by_ingredients(ingredients)
        .await
        .map_err(|e| AppError::Upstream(format!("Recipe search failed: {e}")))?;

    info!("Recipe finder: {} matches for '{}'", matches.len(), ingredients);

    Ok(Json(rank_by_used_ingredients(matches)))
}
