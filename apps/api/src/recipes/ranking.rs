use crate::recipes::RecipeMatch;

/// Orders matches by `used_ingredient_count`, fewest first. Ties keep upstream order.
pub fn rank_by_used_ingredients(mut matches: Vec<RecipeMatch>) -> Vec<RecipeMatch> {
    matches.sort_by_key(|m| m.used_ingredient_count);
    matches
}
