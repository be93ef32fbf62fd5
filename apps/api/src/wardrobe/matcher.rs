//! Wardrobe matcher — selects the garments whose temperature range covers a reading.
//!
//! Each item is judged on its own label:
//! - `"30+"` matches when the temperature is strictly above 30.
//! - `"<low>-<high>"` matches when `low < temperature < high`.
//!   A reading sitting exactly on a boundary matches neither neighbouring range.
//! - Any other label never matches. Malformed labels never fail the whole call.

use crate::wardrobe::models::WardrobeItem;

/// Returns the items suitable for `temperature`, preserving input order.
pub fn recommend(temperature: f64, wardrobe: &[WardrobeItem]) -> Vec<WardrobeItem> {
    wardrobe
        .iter()
        .filter(|item| matches_temperature(item, temperature))
        .cloned()
        .collect()
}

/// True when the item's range label is satisfied by `temperature`.
pub fn matches_temperature(item: &WardrobeItem, temperature: f64) -> bool {
    item.temperature_range
        .band()
        .is_some_and(|band| band.contains(temperature))
}
