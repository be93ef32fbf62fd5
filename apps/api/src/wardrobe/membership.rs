//! Wardrobe collection with set semantics on `(type, temperatureRange, formality)`.
//!
//! The server never stores a wardrobe: the client sends it with every request and
//! gets the updated value back. Operations return new values and leave `self` intact.

use serde::{Deserialize, Serialize};

use crate::wardrobe::models::WardrobeItem;

/// Ordered, duplicate-free list of wardrobe items.
///
/// Deserialization goes through [`Wardrobe::from_items`], so a payload carrying the
/// same item twice keeps only the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<WardrobeItem>", into = "Vec<WardrobeItem>")]
pub struct Wardrobe {
    items: Vec<WardrobeItem>,
}

impl Wardrobe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a wardrobe by adding each item in turn.
    pub fn from_items(items: impl IntoIterator<Item = WardrobeItem>) -> Self {
        items
            .into_iter()
            .fold(Self::new(), |wardrobe, item| wardrobe.add(item))
    }

    pub fn items(&self) -> &[WardrobeItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, item: &WardrobeItem) -> bool {
        self.items.contains(item)
    }

    /// Returns a wardrobe with `item` appended, or an unchanged copy if an equal
    /// item is already present.
    #[must_use]
    pub fn add(&self, item: WardrobeItem) -> Self {
        if self.contains(&item) {
            return self.clone();
        }
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// Returns a wardrobe without any item equal to `item`.
    #[must_use]
    pub fn remove(&self, item: &WardrobeItem) -> Self {
        Self {
            items: self.items.iter().filter(|i| *i != item).cloned().collect(),
        }
    }
}

impl From<Vec<WardrobeItem>> for Wardrobe {
    fn from(items: Vec<WardrobeItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<Wardrobe> for Vec<WardrobeItem> {
    fn from(wardrobe: Wardrobe) -> Self {
        wardrobe.items
    }
}
