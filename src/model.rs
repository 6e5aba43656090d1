use serde::{Deserialize, Serialize};

/// One entry of a search result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image: String,
}

/// Recipe detail as delivered by the API, before any local processing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub url: String,
    pub ingredients: Vec<String>,
    pub servings: Option<u32>,
}

/// A structured ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Quantity, `None` when the line carries no number
    pub count: Option<f64>,
    /// Canonical short unit, empty when none was recognised
    pub unit: String,
    pub ingredient: String,
}

/// Identifier of a shopping list item
pub type ItemId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedRecipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
}
