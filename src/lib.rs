pub mod api;
pub mod builder;
pub mod config;
pub mod controller;
pub mod error;
pub mod ingredient;
pub mod intent;
pub mod likes;
pub mod list;
pub mod model;
pub mod recipe;
pub mod search;
pub mod storage;
pub mod view;

// Re-export main types for convenience
pub use api::{ForkifyApi, RecipeApi};
pub use builder::AppBuilder;
pub use config::AppConfig;
pub use controller::{App, AppState};
pub use error::AppError;
pub use intent::Intent;
pub use likes::Likes;
pub use list::ShoppingList;
pub use model::{Ingredient, LikedRecipe, RecipeSummary, ShoppingItem};
pub use recipe::{Recipe, Servings};
pub use search::Search;
pub use storage::{FileStore, MemoryStore, Store};
pub use view::{RecordingView, TerminalView, View};

/// Search recipes using configuration from `recipe-box.toml` and the environment
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_box::AppError> {
/// let results = recipe_box::search_recipes("pizza").await?;
/// for r in results {
///     println!("{} {}", r.id, r.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(query: &str) -> Result<Vec<RecipeSummary>, AppError> {
    let config = AppConfig::load()?;
    search_recipes_with_config(query, &config).await
}

pub async fn search_recipes_with_config(
    query: &str,
    config: &AppConfig,
) -> Result<Vec<RecipeSummary>, AppError> {
    let api = ForkifyApi::new(&config.api)?;
    let mut search = Search::new(query);
    search.get_results(&api).await?;
    Ok(search.result)
}

/// Fetch a recipe with parsed ingredients, cooking time and servings filled in
pub async fn fetch_recipe(id: &str) -> Result<Recipe, AppError> {
    let config = AppConfig::load()?;
    fetch_recipe_with_config(id, &config).await
}

pub async fn fetch_recipe_with_config(id: &str, config: &AppConfig) -> Result<Recipe, AppError> {
    let api = ForkifyApi::new(&config.api)?;
    let mut recipe = Recipe::new(id);
    recipe.get_recipe(&api).await?;
    recipe.parse_ingredients();
    recipe.calc_time();
    recipe.calc_servings(config.recipe.default_servings);
    Ok(recipe)
}
