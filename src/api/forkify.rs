use crate::api::RecipeApi;
use crate::config::ApiConfig;
use crate::model::{RecipeDetail, RecipeSummary};
use crate::AppError;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// HTTP client for the Forkify recipe API
pub struct ForkifyApi {
    client: Client,
    base_url: String,
}

impl ForkifyApi {
    /// Create a new client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("recipe-box/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ForkifyApi {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    recipes: Vec<WireSummary>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireSummary {
    recipe_id: WireId,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    recipe: Option<WireRecipe>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireRecipe {
    recipe_id: WireId,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    ingredients: Vec<String>,
    servings: Option<u32>,
}

/// Ids come back as strings from some deployments and as numbers from others
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(s) => s,
            WireId::Number(n) => n.to_string(),
        }
    }
}

impl From<WireSummary> for RecipeSummary {
    fn from(w: WireSummary) -> Self {
        RecipeSummary {
            id: w.recipe_id.into(),
            title: w.title,
            publisher: w.publisher,
            image: w.image_url,
        }
    }
}

impl From<WireRecipe> for RecipeDetail {
    fn from(w: WireRecipe) -> Self {
        RecipeDetail {
            id: w.recipe_id.into(),
            title: w.title,
            author: w.publisher,
            image: w.image_url,
            url: w.source_url,
            ingredients: w.ingredients,
            servings: w.servings,
        }
    }
}

#[async_trait]
impl RecipeApi for ForkifyApi {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, AppError> {
        let url = format!("{}/api/search", self.base_url);
        debug!("Searching recipes for {:?}", query);

        let response = self.client.get(&url).query(&[("q", query)]).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Search for {:?} failed with status {}", query, status);
            return Err(AppError::ApiError(format!("search returned status {}", status)));
        }

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| AppError::ApiError(e.to_string()))?;
        if let Some(error) = parsed.error {
            return Err(AppError::ApiError(error));
        }

        debug!("Search for {:?} returned {} recipes", query, parsed.recipes.len());
        Ok(parsed.recipes.into_iter().map(RecipeSummary::from).collect())
    }

    async fn get(&self, id: &str) -> Result<RecipeDetail, AppError> {
        let url = format!("{}/api/get", self.base_url);
        debug!("Fetching recipe {}", id);

        let response = self.client.get(&url).query(&[("rId", id)]).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(id.to_string()));
        }
        let body = response.text().await?;

        // A missing id is reported as an `error` payload, sometimes with a 400
        let parsed: Option<GetResponse> = serde_json::from_str(&body).ok();
        match parsed {
            Some(GetResponse { error: Some(error), .. }) => {
                debug!("API reported {:?} for recipe {}", error, id);
                Err(AppError::NotFound(id.to_string()))
            }
            Some(GetResponse {
                recipe: Some(recipe),
                ..
            }) if status.is_success() => Ok(recipe.into()),
            _ if !status.is_success() => {
                Err(AppError::ApiError(format!("get returned status {}", status)))
            }
            _ => Err(AppError::ApiError(format!("malformed recipe payload for {}", id))),
        }
    }
}
