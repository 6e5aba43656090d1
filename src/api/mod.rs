mod forkify;

pub use forkify::ForkifyApi;

use crate::model::{RecipeDetail, RecipeSummary};
use crate::AppError;
use async_trait::async_trait;

/// Read-only access to a remote recipe catalogue
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Search recipes matching `query`, in the order the API ranks them
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, AppError>;

    /// Fetch one recipe by id
    async fn get(&self, id: &str) -> Result<RecipeDetail, AppError>;
}
