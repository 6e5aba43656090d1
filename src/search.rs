use log::debug;

use crate::api::RecipeApi;
use crate::model::RecipeSummary;
use crate::AppError;

/// One search submission and its results
#[derive(Debug, Clone, Default)]
pub struct Search {
    pub query: String,
    pub result: Vec<RecipeSummary>,
}

impl Search {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            result: Vec::new(),
        }
    }

    /// Run the query against the API and keep the results in API order
    pub async fn get_results(&mut self, api: &dyn RecipeApi) -> Result<(), AppError> {
        self.result = api.search(&self.query).await?;
        debug!("{} results for {:?}", self.result.len(), self.query);
        Ok(())
    }
}
