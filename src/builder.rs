use std::sync::Arc;

use crate::api::{ForkifyApi, RecipeApi};
use crate::config::AppConfig;
use crate::controller::{App, AppState, Generation};
use crate::storage::{FileStore, Store};
use crate::view::View;
use crate::AppError;

/// Builder for wiring an [`App`] to its API, storage and view
pub struct AppBuilder<V: View> {
    config: Option<AppConfig>,
    api: Option<Arc<dyn RecipeApi>>,
    store: Option<Arc<dyn Store>>,
    view: Option<V>,
}

impl<V: View> Default for AppBuilder<V> {
    fn default() -> Self {
        Self {
            config: None,
            api: None,
            store: None,
            view: None,
        }
    }
}

impl<V: View> AppBuilder<V> {
    /// Use this configuration instead of the defaults
    ///
    /// # Example
    /// ```
    /// use recipe_box::{App, AppConfig, RecordingView};
    ///
    /// let builder = App::<RecordingView>::builder().config(AppConfig::default());
    /// ```
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a specific recipe API. Defaults to [`ForkifyApi`] built from the config.
    pub fn api(mut self, api: Arc<dyn RecipeApi>) -> Self {
        self.api = Some(api);
        self
    }

    /// Use a specific store for likes. Defaults to a [`FileStore`] in the configured data dir.
    pub fn store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn view(mut self, view: V) -> Self {
        self.view = Some(view);
        self
    }

    /// Build the app
    ///
    /// # Errors
    /// Returns `AppError` if no view was given or the HTTP client cannot be created.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use recipe_box::{App, MemoryStore, RecordingView};
    ///
    /// let app = App::builder()
    ///     .view(RecordingView::new())
    ///     .store(Arc::new(MemoryStore::new()))
    ///     .build()
    ///     .unwrap();
    /// assert!(app.state().recipe.is_none());
    /// ```
    pub fn build(self) -> Result<App<V>, AppError> {
        let view = self.view.ok_or_else(|| {
            AppError::BuilderError("No view specified. Use .view()".to_string())
        })?;
        let config = self.config.unwrap_or_default();

        let api: Arc<dyn RecipeApi> = match self.api {
            Some(api) => api,
            None => Arc::new(ForkifyApi::new(&config.api)?),
        };
        let store: Arc<dyn Store> = match self.store {
            Some(store) => store,
            None => Arc::new(FileStore::new(config.storage.data_dir.clone())),
        };

        Ok(App {
            state: AppState::default(),
            api,
            store,
            view,
            config,
            searches: Generation::default(),
            navigations: Generation::default(),
            location: String::new(),
        })
    }
}

impl<V: View> App<V> {
    /// Creates a new builder
    pub fn builder() -> AppBuilder<V> {
        AppBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::view::RecordingView;

    #[test]
    fn test_build_without_view_fails() {
        let result = App::<RecordingView>::builder().build();
        assert!(matches!(result, Err(AppError::BuilderError(_))));
    }

    #[test]
    fn test_build_with_defaults() {
        let app = App::builder()
            .view(RecordingView::new())
            .store(Arc::new(MemoryStore::new()))
            .build()
            .unwrap();

        assert!(app.state().search.is_none());
        assert!(app.state().likes.is_none());
        assert_eq!(app.location(), "");
        assert_eq!(app.config.search.results_per_page, 10);
    }
}
