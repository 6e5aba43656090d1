//! Controllers: one method per user action, all state in one owned [`AppState`].

use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::api::RecipeApi;
use crate::config::AppConfig;
use crate::intent::Intent;
use crate::likes::Likes;
use crate::list::ShoppingList;
use crate::model::ItemId;
use crate::recipe::{Recipe, Servings};
use crate::search::Search;
use crate::storage::Store;
use crate::view::{LoaderTarget, View};
use crate::AppError;

const SEARCH_FAILED: &str = "Something went wrong with the search...";
const RECIPE_FAILED: &str = "Error processing recipe!";

/// Everything the app currently knows; each part is set by its own controller
#[derive(Default)]
pub struct AppState {
    pub search: Option<Search>,
    pub recipe: Option<Recipe>,
    pub list: Option<ShoppingList>,
    pub likes: Option<Likes>,
}

/// Monotonic request counter; only the newest ticket may land its result
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<AtomicU64>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generation {
    /// Start a new request, invalidating all earlier tickets
    pub fn begin(&self) -> Ticket {
        Ticket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }
}

/// A model whose fetch has finished, waiting to be applied
pub struct Fetched<T> {
    ticket: Ticket,
    model: T,
    outcome: Result<(), AppError>,
}

/// A search that has been announced to the UI but not fetched yet
pub struct PendingSearch {
    ticket: Ticket,
    search: Search,
}

impl PendingSearch {
    pub async fn run(mut self, api: &dyn RecipeApi) -> Fetched<Search> {
        let outcome = self.search.get_results(api).await;
        Fetched {
            ticket: self.ticket,
            model: self.search,
            outcome,
        }
    }
}

/// A recipe navigation that has been announced to the UI but not fetched yet
pub struct PendingRecipe {
    ticket: Ticket,
    recipe: Recipe,
    default_servings: u32,
}

impl PendingRecipe {
    /// Fetch the recipe and derive ingredients, time and servings
    pub async fn run(mut self, api: &dyn RecipeApi) -> Fetched<Recipe> {
        let outcome = self.recipe.get_recipe(api).await;
        if outcome.is_ok() {
            self.recipe.parse_ingredients();
            self.recipe.calc_time();
            self.recipe.calc_servings(self.default_servings);
        }
        Fetched {
            ticket: self.ticket,
            model: self.recipe,
            outcome,
        }
    }
}

pub struct App<V: View> {
    pub(crate) state: AppState,
    pub(crate) api: Arc<dyn RecipeApi>,
    pub(crate) store: Arc<dyn Store>,
    pub(crate) view: V,
    pub(crate) config: AppConfig,
    pub(crate) searches: Generation,
    pub(crate) navigations: Generation,
    pub(crate) location: String,
}

impl<V: View> App<V> {
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn api(&self) -> Arc<dyn RecipeApi> {
        Arc::clone(&self.api)
    }

    /// The fragment naming the recipe being shown, without `#`
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Route an intent to its controller
    pub async fn dispatch(&mut self, intent: Intent) {
        debug!("Dispatching {:?}", intent);
        match intent {
            Intent::Search(query) => self.control_search(&query).await,
            Intent::GoToPage(page) => self.go_to_page(page),
            Intent::Navigate(fragment) => self.control_recipe(&fragment).await,
            Intent::Load(fragment) => self.load(&fragment).await,
            Intent::Servings(direction) => self.control_servings(direction),
            Intent::AddToList => self.control_list(),
            Intent::DeleteItem(id) => self.delete_list_item(id),
            Intent::UpdateCount(id, count) => self.update_list_count(id, count),
            Intent::ToggleLike => self.control_like(),
        }
    }

    pub async fn control_search(&mut self, query: &str) {
        if let Some(pending) = self.begin_search(query) {
            let api = self.api();
            let fetched = pending.run(api.as_ref()).await;
            self.finish_search(fetched);
        }
    }

    /// Prepare the UI for a new search. Blank queries are ignored.
    pub fn begin_search(&mut self, query: &str) -> Option<PendingSearch> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let ticket = self.searches.begin();
        self.state.search = Some(Search::new(query));
        self.view.clear_input();
        self.view.clear_results();
        self.view.render_loader(LoaderTarget::Results);

        Some(PendingSearch {
            ticket,
            search: Search::new(query),
        })
    }

    /// Apply a finished search unless a newer one started meanwhile
    pub fn finish_search(&mut self, fetched: Fetched<Search>) {
        if !self.searches.is_current(fetched.ticket) {
            debug!("Discarding stale results for {:?}", fetched.model.query);
            return;
        }

        self.view.clear_loader();
        match fetched.outcome {
            Ok(()) => {
                let per_page = self.config.search.results_per_page;
                self.view.render_results(&fetched.model.result, 1, per_page);
                self.state.search = Some(fetched.model);
            }
            Err(e) => {
                warn!("Search for {:?} failed: {}", fetched.model.query, e);
                self.view.alert(SEARCH_FAILED);
            }
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        if let Some(search) = &self.state.search {
            self.view.clear_results();
            self.view
                .render_results(&search.result, page, self.config.search.results_per_page);
        }
    }

    pub async fn control_recipe(&mut self, fragment: &str) {
        if let Some(pending) = self.begin_navigation(fragment) {
            let api = self.api();
            let fetched = pending.run(api.as_ref()).await;
            self.finish_navigation(fetched);
        }
    }

    /// Switch to the recipe named by `fragment` and drop the previous one
    pub fn begin_navigation(&mut self, fragment: &str) -> Option<PendingRecipe> {
        let id = fragment.trim().trim_start_matches('#');
        if id.is_empty() {
            return None;
        }

        let ticket = self.navigations.begin();
        self.location = id.to_string();
        self.state.recipe = None;
        self.view.clear_recipe();
        self.view.render_loader(LoaderTarget::Recipe);
        if self.state.search.is_some() {
            self.view.highlight_selected(id);
        }

        Some(PendingRecipe {
            ticket,
            recipe: Recipe::new(id),
            default_servings: self.config.recipe.default_servings,
        })
    }

    /// Apply a finished navigation unless a newer one started meanwhile
    pub fn finish_navigation(&mut self, fetched: Fetched<Recipe>) {
        if !self.navigations.is_current(fetched.ticket) {
            debug!("Discarding stale recipe {}", fetched.model.id);
            return;
        }

        self.view.clear_loader();
        match fetched.outcome {
            Ok(()) => {
                let recipe = fetched.model;
                let liked = self
                    .state
                    .likes
                    .as_ref()
                    .is_some_and(|likes| likes.is_liked(&recipe.id));
                self.view.render_recipe(&recipe, liked);
                info!("Showing recipe {} ({})", recipe.id, recipe.title);
                self.state.recipe = Some(recipe);
            }
            Err(e) => {
                warn!("Loading recipe {} failed: {}", fetched.model.id, e);
                self.view.alert(RECIPE_FAILED);
            }
        }
    }

    pub fn control_servings(&mut self, direction: Servings) {
        let Some(recipe) = self.state.recipe.as_mut() else {
            return;
        };
        if direction == Servings::Decrease && recipe.servings <= 1 {
            return;
        }
        if recipe.update_servings(direction) {
            self.view.update_serving_ingredients(recipe);
        }
    }

    /// Add every ingredient of the current recipe to the shopping list
    pub fn control_list(&mut self) {
        let Some(recipe) = self.state.recipe.as_ref() else {
            debug!("No recipe to add to the shopping list");
            return;
        };
        let list = self.state.list.get_or_insert_with(ShoppingList::new);
        for ingredient in &recipe.ingredients {
            let item = list.add_item(
                ingredient.count,
                ingredient.unit.clone(),
                ingredient.ingredient.clone(),
            );
            self.view.render_item(&item);
        }
    }

    pub fn delete_list_item(&mut self, id: ItemId) {
        if let Some(list) = self.state.list.as_mut() {
            list.delete_item(id);
            self.view.delete_item(id);
        }
    }

    pub fn update_list_count(&mut self, id: ItemId, count: f64) {
        if let Some(list) = self.state.list.as_mut() {
            list.update_count(id, count);
        }
    }

    /// Like the current recipe, or unlike it when it already is
    pub fn control_like(&mut self) {
        let Some(recipe) = self.state.recipe.as_ref() else {
            return;
        };
        let store = &self.store;
        let likes = self
            .state
            .likes
            .get_or_insert_with(|| {
                let mut likes = Likes::new(Arc::clone(store));
                likes.read_storage();
                likes
            });

        if !likes.is_liked(&recipe.id) {
            let like = likes.add_like(
                recipe.id.clone(),
                recipe.title.clone(),
                recipe.author.clone(),
                recipe.image.clone(),
            );
            self.view.toggle_like_btn(true);
            self.view.render_like(&like);
        } else {
            likes.delete_like(&recipe.id);
            self.view.toggle_like_btn(false);
            self.view.delete_like(&recipe.id);
        }
        self.view.toggle_like_menu(likes.num_likes());
    }

    /// Restore likes from storage, then show the recipe named by `fragment`
    pub async fn load(&mut self, fragment: &str) {
        let mut likes = Likes::new(Arc::clone(&self.store));
        likes.read_storage();

        self.view.toggle_like_menu(likes.num_likes());
        for like in likes.likes() {
            self.view.render_like(like);
        }
        self.state.likes = Some(likes);

        self.control_recipe(fragment).await;
    }
}
