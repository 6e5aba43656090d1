use super::{LoaderTarget, View};
use crate::model::{ItemId, LikedRecipe, RecipeSummary, ShoppingItem};
use crate::recipe::Recipe;

/// What a view was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    ClearInput,
    ClearResults,
    Results { ids: Vec<String>, page: usize },
    Highlight(String),
    ClearRecipe,
    Recipe { id: String, servings: u32, liked: bool },
    Servings { servings: u32, counts: Vec<Option<f64>> },
    Item(ShoppingItem),
    DeleteItem(ItemId),
    LikeButton(bool),
    Like(LikedRecipe),
    DeleteLike(String),
    LikeMenu(usize),
    Loader(LoaderTarget),
    ClearLoader,
    Alert(String),
}

/// Headless view that records every call in order
#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            ViewEvent::Alert(message) => Some(message.as_str()),
            _ => None,
        })
    }
}

impl View for RecordingView {
    fn clear_input(&mut self) {
        self.events.push(ViewEvent::ClearInput);
    }

    fn clear_results(&mut self) {
        self.events.push(ViewEvent::ClearResults);
    }

    fn render_results(&mut self, results: &[RecipeSummary], page: usize, per_page: usize) {
        let ids = super::page_slice(results, page, per_page)
            .iter()
            .map(|r| r.id.clone())
            .collect();
        self.events.push(ViewEvent::Results { ids, page });
    }

    fn highlight_selected(&mut self, id: &str) {
        self.events.push(ViewEvent::Highlight(id.to_string()));
    }

    fn clear_recipe(&mut self) {
        self.events.push(ViewEvent::ClearRecipe);
    }

    fn render_recipe(&mut self, recipe: &Recipe, liked: bool) {
        self.events.push(ViewEvent::Recipe {
            id: recipe.id.clone(),
            servings: recipe.servings,
            liked,
        });
    }

    fn update_serving_ingredients(&mut self, recipe: &Recipe) {
        self.events.push(ViewEvent::Servings {
            servings: recipe.servings,
            counts: recipe.ingredients.iter().map(|i| i.count).collect(),
        });
    }

    fn render_item(&mut self, item: &ShoppingItem) {
        self.events.push(ViewEvent::Item(item.clone()));
    }

    fn delete_item(&mut self, id: ItemId) {
        self.events.push(ViewEvent::DeleteItem(id));
    }

    fn toggle_like_btn(&mut self, liked: bool) {
        self.events.push(ViewEvent::LikeButton(liked));
    }

    fn render_like(&mut self, like: &LikedRecipe) {
        self.events.push(ViewEvent::Like(like.clone()));
    }

    fn delete_like(&mut self, id: &str) {
        self.events.push(ViewEvent::DeleteLike(id.to_string()));
    }

    fn toggle_like_menu(&mut self, num_likes: usize) {
        self.events.push(ViewEvent::LikeMenu(num_likes));
    }

    fn render_loader(&mut self, target: LoaderTarget) {
        self.events.push(ViewEvent::Loader(target));
    }

    fn clear_loader(&mut self) {
        self.events.push(ViewEvent::ClearLoader);
    }

    fn alert(&mut self, message: &str) {
        self.events.push(ViewEvent::Alert(message.to_string()));
    }
}
