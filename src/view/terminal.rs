use log::debug;
use std::io::{self, Stdout, Write};

use super::{format_count, limit_title, page_buttons, page_slice, LoaderTarget, View, TITLE_LIMIT};
use crate::model::{Ingredient, ItemId, LikedRecipe, RecipeSummary, ShoppingItem};
use crate::recipe::Recipe;

/// Plain-text view writing to any [`Write`]r
pub struct TerminalView<W: Write> {
    out: W,
}

impl TerminalView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl AsRef<str>) {
        if let Err(e) = writeln!(self.out, "{}", text.as_ref()) {
            debug!("Dropped terminal output: {}", e);
        }
    }

    fn ingredients(&mut self, ingredients: &[Ingredient]) {
        for ingredient in ingredients {
            let quantity = [format_count(ingredient.count), ingredient.unit.clone()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            self.line(format!("  - {} {}", quantity, ingredient.ingredient));
        }
    }
}

impl<W: Write + Send> View for TerminalView<W> {
    fn clear_input(&mut self) {}

    fn clear_results(&mut self) {}

    fn render_results(&mut self, results: &[RecipeSummary], page: usize, per_page: usize) {
        if results.is_empty() {
            self.line("No recipes found.");
            return;
        }
        for summary in page_slice(results, page, per_page) {
            self.line(format!(
                "  [{}] {} ({})",
                summary.id,
                limit_title(&summary.title, TITLE_LIMIT),
                summary.publisher
            ));
        }

        let buttons = page_buttons(page, results.len(), per_page);
        let mut nav = Vec::new();
        if let Some(prev) = buttons.prev {
            nav.push(format!("< page {}", prev));
        }
        if let Some(next) = buttons.next {
            nav.push(format!("page {} >", next));
        }
        if !nav.is_empty() {
            self.line(format!("  {}", nav.join(" | ")));
        }
    }

    fn highlight_selected(&mut self, id: &str) {
        self.line(format!("> {}", id));
    }

    fn clear_recipe(&mut self) {}

    fn render_recipe(&mut self, recipe: &Recipe, liked: bool) {
        self.line("");
        self.line(recipe.title.to_uppercase());
        self.line(format!("by {}", recipe.author));
        self.line(format!(
            "{} minutes, {} servings {}",
            recipe.time,
            recipe.servings,
            if liked { "[liked]" } else { "" }
        ));
        self.ingredients(&recipe.ingredients);
        if !recipe.url.is_empty() {
            self.line(format!("Directions: {}", recipe.url));
        }
    }

    fn update_serving_ingredients(&mut self, recipe: &Recipe) {
        self.line(format!("{} servings", recipe.servings));
        self.ingredients(&recipe.ingredients);
    }

    fn render_item(&mut self, item: &ShoppingItem) {
        self.line(format!(
            "  #{} {} {} {}",
            item.id,
            format_count(item.count),
            item.unit,
            item.ingredient
        ));
    }

    fn delete_item(&mut self, id: ItemId) {
        self.line(format!("Removed item #{}", id));
    }

    fn toggle_like_btn(&mut self, liked: bool) {
        self.line(if liked { "Liked." } else { "Unliked." });
    }

    fn render_like(&mut self, like: &LikedRecipe) {
        self.line(format!(
            "  <3 [{}] {} ({})",
            like.id,
            limit_title(&like.title, TITLE_LIMIT),
            like.author
        ));
    }

    fn delete_like(&mut self, id: &str) {
        self.line(format!("Removed {} from likes", id));
    }

    fn toggle_like_menu(&mut self, num_likes: usize) {
        if num_likes > 0 {
            self.line(format!("{} liked recipe(s)", num_likes));
        }
    }

    fn render_loader(&mut self, target: LoaderTarget) {
        match target {
            LoaderTarget::Results => self.line("Searching..."),
            LoaderTarget::Recipe => self.line("Loading recipe..."),
        }
    }

    fn clear_loader(&mut self) {}

    fn alert(&mut self, message: &str) {
        self.line(format!("! {}", message));
    }
}
