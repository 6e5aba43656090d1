use log::debug;

use crate::api::RecipeApi;
use crate::ingredient::parse_ingredient;
use crate::model::Ingredient;
use crate::AppError;

/// Minutes added for every started group of ingredients
const MINUTES_PER_PERIOD: u32 = 15;
const INGREDIENTS_PER_PERIOD: usize = 3;

/// Which way to move the serving count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Servings {
    Increase,
    Decrease,
}

/// The recipe currently being viewed
#[derive(Debug, Clone, Default)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub url: String,
    /// Ingredient lines as delivered by the API
    pub raw_ingredients: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    /// Estimated cooking time in minutes
    pub time: u32,
    pub servings: u32,
    /// Servings stated by the source, used as the scaling baseline
    pub source_servings: u32,
    stated_servings: Option<u32>,
}

impl Recipe {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Fetch title, author, image, url and raw ingredient lines for this id
    pub async fn get_recipe(&mut self, api: &dyn RecipeApi) -> Result<(), AppError> {
        let detail = api.get(&self.id).await?;
        debug!(
            "Loaded recipe {} with {} ingredient lines",
            self.id,
            detail.ingredients.len()
        );

        self.title = detail.title;
        self.author = detail.author;
        self.image = detail.image;
        self.url = detail.url;
        self.raw_ingredients = detail.ingredients;
        self.stated_servings = detail.servings;
        Ok(())
    }

    /// Turn the raw ingredient lines into structured ingredients
    pub fn parse_ingredients(&mut self) {
        self.ingredients = self
            .raw_ingredients
            .iter()
            .map(|line| parse_ingredient(line))
            .collect();
    }

    /// Roughly 15 minutes for every 3 ingredients
    pub fn calc_time(&mut self) {
        let periods = self.ingredients.len().div_ceil(INGREDIENTS_PER_PERIOD);
        self.time = periods as u32 * MINUTES_PER_PERIOD;
    }

    /// Use the servings stated by the source, or `default` when it has none
    pub fn calc_servings(&mut self, default: u32) {
        self.servings = self.stated_servings.filter(|s| *s > 0).unwrap_or(default);
        self.source_servings = self.servings;
    }

    /// Move servings by one and rescale every known count.
    ///
    /// Returns `false` and changes nothing when that would drop below one serving
    /// or overflow the counter.
    pub fn update_servings(&mut self, direction: Servings) -> bool {
        // Servings are unknown until calc_servings ran
        if self.servings == 0 {
            return false;
        }
        let new_servings = match direction {
            Servings::Increase => match self.servings.checked_add(1) {
                Some(servings) => servings,
                None => return false,
            },
            Servings::Decrease if self.servings > 1 => self.servings - 1,
            Servings::Decrease => return false,
        };

        let ratio = f64::from(new_servings) / f64::from(self.servings);
        for ingredient in &mut self.ingredients {
            if let Some(count) = ingredient.count.as_mut() {
                *count *= ratio;
            }
        }
        self.servings = new_servings;
        true
    }
}
