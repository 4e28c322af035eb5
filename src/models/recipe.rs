use std::fmt;

use super::api::RecipeData;
use super::ingredient::{StructuredIngredient, parse_ingredient};

/// Servings assumed when the data source does not provide any
pub const DEFAULT_SERVINGS: u32 = 4;

const INGREDIENTS_PER_PERIOD: usize = 3;
const MINUTES_PER_PERIOD: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsDirection {
    Increase,
    Decrease,
}

/// A loaded recipe with structured ingredients
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub source_url: String,
    /// Ingredient lines as fetched, before parsing
    pub raw_ingredients: Vec<String>,
    pub ingredients: Vec<StructuredIngredient>,
    pub servings: u32,
    /// Estimated minutes, derived once from the ingredient count
    pub cook_time: u32,
}

impl From<RecipeData> for Recipe {
    fn from(data: RecipeData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            author: data.author,
            image: data.image,
            source_url: data.source_url,
            raw_ingredients: data.ingredients,
            ingredients: Vec::new(),
            servings: DEFAULT_SERVINGS,
            cook_time: 0,
        }
    }
}

impl Recipe {
    /// Populate `ingredients` from the raw lines, skipping blank ones
    pub fn parse_ingredients(&mut self) {
        self.ingredients = self
            .raw_ingredients
            .iter()
            .filter_map(|line| parse_ingredient(line))
            .collect();
    }

    /// 15 minutes for every started group of three ingredients
    pub fn calc_time(&mut self) {
        let periods = self.ingredients.len().div_ceil(INGREDIENTS_PER_PERIOD);
        self.cook_time = u32::try_from(periods)
            .unwrap_or(u32::MAX)
            .saturating_mul(MINUTES_PER_PERIOD);
    }

    pub fn calc_servings(&mut self, supplied: Option<u32>) {
        self.servings = supplied
            .filter(|servings| *servings > 0)
            .unwrap_or(DEFAULT_SERVINGS);
    }

    /// Step servings by one and rescale every ingredient count
    ///
    /// Returns `false` without touching anything when a decrease would drop
    /// servings below 1.
    pub fn update_servings(&mut self, direction: ServingsDirection) -> bool {
        let new_servings = match direction {
            ServingsDirection::Increase => self.servings.saturating_add(1),
            ServingsDirection::Decrease if self.servings > 1 => self.servings - 1,
            ServingsDirection::Decrease => return false,
        };

        for ingredient in &mut self.ingredients {
            ingredient.rescale(self.servings, new_servings);
        }
        self.servings = new_servings;
        true
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.title)?;
        writeln!(f, "By: {}", self.author)?;
        writeln!(
            f,
            "Servings: {} | Cook time: {} minutes",
            self.servings, self.cook_time
        )?;
        writeln!(f)?;
        writeln!(f, "Ingredients:")?;

        for ingredient in &self.ingredients {
            writeln!(f, "  - {}", ingredient)?;
        }

        if !self.source_url.is_empty() {
            writeln!(f)?;
            writeln!(f, "Directions: {}", self.source_url)?;
        }

        Ok(())
    }
}
