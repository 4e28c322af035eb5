use crate::client::RecipeApi;
use crate::error::Result;
use crate::models::{Recipe, ServingsDirection};

use super::AppState;

/// Fetch a recipe and make it the current one
///
/// The recipe is fully prepared before it replaces the current one, so a
/// failed fetch leaves the previous recipe in place.
pub async fn control_recipe(state: &mut AppState, api: &impl RecipeApi, id: &str) -> Result<()> {
    let id = id.trim();
    if id.is_empty() {
        return Ok(());
    }

    let data = api.get_recipe(id).await?;
    let servings = data.servings;

    let mut recipe = Recipe::from(data);
    recipe.parse_ingredients();
    recipe.calc_time();
    recipe.calc_servings(servings);

    tracing::info!(
        id,
        title = %recipe.title,
        ingredients = recipe.ingredients.len(),
        "recipe loaded"
    );
    state.recipe = Some(recipe);

    Ok(())
}

/// Step the current recipe's servings; returns whether anything changed
pub fn update_servings(state: &mut AppState, direction: ServingsDirection) -> bool {
    state
        .recipe
        .as_mut()
        .is_some_and(|recipe| recipe.update_servings(direction))
}
