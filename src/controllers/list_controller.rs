use crate::models::ShoppingList;

use super::AppState;

/// Copy every ingredient of the current recipe into the shopping list
///
/// Returns the number of items added.
pub fn add_recipe_to_list(state: &mut AppState) -> usize {
    let Some(recipe) = &state.recipe else {
        return 0;
    };

    let list = state.list.get_or_insert_with(ShoppingList::new);
    for ingredient in &recipe.ingredients {
        list.add_item(
            ingredient.count,
            Some(&ingredient.unit),
            &ingredient.ingredient,
        );
    }

    tracing::info!(
        recipe = %recipe.id,
        added = recipe.ingredients.len(),
        total = list.len(),
        "added recipe to shopping list"
    );
    recipe.ingredients.len()
}

pub fn delete_list_item(state: &mut AppState, id: &str) -> bool {
    state
        .list
        .as_mut()
        .and_then(|list| list.delete_item(id))
        .is_some()
}

/// Set an item's count; negative or non-finite counts are ignored
pub fn update_list_count(state: &mut AppState, id: &str, count: f64) -> bool {
    if !count.is_finite() || count < 0.0 {
        return false;
    }
    state
        .list
        .as_mut()
        .is_some_and(|list| list.update_count(id, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::control_recipe;
    use crate::models::test_fixtures::{FakeApi, fake_api, test_db};
    use rstest::*;
    use sqlx::SqlitePool;

    async fn state_with_recipe(pool: SqlitePool, api: &FakeApi) -> AppState {
        let mut state = AppState::restore(pool)
            .await
            .expect("Failed to restore state");
        control_recipe(&mut state, api, "47746")
            .await
            .expect("Failed to load recipe");
        state
    }

    #[rstest]
    #[tokio::test]
    async fn test_add_recipe_to_list(#[future] test_db: SqlitePool, fake_api: FakeApi) {
        let mut state = state_with_recipe(test_db.await, &fake_api).await;

        assert_eq!(add_recipe_to_list(&mut state), 5);

        let list = state.list.as_ref().expect("list should exist");
        let items: Vec<_> = list.items().collect();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].count, 4.5);
        assert_eq!(items[0].unit, "cup");
        assert_eq!(items[0].ingredient, "unbleached high-gluten flour");
        // Missing counts default to one
        assert_eq!(items[4].count, 1.0);
        assert_eq!(items[4].unit, "");
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_items_are_copies(#[future] test_db: SqlitePool, fake_api: FakeApi) {
        let mut state = state_with_recipe(test_db.await, &fake_api).await;
        add_recipe_to_list(&mut state);

        crate::controllers::update_servings(
            &mut state,
            crate::models::ServingsDirection::Increase,
        );

        let first = state.list.as_ref().unwrap().items().next().unwrap().count;
        assert_eq!(first, 4.5);
    }

    #[rstest]
    #[tokio::test]
    async fn test_adding_twice_appends(#[future] test_db: SqlitePool, fake_api: FakeApi) {
        let mut state = state_with_recipe(test_db.await, &fake_api).await;

        add_recipe_to_list(&mut state);
        add_recipe_to_list(&mut state);

        assert_eq!(state.list.as_ref().map(|list| list.len()), Some(10));
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_and_update(#[future] test_db: SqlitePool, fake_api: FakeApi) {
        let mut state = state_with_recipe(test_db.await, &fake_api).await;
        add_recipe_to_list(&mut state);
        let id = state.list.as_ref().unwrap().items().next().unwrap().id.clone();

        assert!(update_list_count(&mut state, &id, 3.0));
        assert_eq!(state.list.as_ref().unwrap().get(&id).unwrap().count, 3.0);
        assert!(!update_list_count(&mut state, &id, f64::NAN));
        assert!(!update_list_count(&mut state, &id, -1.0));

        assert!(delete_list_item(&mut state, &id));
        assert!(!delete_list_item(&mut state, &id));
        assert_eq!(state.list.as_ref().map(|list| list.len()), Some(4));
    }
}
