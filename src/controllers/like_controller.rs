use super::AppState;

/// Like the current recipe, or unlike it if it is already liked
///
/// Returns whether the recipe is liked afterwards, or `None` when no recipe
/// is loaded.
pub async fn control_like(state: &mut AppState) -> Option<bool> {
    let recipe = state.recipe.as_ref()?;

    let liked = if state.likes.is_liked(&recipe.id) {
        state.likes.delete_like(&recipe.id).await;
        false
    } else {
        state
            .likes
            .add_like(&recipe.id, &recipe.title, &recipe.author, &recipe.image)
            .await;
        true
    };

    tracing::info!(
        recipe = %recipe.id,
        liked,
        total = state.likes.num_likes(),
        "toggled like"
    );
    Some(liked)
}
