use crate::client::RecipeApi;
use crate::error::Result;
use crate::models::Search;

use super::AppState;

/// Run a search and make it the current one, starting at page 1
///
/// Blank queries are ignored. On failure the previous search is kept.
pub async fn control_search(state: &mut AppState, api: &impl RecipeApi, query: &str) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(());
    }

    let results = api.search(query).await?;
    tracing::info!(query, count = results.len(), "search complete");

    state.search = Some(Search::new(query, results));
    state.page = 1;

    Ok(())
}

/// Switch the visible page of results; out-of-range pages are ignored
pub fn go_to_page(state: &mut AppState, page: usize) -> bool {
    let in_range = state
        .search
        .as_ref()
        .is_some_and(|search| (1..=search.num_pages()).contains(&page));

    if in_range {
        state.page = page;
    }
    in_range
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures::{FakeApi, fake_api, test_db};
    use rstest::*;
    use sqlx::SqlitePool;

    #[rstest]
    #[tokio::test]
    async fn test_control_search(#[future] test_db: SqlitePool, fake_api: FakeApi) {
        let mut state = AppState::restore(test_db.await)
            .await
            .expect("Failed to restore state");

        control_search(&mut state, &fake_api, "  pizza ")
            .await
            .expect("Search failed");

        let search = state.search.as_ref().expect("search should be set");
        assert_eq!(search.query, "pizza");
        assert_eq!(search.results.len(), 23);
        assert_eq!(state.page, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_blank_query_is_ignored(#[future] test_db: SqlitePool, fake_api: FakeApi) {
        let mut state = AppState::restore(test_db.await)
            .await
            .expect("Failed to restore state");

        control_search(&mut state, &fake_api, "   ")
            .await
            .expect("Blank search should not fail");

        assert!(state.search.is_none());
        assert_eq!(fake_api.calls.get(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_new_search_resets_page(#[future] test_db: SqlitePool, fake_api: FakeApi) {
        let mut state = AppState::restore(test_db.await)
            .await
            .expect("Failed to restore state");

        control_search(&mut state, &fake_api, "pizza").await.expect("Search failed");
        assert!(go_to_page(&mut state, 3));
        control_search(&mut state, &fake_api, "pasta").await.expect("Search failed");

        assert_eq!(state.page, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_go_to_page_bounds(#[future] test_db: SqlitePool, fake_api: FakeApi) {
        let mut state = AppState::restore(test_db.await)
            .await
            .expect("Failed to restore state");

        assert!(!go_to_page(&mut state, 1), "no search yet");

        control_search(&mut state, &fake_api, "pizza").await.expect("Search failed");

        assert!(go_to_page(&mut state, 3));
        assert_eq!(state.page, 3);
        assert!(!go_to_page(&mut state, 4));
        assert!(!go_to_page(&mut state, 0));
        assert_eq!(state.page, 3);
    }
}
