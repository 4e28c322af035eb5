use sqlx::SqlitePool;

use crate::client::RecipeApi;
use crate::error::Result;
use crate::models::{Likes, Recipe, Search, ServingsDirection, ShoppingList};

use super::like_controller::control_like;
use super::list_controller::{add_recipe_to_list, delete_list_item, update_list_count};
use super::recipe_controller::{control_recipe, update_servings};
use super::search_controller::{control_search, go_to_page};

pub const SEARCH_FAILED: &str = "Something went wrong with the search!";
pub const RECIPE_FAILED: &str = "Error processing recipe!";

/// Everything the application knows between user actions
pub struct AppState {
    pub search: Option<Search>,
    /// 1-based page of `search` being shown
    pub page: usize,
    pub recipe: Option<Recipe>,
    pub list: Option<ShoppingList>,
    pub likes: Likes,
    /// Message to show the user until dismissed
    pub alert: Option<String>,
    /// Set while a network command is in flight
    pub loading: bool,
}

impl AppState {
    /// Fresh state with likes restored from storage
    pub async fn restore(pool: SqlitePool) -> Result<Self> {
        let mut likes = Likes::new(pool);
        likes.read_storage().await?;

        Ok(Self {
            search: None,
            page: 1,
            recipe: None,
            list: None,
            likes,
            alert: None,
            loading: false,
        })
    }

    /// Whether the loaded recipe is liked
    pub fn recipe_is_liked(&self) -> bool {
        self.recipe
            .as_ref()
            .is_some_and(|recipe| self.likes.is_liked(&recipe.id))
    }
}

/// User intents produced by the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(String),
    GoToPage(usize),
    LoadRecipe(String),
    IncreaseServings,
    DecreaseServings,
    AddRecipeToList,
    DeleteListItem(String),
    UpdateListCount(String, f64),
    ToggleLike,
    DismissAlert,
}

impl Command {
    pub fn needs_network(&self) -> bool {
        matches!(self, Command::Search(_) | Command::LoadRecipe(_))
    }
}

/// Run one command to completion against the state
///
/// Network failures become an alert and leave the state as it was. Commands
/// that need a loaded recipe or a known item do nothing without one.
pub async fn dispatch(state: &mut AppState, api: &impl RecipeApi, command: Command) {
    tracing::info!(?command, "dispatching command");

    match command {
        Command::Search(query) => {
            if let Err(err) = control_search(state, api, &query).await {
                tracing::error!(error = %err, query = %query, "search failed");
                state.alert = Some(SEARCH_FAILED.to_string());
            }
        }
        Command::GoToPage(page) => {
            go_to_page(state, page);
        }
        Command::LoadRecipe(id) => {
            if let Err(err) = control_recipe(state, api, &id).await {
                tracing::error!(error = %err, id = %id, "recipe load failed");
                state.alert = Some(RECIPE_FAILED.to_string());
            }
        }
        Command::IncreaseServings => {
            update_servings(state, ServingsDirection::Increase);
        }
        Command::DecreaseServings => {
            update_servings(state, ServingsDirection::Decrease);
        }
        Command::AddRecipeToList => {
            add_recipe_to_list(state);
        }
        Command::DeleteListItem(id) => {
            delete_list_item(state, &id);
        }
        Command::UpdateListCount(id, count) => {
            update_list_count(state, &id, count);
        }
        Command::ToggleLike => {
            control_like(state).await;
        }
        Command::DismissAlert => {
            state.alert = None;
        }
    }
}
