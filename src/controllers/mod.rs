mod app_state;
mod like_controller;
mod list_controller;
mod recipe_controller;
mod search_controller;

pub use app_state::{AppState, Command, RECIPE_FAILED, SEARCH_FAILED, dispatch};
pub use like_controller::control_like;
pub use list_controller::{add_recipe_to_list, delete_list_item, update_list_count};
pub use recipe_controller::{control_recipe, update_servings};
pub use search_controller::{control_search, go_to_page};
