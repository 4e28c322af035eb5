mod ingredient;
mod likes;
mod quantity;
mod recipe;
mod search;
mod shopping_list;
mod units;

pub mod api;

#[cfg(test)]
pub mod test_fixtures;

pub use ingredient::{StructuredIngredient, parse_ingredient};
pub use likes::{LIKES_KEY, LikeRecord, Likes};
pub use quantity::format_count;
pub use recipe::{DEFAULT_SERVINGS, Recipe, ServingsDirection};
pub use search::{RESULTS_PER_PAGE, Search, TITLE_LIMIT, limit_title};
pub use shopping_list::{ShoppingList, ShoppingListItem};
pub use units::{canonical_unit, canonical_units, canonicalize};
