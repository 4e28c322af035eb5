//! Response shapes of the remote recipe API

mod recipe;
mod search;

pub use recipe::{RecipeData, RecipeResponse};
pub use search::{SearchResponse, SearchResult};
