use serde::Deserialize;

/// Body of `GET /search?q=<query>`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub recipes: Vec<SearchResult>,
}

/// A recipe summary as listed in search results
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "recipe_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "publisher")]
    pub author: String,
    #[serde(rename = "image_url")]
    pub image: String,
}
