use serde::Deserialize;

/// Body of `GET /get?rId=<id>`
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeResponse {
    pub recipe: RecipeData,
}

/// Full recipe record with raw ingredient lines
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeData {
    #[serde(rename = "recipe_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "publisher")]
    pub author: String,
    #[serde(rename = "image_url")]
    pub image: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Not provided by every data source
    #[serde(default)]
    pub servings: Option<u32>,
}
