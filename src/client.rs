use reqwest::{Client, Response, StatusCode};

use crate::error::{ForkfulError, Result};
use crate::models::api::{RecipeData, RecipeResponse, SearchResponse, SearchResult};

/// Read-only access to a remote recipe index
#[allow(async_fn_in_trait)]
pub trait RecipeApi {
    /// Recipe summaries matching a free-text query
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;

    /// Full recipe record, including raw ingredient lines
    async fn get_recipe(&self, id: &str) -> Result<RecipeData>;
}

/// HTTP client for the forkify recipe API
#[derive(Debug, Clone)]
pub struct ForkifyClient {
    http: Client,
    base_url: String,
}

impl ForkifyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl RecipeApi for ForkifyClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!(%url, query, "searching recipes");

        let response = self.http.get(&url).query(&[("q", query)]).send().await?;
        let body: SearchResponse = error_for_status(response).await?.json().await?;

        Ok(body.recipes)
    }

    async fn get_recipe(&self, id: &str) -> Result<RecipeData> {
        let url = format!("{}/get", self.base_url);
        tracing::debug!(%url, id, "fetching recipe");

        let response = self.http.get(&url).query(&[("rId", id)]).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ForkfulError::RecipeNotFound(id.to_string()));
        }
        let body: RecipeResponse = error_for_status(response).await?.json().await?;

        Ok(body.recipe)
    }
}

async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    Err(ForkfulError::Api {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search_returns_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("q", "pizza"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "recipes": [{
                    "publisher": "Closet Cooking",
                    "title": "Pizza Dip",
                    "recipe_id": "35477",
                    "image_url": "http://static.food2fork.com/pizzadip.jpg"
                }]
            })))
            .mount(&server)
            .await;

        let client = ForkifyClient::new(&format!("{}/api/", server.uri()));
        let results = client.search("pizza").await.expect("Search failed");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "35477");
        assert_eq!(results[0].title, "Pizza Dip");
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let client = ForkifyClient::new(&format!("{}/api", server.uri()));
        let result = client.search("pizza").await;

        match result {
            Err(ForkfulError::Api { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream down");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_recipe() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get"))
            .and(query_param("rId", "47746"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "recipe": {
                    "publisher": "101 Cookbooks",
                    "ingredients": ["4 1/2 cups flour", "1 3/4 cups water"],
                    "source_url": "http://www.101cookbooks.com/archives/001199.html",
                    "recipe_id": "47746",
                    "image_url": "http://static.food2fork.com/pizza.jpg",
                    "title": "Best Pizza Dough Ever"
                }
            })))
            .mount(&server)
            .await;

        let client = ForkifyClient::new(&format!("{}/api", server.uri()));
        let recipe = client.get_recipe("47746").await.expect("Fetch failed");

        assert_eq!(recipe.title, "Best Pizza Dough Ever");
        assert_eq!(recipe.ingredients, vec!["4 1/2 cups flour", "1 3/4 cups water"]);
    }

    #[tokio::test]
    async fn test_get_recipe_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ForkifyClient::new(&format!("{}/api", server.uri()));
        let result = client.get_recipe("999").await;

        match result {
            Err(ForkfulError::RecipeNotFound(id)) => assert_eq!(id, "999"),
            other => panic!("Expected RecipeNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_network_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = ForkifyClient::new(&format!("{}/api", server.uri()));
        let err = client
            .get_recipe("1")
            .await
            .expect_err("Malformed body should fail");

        assert!(err.is_network_failure());
    }
}
