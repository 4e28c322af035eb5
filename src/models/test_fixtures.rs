use std::cell::Cell;
use std::collections::HashMap;

use rstest::*;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::client::RecipeApi;
use crate::error::{ForkfulError, Result};
use crate::models::api::{RecipeData, SearchResult};

/// Test fixture that creates an in-memory SQLite database with migrations applied
///
/// This fixture can be imported and used across all model tests to ensure
/// consistency in test database setup.
#[fixture]
pub async fn test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

#[fixture]
pub fn pizza_dough() -> RecipeData {
    RecipeData {
        id: "47746".to_string(),
        title: "Best Pizza Dough Ever".to_string(),
        author: "101 Cookbooks".to_string(),
        image: "http://static.food2fork.com/best_pizza_dough_recipe1b20.jpg".to_string(),
        source_url: "http://www.101cookbooks.com/archives/001199.html".to_string(),
        ingredients: vec![
            "4 1/2 cups (20.25 ounces) unbleached high-gluten flour".to_string(),
            "1 teaspoon salt".to_string(),
            "1 3/4 cups water, ice cold".to_string(),
            "2 tablespoons olive oil".to_string(),
            "Semolina or cornmeal for dusting".to_string(),
        ],
        servings: None,
    }
}

/// In-process stand-in for the remote recipe API
pub struct FakeApi {
    pub results: Vec<SearchResult>,
    pub recipes: HashMap<String, RecipeData>,
    pub offline: bool,
    pub calls: Cell<usize>,
}

impl FakeApi {
    fn network_down() -> ForkfulError {
        ForkfulError::Api {
            status: 503,
            body: "offline".to_string(),
        }
    }
}

impl RecipeApi for FakeApi {
    async fn search(&self, _query: &str) -> Result<Vec<SearchResult>> {
        self.calls.set(self.calls.get() + 1);
        if self.offline {
            return Err(Self::network_down());
        }
        Ok(self.results.clone())
    }

    async fn get_recipe(&self, id: &str) -> Result<RecipeData> {
        self.calls.set(self.calls.get() + 1);
        if self.offline {
            return Err(Self::network_down());
        }
        self.recipes
            .get(id)
            .cloned()
            .ok_or_else(|| ForkfulError::RecipeNotFound(id.to_string()))
    }
}

#[fixture]
pub fn fake_api(pizza_dough: RecipeData) -> FakeApi {
    let results = (0..23)
        .map(|i| SearchResult {
            id: if i == 0 {
                pizza_dough.id.clone()
            } else {
                format!("recipe-{i}")
            },
            title: format!("Pizza number {i}"),
            author: "Closet Cooking".to_string(),
            image: format!("{i}.jpg"),
        })
        .collect();

    let mut recipes = HashMap::new();
    recipes.insert(pizza_dough.id.clone(), pizza_dough);

    FakeApi {
        results,
        recipes,
        offline: false,
        calls: Cell::new(0),
    }
}
