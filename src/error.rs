use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForkfulError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Recipe API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Recipe not found with id: {0}")]
    RecipeNotFound(String),
}

impl ForkfulError {
    /// Errors raised while talking to the remote recipe API
    pub fn is_network_failure(&self) -> bool {
        matches!(
            self,
            ForkfulError::Network(_)
                | ForkfulError::Api { .. }
                | ForkfulError::RecipeNotFound(_)
                | ForkfulError::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ForkfulError>;
