use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;
use crate::storage;

/// Storage key holding the serialized likes
pub const LIKES_KEY: &str = "likes";

/// Minimal persisted summary of a liked recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
}

/// Liked recipes, keyed by recipe id and persisted wholesale on every change
#[derive(Debug, Clone)]
pub struct Likes {
    likes: Vec<LikeRecord>,
    pool: SqlitePool,
}

impl Likes {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            likes: Vec::new(),
            pool,
        }
    }

    /// Add a like and persist; liking an already-liked id changes nothing
    pub async fn add_like(
        &mut self,
        id: &str,
        title: &str,
        author: &str,
        image: &str,
    ) -> &LikeRecord {
        let index = match self.position(id) {
            Some(index) => index,
            None => {
                self.likes.push(LikeRecord {
                    id: id.to_string(),
                    title: title.to_string(),
                    author: author.to_string(),
                    image: image.to_string(),
                });
                self.persist().await;
                self.likes.len() - 1
            }
        };
        &self.likes[index]
    }

    /// Remove a like by id and persist; unknown ids are ignored
    pub async fn delete_like(&mut self, id: &str) -> Option<LikeRecord> {
        let index = self.position(id)?;
        let removed = self.likes.remove(index);
        self.persist().await;
        Some(removed)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[LikeRecord] {
        &self.likes
    }

    /// Replace the in-memory set with the persisted one
    ///
    /// Absent, empty or unreadable stored values yield an empty set.
    pub async fn read_storage(&mut self) -> Result<()> {
        let stored = storage::read_value(&self.pool, LIKES_KEY).await?;

        self.likes = match stored.as_deref().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(json) => match serde_json::from_str::<Vec<LikeRecord>>(json) {
                Ok(mut likes) => {
                    let mut seen = std::collections::HashSet::new();
                    likes.retain(|like| seen.insert(like.id.clone()));
                    likes
                }
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring malformed stored likes");
                    Vec::new()
                }
            },
        };

        tracing::info!(count = self.likes.len(), "restored likes");
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.likes.iter().position(|like| like.id == id)
    }

    /// Best-effort write of the full set; failures are logged, not returned
    async fn persist(&self) {
        let json = match serde_json::to_string(&self.likes) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize likes");
                return;
            }
        };

        if let Err(err) = storage::write_value(&self.pool, LIKES_KEY, &json).await {
            tracing::warn!(error = %err, "failed to persist likes");
        }
    }
}
