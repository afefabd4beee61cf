//! Content repository for database operations.
//!
//! Read-only lookup of content records using SeaORM.

use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::debug;

use crate::entities::contents;
use curio_core::content::{ContentError, ContentRecord, ContentRepository as ContentRepoTrait};

/// Content repository implementation.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    db: DatabaseConnection,
}

impl ContentRepository {
    /// Create a new content repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ContentRepoTrait for ContentRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<ContentRecord>, ContentError> {
        let model = contents::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ContentError::repository(e.to_string()))?;

        debug!(content_id = id, found = model.is_some(), "Content lookup");
        Ok(model.map(to_domain))
    }
}

/// Convert database model to domain model.
fn to_domain(model: contents::Model) -> ContentRecord {
    ContentRecord {
        id: model.id,
        title: model.title,
        cover: model.cover,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        description: model.description,
        total_likes: model.total_likes,
        content_type: model.content_type,
        url: model.url,
    }
}
