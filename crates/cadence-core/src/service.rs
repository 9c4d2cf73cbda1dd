//! Post service - the entity-boundary operations over the repository port.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{DateRange, NewPost, Post, PostPatch, PostStatus};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Create/list/update/delete posts with validation and lifecycle checks.
///
/// Everything here surfaces `DomainError`; repository failures that are not
/// "row missing" become `Internal` with the backend message.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Validate the fields, assign id and timestamps, persist.
    pub async fn create(&self, fields: NewPost) -> Result<Post, DomainError> {
        let post = Post::new(fields)?;
        let saved = self
            .repo
            .create(post)
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        tracing::debug!(post_id = %saved.id, status = %saved.status, "Post created");
        Ok(saved)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(DomainError::NotFound {
                entity_type: "post",
                id,
            })
    }

    /// All posts for an owner, optionally narrowed to a display window.
    pub async fn list(
        &self,
        owner_id: Uuid,
        range: Option<&DateRange>,
    ) -> Result<Vec<Post>, DomainError> {
        self.repo.find_by_owner(owner_id, range).await.map_err(internal)
    }

    /// Apply a partial update to an existing post.
    ///
    /// Fails with `NotFound` for an unknown id and never creates a record;
    /// patch validation and the status lifecycle are enforced before the
    /// write, and `updated_at` is refreshed on success.
    pub async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, DomainError> {
        let mut post = self.get(id).await?;
        post.apply(patch)?;
        self.repo.update(post).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "post",
                id,
            },
            other => DomainError::Internal(other.to_string()),
        })
    }

    /// Remove a post. The second delete of the same id fails with `NotFound`.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "post",
                id,
            },
            other => DomainError::Internal(other.to_string()),
        })
    }

    /// Publish every scheduled post whose date has passed at `now`.
    ///
    /// This is the entry point for the external publish trigger (the
    /// periodic checker). Returns how many posts were published; a post
    /// that fails to publish is logged and skipped so one bad record does
    /// not stall the sweep.
    pub async fn publish_due(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let due = self.repo.find_due(now).await.map_err(internal)?;
        let mut published = 0;

        for mut post in due {
            if let Err(e) = post.transition_to(PostStatus::Published) {
                tracing::warn!(post_id = %post.id, error = %e, "Skipping unpublishable post");
                continue;
            }
            post.updated_at = Utc::now();
            match self.repo.update(post.clone()).await {
                Ok(_) => {
                    published += 1;
                    tracing::info!(post_id = %post.id, "Post published");
                }
                Err(e) => {
                    tracing::warn!(post_id = %post.id, error = %e, "Failed to publish post");
                }
            }
        }

        Ok(published)
    }
}

fn internal(e: RepoError) -> DomainError {
    DomainError::Internal(e.to_string())
}
