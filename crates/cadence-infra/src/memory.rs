//! In-memory post repository - used as fallback when no database is
//! configured, and as the test double for the repository contract.
//!
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use cadence_core::domain::{DateRange, Post, PostStatus};
use cadence_core::error::RepoError;
use cadence_core::ports::PostRepository;

/// Post repository backed by a HashMap behind an async RwLock.
///
/// Every write happens inside one write-lock critical section, so updates
/// and deletes on a single id appear atomic to concurrent callers.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint("Post already exists".to_string()));
        }
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn find_by_owner(
        &self,
        owner_id: Uuid,
        range: Option<&DateRange>,
    ) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store
            .values()
            .filter(|post| post.owner_id == owner_id)
            .filter(|post| range.is_none_or(|window| post.occurs_within(window)))
            .cloned()
            .collect();

        // Ascending by scheduled date; undated drafts sort last.
        posts.sort_by_key(|post| (post.scheduled_date.is_none(), post.scheduled_date));
        Ok(posts)
    }

    async fn find_due(&self, now: DateTime<Utc>) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .filter(|post| {
                post.status == PostStatus::Scheduled
                    && post.scheduled_date.is_some_and(|date| date <= now)
            })
            .cloned()
            .collect())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        match store.get_mut(&post.id) {
            Some(existing) => {
                *existing = post.clone();
                Ok(post)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        match store.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}
