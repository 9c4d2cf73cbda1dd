use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{DateRange, Post};
use crate::error::RepoError;

/// Persistence boundary for posts.
///
/// `update` and `delete` on one id must appear atomic to concurrent callers;
/// concurrent updates resolve last-write-wins with `updated_at` reflecting
/// the winner. No cross-record transactions are required.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post. Fails with `Constraint` if the id already exists.
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    /// Find a post by its unique id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// All posts for an owner, ascending by scheduled date.
    ///
    /// With a range, only posts with at least one occurrence inside the
    /// window are returned - a recurring post anchored before the window
    /// still counts.
    async fn find_by_owner(
        &self,
        owner_id: Uuid,
        range: Option<&DateRange>,
    ) -> Result<Vec<Post>, RepoError>;

    /// Scheduled posts whose scheduled date has passed at `now`.
    async fn find_due(&self, now: DateTime<Utc>) -> Result<Vec<Post>, RepoError>;

    /// Replace an existing post. Fails with `NotFound` for an unknown id;
    /// never creates a record.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Remove a post. Fails with `NotFound` when the id is absent, so a
    /// second delete of the same id fails.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
