//! PostgreSQL post repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use cadence_core::domain::{DateRange, Post};
use cadence_core::error::RepoError;
use cadence_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// Post repository backed by PostgreSQL via SeaORM.
///
/// Each write is a single statement, so updates and deletes on one id are
/// atomic at the database; concurrent updates resolve last-write-wins.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(|e| {
            let message = e.to_string();
            if message.contains("duplicate") || message.contains("unique") {
                RepoError::Constraint("Post already exists".to_string())
            } else {
                RepoError::Query(message)
            }
        })?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;
        Ok(result.map(Into::into))
    }

    async fn find_by_owner(
        &self,
        owner_id: Uuid,
        range: Option<&DateRange>,
    ) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find()
            .filter(post::Column::OwnerId.eq(owner_id))
            .order_by_asc(post::Column::ScheduledDate);

        // SQL pre-filter: a post can only occur inside the window if its
        // anchor is before the window end. The exact occurrence check runs
        // on the domain model below, where the recurrence policy lives.
        if let Some(window) = range {
            query = query.filter(post::Column::ScheduledDate.lt(window.end));
        }

        let models = query
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(models
            .into_iter()
            .map(Post::from)
            .filter(|post| range.is_none_or(|window| post.occurs_within(window)))
            .collect())
    }

    async fn find_due(&self, now: DateTime<Utc>) -> Result<Vec<Post>, RepoError> {
        let models = PostEntity::find()
            .filter(post::Column::Status.eq(post::Status::Scheduled))
            .filter(post::Column::ScheduledDate.lte(now))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = post.into();
        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => RepoError::Query(other.to_string()),
        })?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
