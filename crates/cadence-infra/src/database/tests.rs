#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use cadence_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn sample_model(id: uuid::Uuid) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            owner_id: uuid::Uuid::new_v4(),
            title: "Launch announcement".to_owned(),
            content: Some("Body".to_owned()),
            caption: None,
            image_url: None,
            image_description: None,
            scheduled_date: Some(now.into()),
            frequency: post::Frequency::Weekly,
            status: post::Status::Scheduled,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(post_id)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result = repo.find_by_id(post_id).await.unwrap();

        let found = result.unwrap();
        assert_eq!(found.id, post_id);
        assert_eq!(found.title, "Launch announcement");
        assert_eq!(found.frequency, cadence_core::domain::Frequency::Weekly);
        assert_eq!(found.status, cadence_core::domain::PostStatus::Scheduled);
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let err = repo.delete(uuid::Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, cadence_core::error::RepoError::NotFound));
    }
}
