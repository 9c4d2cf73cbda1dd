//! Application state - shared across all handlers.

use std::sync::Arc;

use cadence_core::PostService;
use cadence_core::ports::{CaptionGenerator, ImageGenerator, PostRepository, VideoComposer};
use cadence_infra::generation::{
    MotionVideoClient, OpenAiClient, ProviderConfig, VideoProviderConfig,
};
use cadence_infra::memory::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub captions: Arc<dyn CaptionGenerator>,
    pub images: Arc<dyn ImageGenerator>,
    pub videos: Arc<dyn VideoComposer>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let repo = Self::build_repository(config).await;

        // One OpenAI client serves both the caption and the image port.
        let provider = Arc::new(OpenAiClient::new(ProviderConfig::from_env()));
        let videos = Arc::new(MotionVideoClient::new(VideoProviderConfig::from_env()));

        tracing::info!("Application state initialized");

        Self {
            posts: PostService::new(repo),
            captions: provider.clone(),
            images: provider,
            videos,
        }
    }

    #[cfg(feature = "postgres")]
    async fn build_repository(config: &AppConfig) -> Arc<dyn PostRepository> {
        use cadence_infra::PostgresPostRepository;
        use cadence_infra::database::connect;

        if let Some(db_config) = &config.database {
            match connect(db_config).await {
                Ok(conn) => return Arc::new(PostgresPostRepository::new(conn)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }
        Arc::new(InMemoryPostRepository::new())
    }

    #[cfg(not(feature = "postgres"))]
    async fn build_repository(_config: &AppConfig) -> Arc<dyn PostRepository> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryPostRepository::new())
    }
}
