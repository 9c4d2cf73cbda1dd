//! Shared test fixtures for handler tests.

use std::sync::Arc;

use async_trait::async_trait;

use cadence_core::PostService;
use cadence_core::error::UpstreamError;
use cadence_core::ports::{
    CaptionGenerator, CaptionPrompt, ImageGenerator, VideoComposer, VideoSpec,
};
use cadence_infra::InMemoryPostRepository;

use crate::state::AppState;

/// Generation provider that answers every call with a fixed value.
pub struct StubProvider;

#[async_trait]
impl CaptionGenerator for StubProvider {
    async fn generate(&self, _prompt: CaptionPrompt) -> Result<String, UpstreamError> {
        Ok("stub caption".to_string())
    }

    async fn describe_image(&self, _image_url: &str) -> Result<String, UpstreamError> {
        Ok("stub description".to_string())
    }
}

#[async_trait]
impl ImageGenerator for StubProvider {
    async fn generate(&self, _prompt: &str, count: u8) -> Result<Vec<String>, UpstreamError> {
        Ok((0..count)
            .map(|i| format!("https://img.example/{i}.png"))
            .collect())
    }
}

#[async_trait]
impl VideoComposer for StubProvider {
    async fn compose(&self, _spec: VideoSpec) -> Result<String, UpstreamError> {
        Ok("https://video.example/out.mp4".to_string())
    }
}

/// Generation provider that fails every call with a fixed upstream message.
pub struct FailingProvider;

#[async_trait]
impl CaptionGenerator for FailingProvider {
    async fn generate(&self, _prompt: CaptionPrompt) -> Result<String, UpstreamError> {
        Err(UpstreamError("provider exploded".to_string()))
    }

    async fn describe_image(&self, _image_url: &str) -> Result<String, UpstreamError> {
        Err(UpstreamError("provider exploded".to_string()))
    }
}

#[async_trait]
impl ImageGenerator for FailingProvider {
    async fn generate(&self, _prompt: &str, _count: u8) -> Result<Vec<String>, UpstreamError> {
        Err(UpstreamError("provider exploded".to_string()))
    }
}

#[async_trait]
impl VideoComposer for FailingProvider {
    async fn compose(&self, _spec: VideoSpec) -> Result<String, UpstreamError> {
        Err(UpstreamError("provider exploded".to_string()))
    }
}

/// In-memory state with stub providers.
pub fn test_state() -> AppState {
    let provider = Arc::new(StubProvider);
    AppState {
        posts: PostService::new(Arc::new(InMemoryPostRepository::new())),
        captions: provider.clone(),
        images: provider.clone(),
        videos: provider,
    }
}

/// In-memory state whose providers always fail.
pub fn failing_state() -> AppState {
    let provider = Arc::new(FailingProvider);
    AppState {
        posts: PostService::new(Arc::new(InMemoryPostRepository::new())),
        captions: provider.clone(),
        images: provider.clone(),
        videos: provider,
    }
}

/// Build an initialized test service over the full route table.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .configure(crate::handlers::configure_routes),
        )
        .await
    };
}

pub(crate) use test_app;
