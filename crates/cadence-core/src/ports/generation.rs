//! Generation ports - the AI provider collaborators.
//!
//! The core issues a request, awaits a single response or failure, and never
//! holds a lock while waiting. Retry policy, if any, belongs to the
//! implementations' callers, not here.

use async_trait::async_trait;

use crate::error::UpstreamError;

/// Input for a caption generation call.
#[derive(Debug, Clone, Default)]
pub struct CaptionPrompt {
    pub prompt: String,
    pub image_description: Option<String>,
    pub additional_context: Option<String>,
}

/// Parameters for composing a short video from a sequence of images.
#[derive(Debug, Clone)]
pub struct VideoSpec {
    pub image_refs: Vec<String>,
    pub duration_per_image: f32,
    /// Motion intensity, 1..=5.
    pub motion_strength: u8,
    pub caption: String,
    pub audio_ref: Option<String>,
}

/// Produces a social-media caption for a prompt.
#[async_trait]
pub trait CaptionGenerator: Send + Sync {
    async fn generate(&self, prompt: CaptionPrompt) -> Result<String, UpstreamError>;

    /// Describe an image by its URL. Used when a post is created with an
    /// image but no description.
    async fn describe_image(&self, image_url: &str) -> Result<String, UpstreamError>;
}

/// Produces images for a prompt, returning their URLs.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, count: u8) -> Result<Vec<String>, UpstreamError>;
}

/// Composes a video from images, a caption and optional audio,
/// returning the video URL.
#[async_trait]
pub trait VideoComposer: Send + Sync {
    async fn compose(&self, spec: VideoSpec) -> Result<String, UpstreamError>;
}
