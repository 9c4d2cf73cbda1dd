//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a post.
///
/// `frequency` is one of `none|daily|weekly|monthly` (default `none`);
/// `status` is one of `draft|scheduled|published` (default `draft`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub owner_id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub image_description: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub frequency: Option<String>,
    pub status: Option<String>,
}

/// Partial update of a post. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub image_description: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub frequency: Option<String>,
    pub status: Option<String>,
}

/// Query parameters for listing posts or projecting calendar events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarQuery {
    pub owner_id: Uuid,
    /// Window start (inclusive). Both bounds must be given to apply a window.
    pub start: Option<DateTime<Utc>>,
    /// Window end (exclusive).
    pub end: Option<DateTime<Utc>>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub image_description: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub frequency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One calendar cell entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventResponse {
    pub post_id: Uuid,
    pub occurrence_date: DateTime<Utc>,
    pub title: String,
}

/// Request to generate a caption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateCaptionRequest {
    pub prompt: String,
    pub image_description: Option<String>,
    pub additional_context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionResponse {
    pub caption: String,
}

/// Request to generate images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImagesRequest {
    pub prompt: String,
    /// Number of images to produce. Defaults to 1.
    pub count: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub image_urls: Vec<String>,
}

/// Request to compose a video from a sequence of images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeVideoRequest {
    pub image_refs: Vec<String>,
    /// Seconds each image stays on screen.
    pub duration_per_image: f32,
    /// Motion intensity, 1..=5.
    pub motion_strength: u8,
    pub caption: String,
    pub audio_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResponse {
    pub video_url: String,
}
