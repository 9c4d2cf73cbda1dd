//! Video composition provider client.
//!
//! The composition itself (image motion, concatenation, audio track) happens
//! entirely at the provider; this client only uploads the parameters and
//! returns the resulting video URL.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use cadence_core::error::UpstreamError;
use cadence_core::ports::{VideoComposer, VideoSpec};

/// Configuration for the video composition provider.
#[derive(Debug, Clone)]
pub struct VideoProviderConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl VideoProviderConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("VIDEO_API_KEY").unwrap_or_default(),
            endpoint: std::env::var("VIDEO_API_URL")
                .unwrap_or_else(|_| "https://cloud.leonardo.ai/api/rest/v1".to_string()),
        }
    }
}

#[derive(Serialize)]
struct ComposeRequest<'a> {
    image_refs: &'a [String],
    duration_per_image: f32,
    motion_strength: u8,
    caption: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    audio_ref: Option<&'a str>,
}

#[derive(Deserialize)]
struct ComposeResponse {
    video_url: String,
}

/// Composes short videos through the motion provider's REST API.
pub struct MotionVideoClient {
    http: reqwest::Client,
    config: VideoProviderConfig,
}

impl MotionVideoClient {
    pub fn new(config: VideoProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl VideoComposer for MotionVideoClient {
    async fn compose(&self, spec: VideoSpec) -> Result<String, UpstreamError> {
        tracing::debug!(
            images = spec.image_refs.len(),
            motion_strength = spec.motion_strength,
            "Requesting video composition"
        );

        let request = ComposeRequest {
            image_refs: &spec.image_refs,
            duration_per_image: spec.duration_per_image,
            motion_strength: spec.motion_strength,
            caption: &spec.caption,
            audio_ref: spec.audio_ref.as_deref(),
        };

        let url = format!(
            "{}/videos/compositions",
            self.config.endpoint.trim_end_matches('/')
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| UpstreamError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.to_string()
            } else {
                body
            };
            return Err(UpstreamError(message));
        }

        let parsed: ComposeResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError(e.to_string()))?;
        Ok(parsed.video_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_request_omits_absent_audio() {
        let images = vec!["img-1".to_string()];
        let request = ComposeRequest {
            image_refs: &images,
            duration_per_image: 2.5,
            motion_strength: 3,
            caption: "hello",
            audio_ref: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("audio_ref").is_none());
        assert_eq!(json["motion_strength"], 3);
    }
}
