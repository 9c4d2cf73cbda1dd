//! OpenAI-style provider client for captions, image descriptions and images.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use cadence_core::error::UpstreamError;
use cadence_core::ports::{CaptionGenerator, CaptionPrompt, ImageGenerator};

/// Configuration for the text/image generation provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            endpoint: std::env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
        }
    }
}

/// Caption and image generation over the OpenAI HTTP API.
///
/// Failures are passed through verbatim as `UpstreamError`; no retries here.
pub struct OpenAiClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Serialize)]
struct ImagesRequest<'a> {
    prompt: &'a str,
    n: u8,
    size: &'a str,
}

#[derive(Deserialize)]
struct ImagesApiResponse {
    data: Vec<ImageDatum>,
}

#[derive(Deserialize)]
struct ImageDatum {
    url: String,
}

impl OpenAiClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, UpstreamError>
    where
        B: Serialize + Sync,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.config.endpoint.trim_end_matches('/'), path);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(body)
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

        response
            .json::<R>()
            .await
            .map_err(|e| UpstreamError(e.to_string()))
    }

    async fn chat(&self, content: String) -> Result<String, UpstreamError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content,
            }],
        };
        let response: ChatResponse = self.post_json("/chat/completions", &request).await?;
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| UpstreamError("provider returned no completion choices".to_string()))
    }
}

/// Assemble the caption prompt from the pieces the caller supplied.
fn caption_prompt_text(prompt: &CaptionPrompt) -> String {
    let mut text = String::from("Generate a creative and engaging social media caption");
    if let Some(description) = &prompt.image_description {
        text.push_str(&format!(" for an image that shows: {description}"));
    }
    if let Some(context) = &prompt.additional_context {
        text.push_str(&format!("\nAdditional context: {context}"));
    }
    text.push_str(&format!(
        "\nMake it engaging and relevant to: {}",
        prompt.prompt
    ));
    text
}

#[async_trait]
impl CaptionGenerator for OpenAiClient {
    async fn generate(&self, prompt: CaptionPrompt) -> Result<String, UpstreamError> {
        tracing::debug!(model = %self.config.model, "Requesting caption generation");
        self.chat(caption_prompt_text(&prompt)).await
    }

    async fn describe_image(&self, image_url: &str) -> Result<String, UpstreamError> {
        self.chat(format!(
            "Please describe this image in detail: {image_url}"
        ))
        .await
    }
}

#[async_trait]
impl ImageGenerator for OpenAiClient {
    async fn generate(&self, prompt: &str, count: u8) -> Result<Vec<String>, UpstreamError> {
        tracing::debug!(count, "Requesting image generation");
        let request = ImagesRequest {
            prompt,
            n: count,
            size: "1024x1024",
        };
        let response: ImagesApiResponse = self.post_json("/images/generations", &request).await?;
        Ok(response.data.into_iter().map(|datum| datum.url).collect())
    }
}
