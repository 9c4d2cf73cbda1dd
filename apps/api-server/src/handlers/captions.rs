//! Caption generation handler.

use actix_web::{HttpResponse, web};

use cadence_core::ports::CaptionPrompt;
use cadence_shared::dto::{CaptionResponse, GenerateCaptionRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/captions/generate
pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GenerateCaptionRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt must not be empty".to_string()));
    }

    let caption = state
        .captions
        .generate(CaptionPrompt {
            prompt: req.prompt,
            image_description: req.image_description,
            additional_context: req.additional_context,
        })
        .await?;

    Ok(HttpResponse::Ok().json(CaptionResponse { caption }))
}

#[cfg(test)]
mod tests {
    use crate::handlers::testing::{failing_state, test_app, test_state};
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn generates_a_caption() {
        let app = test_app!(test_state());
        let req = test::TestRequest::post()
            .uri("/api/captions/generate")
            .set_json(json!({ "prompt": "autumn coffee promo" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: cadence_shared::dto::CaptionResponse = test::read_body_json(resp).await;
        assert_eq!(body.caption, "stub caption");
    }

    #[actix_web::test]
    async fn upstream_failure_maps_to_bad_gateway() {
        let app = test_app!(failing_state());
        let req = test::TestRequest::post()
            .uri("/api/captions/generate")
            .set_json(json!({ "prompt": "autumn coffee promo" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: cadence_shared::ErrorResponse = test::read_body_json(resp).await;
        // The provider message is passed through verbatim.
        assert_eq!(body.detail.as_deref(), Some("provider exploded"));
    }

    #[actix_web::test]
    async fn empty_prompt_is_unprocessable() {
        let app = test_app!(test_state());
        let req = test::TestRequest::post()
            .uri("/api/captions/generate")
            .set_json(json!({ "prompt": "  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
