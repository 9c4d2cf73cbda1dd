//! Image generation handler.

use actix_web::{HttpResponse, web};

use cadence_shared::dto::{GenerateImagesRequest, ImagesResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/images/generate
pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GenerateImagesRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt must not be empty".to_string()));
    }
    let count = req.count.unwrap_or(1);
    if !(1..=10).contains(&count) {
        return Err(AppError::Validation(
            "count must be between 1 and 10".to_string(),
        ));
    }

    let image_urls = state.images.generate(&req.prompt, count).await?;
    Ok(HttpResponse::Ok().json(ImagesResponse { image_urls }))
}

#[cfg(test)]
mod tests {
    use crate::handlers::testing::{test_app, test_state};
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn generates_the_requested_number_of_images() {
        let app = test_app!(test_state());
        let req = test::TestRequest::post()
            .uri("/api/images/generate")
            .set_json(json!({ "prompt": "a red bicycle", "count": 4 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: cadence_shared::dto::ImagesResponse = test::read_body_json(resp).await;
        assert_eq!(body.image_urls.len(), 4);
    }

    #[actix_web::test]
    async fn zero_count_is_unprocessable() {
        let app = test_app!(test_state());
        let req = test::TestRequest::post()
            .uri("/api/images/generate")
            .set_json(json!({ "prompt": "a red bicycle", "count": 0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
