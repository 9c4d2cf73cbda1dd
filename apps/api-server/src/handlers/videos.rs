//! Video composition handler.

use actix_web::{HttpResponse, web};

use cadence_core::ports::VideoSpec;
use cadence_shared::dto::{ComposeVideoRequest, VideoResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/videos/generate
pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<ComposeVideoRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.image_refs.is_empty() {
        return Err(AppError::Validation(
            "at least one image is required".to_string(),
        ));
    }
    if !(1..=5).contains(&req.motion_strength) {
        return Err(AppError::Validation(
            "motion_strength must be between 1 and 5".to_string(),
        ));
    }
    if req.duration_per_image <= 0.0 {
        return Err(AppError::Validation(
            "duration_per_image must be positive".to_string(),
        ));
    }

    let video_url = state
        .videos
        .compose(VideoSpec {
            image_refs: req.image_refs,
            duration_per_image: req.duration_per_image,
            motion_strength: req.motion_strength,
            caption: req.caption,
            audio_ref: req.audio_ref,
        })
        .await?;

    Ok(HttpResponse::Ok().json(VideoResponse { video_url }))
}

#[cfg(test)]
mod tests {
    use crate::handlers::testing::{test_app, test_state};
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn composes_a_video() {
        let app = test_app!(test_state());
        let req = test::TestRequest::post()
            .uri("/api/videos/generate")
            .set_json(json!({
                "image_refs": ["https://img.example/a.png", "https://img.example/b.png"],
                "duration_per_image": 2.5,
                "motion_strength": 3,
                "caption": "Summer highlights"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: cadence_shared::dto::VideoResponse = test::read_body_json(resp).await;
        assert_eq!(body.video_url, "https://video.example/out.mp4");
    }

    #[actix_web::test]
    async fn out_of_range_motion_strength_is_unprocessable() {
        let app = test_app!(test_state());
        let req = test::TestRequest::post()
            .uri("/api/videos/generate")
            .set_json(json!({
                "image_refs": ["https://img.example/a.png"],
                "duration_per_image": 2.0,
                "motion_strength": 9,
                "caption": "x"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn empty_image_list_is_unprocessable() {
        let app = test_app!(test_state());
        let req = test::TestRequest::post()
            .uri("/api/videos/generate")
            .set_json(json!({
                "image_refs": [],
                "duration_per_image": 2.0,
                "motion_strength": 3,
                "caption": "x"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
