//! Calendar post handlers - CRUD plus the calendar projection.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use cadence_core::domain::{
    DateRange, Frequency, NewPost, Post, PostPatch, PostStatus, project_events,
};
use cadence_shared::dto::{
    CalendarEventResponse, CalendarQuery, CreatePostRequest, PostResponse, UpdatePostRequest,
};
use cadence_shared::response::ApiResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn parse_frequency(value: &str) -> Result<Frequency, AppError> {
    match value {
        "none" => Ok(Frequency::None),
        "daily" => Ok(Frequency::Daily),
        "weekly" => Ok(Frequency::Weekly),
        "monthly" => Ok(Frequency::Monthly),
        other => Err(AppError::BadRequest(format!(
            "unknown frequency '{other}', expected none|daily|weekly|monthly"
        ))),
    }
}

fn parse_status(value: &str) -> Result<PostStatus, AppError> {
    match value {
        "draft" => Ok(PostStatus::Draft),
        "scheduled" => Ok(PostStatus::Scheduled),
        "published" => Ok(PostStatus::Published),
        other => Err(AppError::BadRequest(format!(
            "unknown status '{other}', expected draft|scheduled|published"
        ))),
    }
}

/// Both bounds make a window; neither means "no filter"; one alone is an error.
fn window_from(query: &CalendarQuery) -> Result<Option<DateRange>, AppError> {
    match (query.start, query.end) {
        (Some(start), Some(end)) => Ok(Some(DateRange::new(start, end))),
        (None, None) => Ok(None),
        _ => Err(AppError::BadRequest(
            "start and end must be supplied together".to_string(),
        )),
    }
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        owner_id: post.owner_id,
        title: post.title,
        content: post.content,
        caption: post.caption,
        image_url: post.image_url,
        image_description: post.image_description,
        scheduled_date: post.scheduled_date,
        frequency: post.frequency.to_string(),
        status: post.status.to_string(),
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// GET /api/calendar/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<CalendarQuery>,
) -> AppResult<HttpResponse> {
    let window = window_from(&query)?;
    let posts = state.posts.list(query.owner_id, window.as_ref()).await?;
    let responses: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(responses))
}

/// POST /api/calendar/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let frequency = req
        .frequency
        .as_deref()
        .map(parse_frequency)
        .transpose()?
        .unwrap_or_default();
    let status = req
        .status
        .as_deref()
        .map(parse_status)
        .transpose()?
        .unwrap_or_default();

    // A post arriving with an image but no description gets one from the
    // caption provider. This is the one upstream failure that is tolerated:
    // the post is still created, just without a description.
    let image_description = match (&req.image_url, req.image_description) {
        (Some(url), None) => match state.captions.describe_image(url).await {
            Ok(description) => Some(description),
            Err(e) => {
                tracing::warn!(error = %e, "Image description generation failed");
                None
            }
        },
        (_, description) => description,
    };

    let post = state
        .posts
        .create(NewPost {
            owner_id: req.owner_id,
            title: req.title,
            content: req.content,
            caption: req.caption,
            image_url: req.image_url,
            image_description,
            scheduled_date: req.scheduled_date,
            frequency,
            status,
        })
        .await?;

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/calendar/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /api/calendar/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        content: req.content,
        caption: req.caption,
        image_url: req.image_url,
        image_description: req.image_description,
        scheduled_date: req.scheduled_date,
        frequency: req.frequency.as_deref().map(parse_frequency).transpose()?,
        status: req.status.as_deref().map(parse_status).transpose()?,
    };

    let post = state.posts.update(path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/calendar/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Post deleted successfully")))
}

/// GET /api/calendar/events - project posts into calendar events.
pub async fn events(
    state: web::Data<AppState>,
    query: web::Query<CalendarQuery>,
) -> AppResult<HttpResponse> {
    let window = window_from(&query)?.ok_or_else(|| {
        AppError::BadRequest("start and end are required for event projection".to_string())
    })?;

    let posts = state.posts.list(query.owner_id, Some(&window)).await?;
    let responses: Vec<CalendarEventResponse> = project_events(&posts, &window)
        .into_iter()
        .map(|event| CalendarEventResponse {
            post_id: event.post_id,
            occurrence_date: event.occurrence_date,
            title: event.title,
        })
        .collect();

    Ok(HttpResponse::Ok().json(responses))
}
