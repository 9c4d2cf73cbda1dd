//! Liveness endpoint.

use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    checked_at: DateTime<Utc>,
}

/// GET /api/health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(Health {
        status: "ok",
        service: "cadence-api",
        version: env!("CARGO_PKG_VERSION"),
        checked_at: Utc::now(),
    })
}
