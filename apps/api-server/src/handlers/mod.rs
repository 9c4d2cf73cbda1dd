//! HTTP handlers and route configuration.

mod calendar;
mod captions;
mod health;
mod images;
mod videos;

use actix_web::web;

#[cfg(test)]
pub(crate) mod testing;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/calendar")
                    .route("/posts", web::get().to(calendar::list_posts))
                    .route("/posts", web::post().to(calendar::create_post))
                    .route("/posts/{id}", web::get().to(calendar::get_post))
                    .route("/posts/{id}", web::put().to(calendar::update_post))
                    .route("/posts/{id}", web::delete().to(calendar::delete_post))
                    .route("/events", web::get().to(calendar::events)),
            )
            .service(
                web::scope("/captions").route("/generate", web::post().to(captions::generate)),
            )
            .service(web::scope("/images").route("/generate", web::post().to(images::generate)))
            .service(web::scope("/videos").route("/generate", web::post().to(videos::generate))),
    );
}
