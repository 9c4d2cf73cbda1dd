//! # Cadence API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

#[cfg(feature = "scheduler")]
mod background;
mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry();

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Cadence API Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state
    let state = AppState::new(&config).await;

    // Background publish checker - the external trigger that moves due
    // posts from scheduled to published.
    #[cfg(feature = "scheduler")]
    let _publisher = match background::spawn_publish_checker(
        state.posts.clone(),
        &config.publish_check_cron,
    )
    .await
    {
        Ok(scheduler) => Some(scheduler),
        Err(e) => {
            tracing::error!("Failed to start publish checker: {}", e);
            None
        }
    };

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
