//! # Chirp API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Chirp API Server on {}:{}",
        config.host,
        config.port
    );

    // Collections are never created by the store itself. A fresh deployment
    // seeds each file with [] before serving traffic.
    for file in [&config.users_file, &config.posts_file] {
        if !file.exists() {
            tracing::warn!(
                path = %file.display(),
                "collection file missing; seed it with [] or every request against it will fail"
            );
        }
    }

    let state = AppState::new(&config);

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
