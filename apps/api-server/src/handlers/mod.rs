//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

use actix_web::web;

/// Configure all application routes.
///
/// The path shapes are part of the public surface and must not change:
/// posts list on `/`, post reads under `/tweets`, and the explicit
/// `/delete` and `/update` suffixes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::list))
        .route("/health", web::get().to(health::health_check))
        // Users
        .route("/signup", web::post().to(users::signup))
        .route("/login", web::post().to(users::login))
        .route("/users", web::get().to(users::list))
        .route("/users/{id}", web::get().to(users::get))
        .route("/users/{id}/delete", web::delete().to(users::delete))
        .route("/users/{id}/update", web::put().to(users::update))
        // Posts
        .route("/post", web::post().to(posts::create))
        .route("/tweets/{id}", web::get().to(posts::get))
        .route("/tweets/{id}/delete", web::delete().to(posts::delete))
        .route("/tweets/{id}/update", web::put().to(posts::update));
}
