use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;
use crate::AppState;

pub fn build_router(state: AppState, config: &Config) -> anyhow::Result<Router> {
    let mut allowed_origins = vec![config
        .frontend_url
        .parse::<HeaderValue>()
        .context("FRONTEND_URL is not a valid origin")?];
    for origin in &config.cors_extra_origins {
        match origin.parse::<HeaderValue>() {
            Ok(hv) => allowed_origins.push(hv),
            Err(_) => tracing::warn!(origin = %origin, "Ignoring invalid CORS origin"),
        }
    }

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        // Users
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::register_user),
        )
        // Moods. GET takes a user id, PUT and DELETE take a mood id.
        .route("/moods", post(handlers::moods::log_mood))
        .route(
            "/moods/:id",
            get(handlers::moods::list_moods)
                .put(handlers::moods::update_mood)
                .delete(handlers::moods::delete_mood),
        )
        // Stats
        .route(
            "/moods/stats/summary/:user_id",
            get(handlers::stats::mood_summary),
        )
        .route("/moods/recent/:user_id", get(handlers::stats::recent_moods))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
