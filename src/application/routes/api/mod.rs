pub(crate) mod health;
pub(crate) mod thumbnails;
pub(crate) mod titles;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

use crate::application::rate_limit::RateLimitLayer;
use crate::application::routes::BODY_LIMIT_BYTES;
use crate::application::state::AppState;

pub(super) fn router(ai_rate_limit: RateLimitLayer) -> axum::Router<AppState> {
    axum::Router::new()
        .route("/health", get(health::health))
        .merge(ai_routes(ai_rate_limit))
        .route(
            "/thumbnails/enhance",
            post(thumbnails::enhance_thumbnail).layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
        )
}

/// Routes that may call the remote model, sharing one per-IP budget.
fn ai_routes(ai_rate_limit: RateLimitLayer) -> axum::Router<AppState> {
    axum::Router::new()
        .route("/titles/optimize", post(titles::optimize_titles))
        .route(
            "/thumbnails/analyze",
            post(thumbnails::analyze_thumbnail).layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
        )
        .route_layer(ai_rate_limit)
}
