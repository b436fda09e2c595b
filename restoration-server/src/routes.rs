//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Development origins allowed when none are configured
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let allow_origin = match origins {
        Some("*") => AllowOrigin::any(),
        Some(origins) => AllowOrigin::list(
            origins
                .split(',')
                .filter_map(|s| s.trim().parse::<HeaderValue>().ok()),
        ),
        None => AllowOrigin::list(DEV_ORIGINS.into_iter().map(HeaderValue::from_static)),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.settings.cors_origins.as_deref());

    let api_routes = Router::new()
        // Reading plan
        .route("/reading/today", get(handlers::today_reading))
        .route("/schedule", get(handlers::full_schedule))
        .route("/history", get(handlers::history))
        .route("/messages", get(handlers::messages))
        .route("/reflections/:kind", get(handlers::get_reflection))
        // Journal
        .route(
            "/diary/:date",
            get(handlers::get_diary).post(handlers::save_diary),
        )
        .route(
            "/mission/:date",
            get(handlers::get_mission).post(handlers::save_mission),
        )
        // SSE endpoint
        .route("/sync", get(handlers::sync_events));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
