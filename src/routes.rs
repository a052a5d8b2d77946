// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{method_not_allowed, panic_response},
    handlers::{status, submit},
    state::AppState,
};

/// Assembles the main application router.
///
/// * `/api/submit` answers CORS preflights for any origin; other methods get 405.
/// * `/api/test` is a plain liveness probe without CORS; only GET is served, HEAD included in the 405s.
/// * Applies global middleware (Trace, panic catching).
pub fn create_router(state: AppState) -> Router {
    // OPTIONS requests are answered by the layer itself with 200 and an empty body.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let submit_routes = Router::new()
        .route(
            "/submit",
            post(submit::submit_quiz).fallback(method_not_allowed),
        )
        .layer(cors);

    let status_routes = Router::new().route(
        "/test",
        get(status::status)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    );

    Router::new()
        .nest("/api", submit_routes.merge(status_routes))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
        .with_state(state)
}
