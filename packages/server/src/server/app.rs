//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    clear_result_handler, create_playoffs_handler, delete_playoffs_handler, health_handler,
    list_playoffs_handler, report_result_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/playoffs", post(create_playoffs_handler))
        .route(
            "/playoffs/:season",
            get(list_playoffs_handler).delete(delete_playoffs_handler),
        )
        .route(
            "/playoffs/:season/results",
            post(report_result_handler).delete(clear_result_handler),
        )
        .layer(Extension(AppState { db_pool: pool }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
