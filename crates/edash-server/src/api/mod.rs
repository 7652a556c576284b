mod feeds;

use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use edash_feeds::FeedAggregator;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<FeedAggregator>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/rijksoverheid", get(feeds::get_publications))
        .route("/api/debatten", get(feeds::get_activities))
        .route("/api/health", get(health))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

/// Dashboard API plus static assets served from `static_dir`.
pub fn build_app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(api_router())
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(CompressionLayer::new())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}
