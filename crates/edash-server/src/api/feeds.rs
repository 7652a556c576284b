use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use edash_feeds::{FeedError, LegislativeActivity, Publication, ResultEnvelope};
use serde::Serialize;

use crate::middleware::RequestId;

use super::AppState;

pub(super) const PUBLICATIONS_UNAVAILABLE: &str =
    "Kon publicaties van Rijksoverheid niet ophalen.";
pub(super) const ACTIVITIES_UNAVAILABLE: &str = "Kon debatten van Tweede Kamer niet ophalen.";

/// Failure payload when an upstream source could not be used.
///
/// `detail` carries the underlying cause for diagnostics.
#[derive(Debug, Serialize)]
pub(super) struct SourceUnavailable {
    error: &'static str,
    detail: String,
}

impl SourceUnavailable {
    fn new(message: &'static str, source: &'static str, req_id: &RequestId, e: &FeedError) -> Self {
        tracing::warn!(
            request_id = %req_id.0,
            source,
            error = %e,
            "upstream source unavailable"
        );
        Self {
            error: message,
            detail: e.to_string(),
        }
    }
}

impl IntoResponse for SourceUnavailable {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(self)).into_response()
    }
}

pub(super) async fn get_publications(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ResultEnvelope<Publication>>, SourceUnavailable> {
    state
        .aggregator
        .fetch_publications()
        .await
        .map(Json)
        .map_err(|e| SourceUnavailable::new(PUBLICATIONS_UNAVAILABLE, "publications", &req_id, &e))
}

pub(super) async fn get_activities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ResultEnvelope<LegislativeActivity>>, SourceUnavailable> {
    state
        .aggregator
        .fetch_activities()
        .await
        .map(Json)
        .map_err(|e| SourceUnavailable::new(ACTIVITIES_UNAVAILABLE, "activities", &req_id, &e))
}
