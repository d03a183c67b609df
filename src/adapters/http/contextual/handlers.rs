//! HTTP handler for the contextual-data endpoint.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::destination;

use super::dto::{ContextualDataParams, ContextualDataResponse, DestinationRecordView};

/// GET /api/contextual-data?destination=<string> - Destination summary.
///
/// Always 200: the lookup is total, so unknown and empty queries come back
/// as synthesized records rather than errors.
pub async fn get_contextual_data(Query(params): Query<ContextualDataParams>) -> impl IntoResponse {
    let query = params.destination.unwrap_or_default();
    let record = destination::lookup(&query);

    tracing::debug!(destination = %query, resolved = %record.name, "contextual data lookup");

    (
        StatusCode::OK,
        Json(ContextualDataResponse {
            data: DestinationRecordView::from(record),
        }),
    )
}
