// crates/server/src/routes/download.rs
//! Download endpoint for the enriched dataset.

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Fixed filename for the downloaded artifact.
pub const DOWNLOAD_FILENAME: &str = "classified_medical_conditions.csv";

/// GET /api/download - Download the last enriched dataset as CSV.
///
/// Returns 404 until a classification run has completed.
pub async fn download(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let dataset = state.last_result().ok_or(ApiError::NoResult)?;

    let csv = dataset
        .to_csv_bytes()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(rows = dataset.row_count(), bytes = csv.len(), "serving download");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME),
            ),
        ],
        csv,
    )
        .into_response())
}

/// Create the download routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/download", get(download))
}
