// crates/server/src/routes/classify.rs
//! Upload-and-classify endpoint plus progress reporting.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use icd_tagger_core::Dataset;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// JSON preview of the enriched dataset.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ClassifyResponse {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub row_count: usize,
}

/// Progress of the current classification run.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct StatusResponse {
    pub status: String,
    pub total: u64,
    pub classified: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/classify - Upload a CSV and classify every row.
///
/// Expects a multipart form with a `file` field holding the CSV bytes.
/// The batch runs sequentially inside this handler; the response carries
/// the full enriched dataset once the last row finishes. Progress is
/// observable on GET /api/classify/status while the request is in flight.
pub async fn classify(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<ClassifyResponse>> {
    let mut file_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidUpload(e.to_string()))?
    {
        if field.name() == Some("file") {
            file_bytes = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::InvalidUpload(e.to_string()))?,
            );
        }
    }
    let file_bytes =
        file_bytes.ok_or_else(|| ApiError::InvalidUpload("missing 'file' field".to_string()))?;

    let input = Dataset::from_csv_bytes(&file_bytes)?;
    tracing::info!(rows = input.row_count(), columns = input.headers.len(), "upload received");

    state.classify.set_running(input.row_count() as u64);

    let progress = state.classify.clone();
    let output = match state
        .classifier
        .classify_dataset(&input, move |done, _total| {
            progress.set_classified(done as u64)
        })
        .await
    {
        Ok(output) => output,
        Err(e) => {
            state.classify.set_failed(e.to_string());
            return Err(e.into());
        }
    };

    state.classify.set_completed();
    state.store_result(output.clone());

    let row_count = output.row_count();
    Ok(Json(ClassifyResponse {
        headers: output.headers,
        rows: output.rows,
        row_count,
    }))
}

/// GET /api/classify/status - Progress of the current run.
pub async fn classify_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: state.classify.status().as_str().to_string(),
        total: state.classify.total(),
        classified: state.classify.classified(),
        error: state.classify.error_message(),
    })
}

/// Create the classify routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/classify", post(classify))
        .route("/classify/status", get(classify_status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_response_skips_absent_error() {
        let response = StatusResponse {
            status: "running".to_string(),
            total: 10,
            classified: 3,
            error: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"running\""));
        assert!(json.contains("\"classified\":3"));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_classify_response_serialization() {
        let response = ClassifyResponse {
            headers: vec!["Condition".to_string(), "Vorschlag_ICD10".to_string()],
            rows: vec![vec!["Asthma".to_string(), "J45.9".to_string()]],
            row_count: 1,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"row_count\":1"));
        assert!(json.contains("Vorschlag_ICD10"));
    }
}
