//! HTTP route handlers

use crate::ingest;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reviewlens_core::Error;
use reviewlens_history::{UploadRecord, DEFAULT_HISTORY_LIMIT};
use reviewlens_report::BatchReport;
use serde::Serialize;
use tracing::{error, warn};

// ============================================================================
// Health
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "model": "weighted-likelihood lexicon",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

// ============================================================================
// Batch upload
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    #[serde(flatten)]
    pub report: BatchReport,
}

pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let (filename, bytes) = match read_file_field(&mut multipart).await {
        Ok(found) => found,
        Err(response) => return response.into_response(),
    };

    if !filename.to_lowercase().ends_with(".csv") {
        return bad_request("file must be a .csv").into_response();
    }

    let rows = match ingest::parse_csv(&bytes) {
        Ok(rows) => rows,
        Err(e) => return batch_error(e).into_response(),
    };

    let records = match state.analyzer.analyze_batch(&rows) {
        Ok(records) => records,
        Err(e) => return batch_error(e).into_response(),
    };

    let report = match reviewlens_report::aggregate(&records) {
        Ok(report) => report,
        Err(e) => return batch_error(e).into_response(),
    };

    // Audit write failures must not cost the caller their report.
    let chart = serde_json::to_value(&report.chart).ok();
    let record = UploadRecord::new(
        filename.as_str(),
        report.total_reviews,
        report.counts.positive,
        report.counts.negative,
        report.counts.neutral,
        chart,
    );
    if let Err(e) = state.history.lock().append(&record) {
        warn!(error = %e, filename = %filename, "failed to persist upload history");
    }

    Json(UploadResponse { filename, report }).into_response()
}

/// Pull the `file` part out of the multipart body.
async fn read_file_field(
    multipart: &mut Multipart,
) -> Result<(String, Vec<u8>), (StatusCode, Json<serde_json::Value>)> {
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => {
                let filename = field
                    .file_name()
                    .map(|n| n.to_string())
                    .filter(|n| !n.is_empty())
                    .ok_or_else(|| bad_request("no file selected"))?;
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(format!("failed to read upload: {e}")))?;
                return Ok((filename, bytes.to_vec()));
            }
            Ok(Some(_)) => continue,
            Ok(None) => return Err(bad_request("multipart field 'file' not found")),
            Err(e) => return Err(bad_request(format!("invalid multipart body: {e}"))),
        }
    }
}

// ============================================================================
// Upload history
// ============================================================================

pub async fn history(State(state): State<AppState>) -> impl IntoResponse {
    match state.history.lock().recent(DEFAULT_HISTORY_LIMIT) {
        Ok(records) => Json(serde_json::json!({ "history": records })).into_response(),
        Err(e) => {
            // history is a convenience view; degrade to empty rather than 500
            error!(error = %e, "failed to read upload history");
            Json(serde_json::json!({ "history": [] })).into_response()
        }
    }
}

pub async fn clear_history(State(state): State<AppState>) -> impl IntoResponse {
    match state.history.lock().clear() {
        Ok(()) => Json(serde_json::json!({ "success": true })).into_response(),
        Err(e) => {
            error!(error = %e, "failed to clear upload history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Error helpers
// ============================================================================

fn bad_request(msg: impl Into<String>) -> (StatusCode, Json<serde_json::Value>) {
    let msg: String = msg.into();
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": msg })),
    )
}

fn batch_error(e: Error) -> (StatusCode, Json<serde_json::Value>) {
    match e {
        Error::Batch(msg) => bad_request(msg),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": other.to_string() })),
        ),
    }
}
