use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};

use crate::analysis::render_outcome;
use crate::document::UploadedDocument;
use crate::models::{AnalyzeResponse, AppState};
use crate::types::{AppError, AppResult};

/// Multipart field carrying the uploaded report.
const FILE_FIELD: &str = "file";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_report))
        .with_state(state)
}

/// Run the pipeline on one uploaded file. Pipeline failures are part of the
/// displayed output and still answer 200; a malformed upload is a 400 and one
/// over the configured body limit a 413.
async fn analyze_report(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<AnalyzeResponse>) {
    let max_upload_bytes = state.config.server.max_upload_bytes;
    let document = match read_upload(&mut multipart, max_upload_bytes).await {
        Ok(document) => document,
        Err(e) => {
            warn!("Rejected upload: {}", e);
            let status = match &e {
                AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            };
            return (
                status,
                Json(AnalyzeResponse {
                    status: "error".to_string(),
                    output: format!("Error: {}", e),
                }),
            );
        }
    };

    info!(
        filename = %document.filename(),
        kind = document.kind(),
        size = document.bytes().len(),
        "Analysis request received"
    );

    let outcome = state.analyzer.analyze(&document).await;
    if let Err(e) = &outcome {
        warn!(filename = %document.filename(), "Analysis failed: {}", e);
    }

    let status = if outcome.is_ok() { "success" } else { "error" };
    (
        StatusCode::OK,
        Json(AnalyzeResponse {
            status: status.to_string(),
            output: render_outcome(&outcome),
        }),
    )
}

async fn read_upload(multipart: &mut Multipart, max_upload_bytes: usize) -> AppResult<UploadedDocument> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, max_upload_bytes))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| upload_error(e, max_upload_bytes))?;

        return Ok(UploadedDocument::from_upload(filename, bytes));
    }

    Err(AppError::InvalidRequest(format!(
        "missing `{}` field",
        FILE_FIELD
    )))
}

/// Classify a multipart failure by the status axum assigns it, so a body over
/// the configured limit is reported as such rather than as a parse error.
fn upload_error(e: MultipartError, max_upload_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("the limit is {} bytes", max_upload_bytes))
    } else {
        AppError::InvalidRequest(format!("Malformed upload: {}", e.body_text()))
    }
}
