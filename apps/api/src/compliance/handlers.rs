use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::compliance::models::{ComplianceReport, ComplianceRules};
use crate::compliance::report::build_report;
use crate::errors::AppError;
use crate::extraction::DocumentFormat;
use crate::state::AppState;

/// Multipart part that carries the document.
pub const FILE_FIELD: &str = "file";

struct Upload {
    file_name: String,
    bytes: Bytes,
}

/// POST /api/v1/compliance/check
pub async fn handle_check_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ComplianceReport>, AppError> {
    let upload = read_upload(&mut multipart, state.config.max_upload_bytes).await?;
    let format = DocumentFormat::from_file_name(&upload.file_name)?;
    info!(
        "Checking '{}' ({format}, {} bytes)",
        upload.file_name,
        upload.bytes.len()
    );

    let text = state.extractor.extract_text(upload.bytes, format).await?;
    let report = build_report(&upload.file_name, format, &text, &state.config.rules);

    info!(
        "Report {} for '{}': {} ({}/{} checks)",
        report.report_id,
        report.file_name,
        report.score_display,
        report.score.passed_checks,
        report.score.total_checks
    );
    Ok(Json(report))
}

/// GET /api/v1/compliance/rules
pub async fn handle_get_rules(State(state): State<AppState>) -> Json<ComplianceRules> {
    Json(state.config.rules.clone())
}

/// Takes the first `file` part; other parts are ignored.
async fn read_upload(
    multipart: &mut Multipart,
    max_upload_bytes: usize,
) -> Result<Upload, AppError> {
    let multipart_err = |e: MultipartError| AppError::from_multipart(e, max_upload_bytes);

    while let Some(field) = multipart.next_field().await.map_err(multipart_err)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("The uploaded file has no file name".to_string()))?;
        let bytes = field.bytes().await.map_err(multipart_err)?;
        return Ok(Upload { file_name, bytes });
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{FILE_FIELD}'"
    )))
}
