//! Axum route handlers for the enhancement API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::enhance::extract::extract_text;
use crate::errors::AppError;
use crate::models::portfolio::PortfolioProfile;
use crate::state::AppState;

/// Multipart field carrying the uploaded resume.
const RESUME_FIELD: &str = "resume_file";

#[derive(Debug, Serialize)]
pub struct ResumeEnhanceResponse {
    pub filename: String,
    pub original_text: String,
    pub enhanced_text: String,
}

struct ResumeUpload {
    filename: String,
    bytes: Bytes,
}

/// POST /api/v1/portfolio/enhance
///
/// Returns the profile with AI-polished copy, in the same wire shape.
pub async fn handle_enhance_portfolio(
    State(state): State<AppState>,
    Json(profile): Json<PortfolioProfile>,
) -> Result<Json<PortfolioProfile>, AppError> {
    info!(
        "Enhancing portfolio for '{}' ({} projects, backend={})",
        profile.full_name,
        profile.projects.len(),
        state.enhancer.backend()
    );
    let enhanced = state.enhancer.enhance(profile).await?;
    Ok(Json(enhanced))
}

/// POST /api/v1/resume/enhance
///
/// Accepts a multipart upload (`resume_file`: .pdf, .docx or .txt), extracts
/// its text and returns both the original and the rewritten text.
pub async fn handle_enhance_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeEnhanceResponse>, AppError> {
    let upload = read_resume_upload(&mut multipart).await?;
    let original_text = extract_text(&upload.filename, &upload.bytes)?;

    if original_text.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "No text could be extracted from {}",
            upload.filename
        )));
    }

    let enhanced_text = state.enhancer.enhance_resume(&original_text).await?;
    info!(
        "Enhanced resume {} ({} chars -> {} chars)",
        upload.filename,
        original_text.len(),
        enhanced_text.len()
    );

    Ok(Json(ResumeEnhanceResponse {
        filename: upload.filename,
        original_text,
        enhanced_text,
    }))
}

async fn read_resume_upload(multipart: &mut Multipart) -> Result<ResumeUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .map(String::from)
            .ok_or_else(|| AppError::Validation(format!("{RESUME_FIELD} must be a file")))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        return Ok(ResumeUpload { filename, bytes });
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{RESUME_FIELD}'"
    )))
}
