//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::{ApiResponse, AppError};
use crate::models::resume::{
    entries_from_map, lenient_object, lenient_text, BasicInfo, JobEntry, ProjectEntry,
};
use crate::render::render_resume_html_or_fallback;
use crate::state::AppState;

pub const GENERATE_RESUME_ACTION: &str = "generate_resume";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Body of `POST /api/generate-resume`.
///
/// Optional fields never fail decoding: absent, `null` or oddly typed
/// values fall back to empty text or an empty mapping.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateResumeRequest {
    #[serde(deserialize_with = "lenient_text")]
    pub action: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(deserialize_with = "lenient_object")]
    pub jobs: Map<String, Value>,
    #[serde(deserialize_with = "lenient_object")]
    pub projects: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateContentRequest {
    pub user_input: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-resume
///
/// Renders name, contact line, jobs and projects into an HTML fragment.
pub async fn handle_generate_resume(
    payload: Result<Json<GenerateResumeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<String>>, AppError> {
    let Json(request) = payload?;

    if request.action != GENERATE_RESUME_ACTION {
        return Err(AppError::InvalidAction {
            expected: GENERATE_RESUME_ACTION,
        });
    }

    let basic_info = BasicInfo {
        name: request.name,
        phone: request.phone,
        email: request.email,
        ..Default::default()
    };
    let jobs = entries_from_map::<JobEntry>(request.jobs);
    let projects = entries_from_map::<ProjectEntry>(request.projects);

    let html = render_resume_html_or_fallback(&basic_info, &[], &jobs, &projects, "");
    info!(
        "Rendered resume with {} jobs and {} projects",
        jobs.len(),
        projects.len()
    );

    Ok(Json(ApiResponse::Success { result: html }))
}

/// POST /api/generate-content
///
/// Expands keyword input into a STAR-format description via the model.
/// Always answers with an object; unusable model output becomes the fallback entry.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    payload: Result<Json<GenerateContentRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let Json(request) = payload?;

    if request.user_input.trim().is_empty() {
        return Err(AppError::Validation("user_input cannot be empty".to_string()));
    }

    let content = state.generator.generate(&request.user_input).await;
    if content.is_fallback() {
        warn!("Returning fallback description for content request");
    }

    Ok(Json(ApiResponse::Success {
        result: content.into_value(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
