//! Axum route handler for the resume analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use tracing::debug;

use crate::analysis::models::AnalysisResponse;
use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::segmenter::segment_response;
use crate::analysis::validation::validate_analysis_request;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/analyze-resume
///
/// Validates the payload, asks the completion client for a critique, and returns
/// the raw reply alongside its sectioned form. Validation failures never reach upstream.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let body = match body {
        Ok(Json(body)) => body,
        // Non-JSON bodies are treated as empty and fail the field checks below.
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Default::default()),
        Err(rejection) => return Err(rejection.into()),
    };
    let request = validate_analysis_request(&body)?;

    let prompt = build_analysis_prompt(&request.resume_text, &request.ats_score);
    let ai_analysis = state.llm.complete(&prompt).await?;

    let detailed_feedback = segment_response(&ai_analysis);
    debug!(
        sections = detailed_feedback.sections.len(),
        reply_len = ai_analysis.len(),
        "Resume analysis complete"
    );

    Ok(Json(AnalysisResponse {
        success: true,
        ai_analysis,
        detailed_feedback,
    }))
}
