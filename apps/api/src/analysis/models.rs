use std::collections::BTreeMap;

use serde::Serialize;

/// The ATS score the caller computed. Only the fields the prompt needs are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct AtsScore {
    pub total_score: f64,
    /// Empty when the caller sent no summary.
    pub summary: String,
}

/// A request that has passed every input check.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub ats_score: AtsScore,
}

/// The AI reply split into `**HEADER**`-delimited sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedFeedback {
    /// Lower-cased header → trimmed body. Text before the first header lands under `general`.
    pub sections: BTreeMap<String, String>,
    pub full_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub success: bool,
    pub ai_analysis: String,
    pub detailed_feedback: DetailedFeedback,
}
