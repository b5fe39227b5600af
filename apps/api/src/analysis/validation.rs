//! Input checks for `POST /api/analyze-resume`.
//!
//! The body is taken as raw JSON so that a wrong-typed field produces one of the
//! four contract messages instead of a generic deserialization error. Checks run
//! in order and stop at the first failure.

use serde_json::Value;

use crate::analysis::models::{AnalysisRequest, AtsScore};
use crate::errors::AppError;

pub const MIN_RESUME_CHARS: usize = 50;
pub const MAX_RESUME_CHARS: usize = 20_000;

pub const MSG_RESUME_REQUIRED: &str = "resumeText is required and must be a string";
pub const MSG_ATS_REQUIRED: &str = "atsScore is required";
pub const MSG_TOO_SHORT: &str = "Resume text is too short (minimum 50 characters)";
pub const MSG_TOO_LONG: &str = "Resume text is too long (maximum 20,000 characters)";

/// Validates a raw request body into an `AnalysisRequest`.
pub fn validate_analysis_request(body: &Value) -> Result<AnalysisRequest, AppError> {
    let resume_text = match body.get("resumeText") {
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => return Err(invalid(MSG_RESUME_REQUIRED)),
    };

    let ats = body.get("atsScore").filter(|v| !v.is_null());
    let total_score = ats
        .and_then(|a| a.get("totalScore"))
        .and_then(Value::as_f64)
        .ok_or_else(|| invalid(MSG_ATS_REQUIRED))?;

    // Lengths count UTF-16 code units so clients measuring in JavaScript agree on the bounds.
    let length = resume_text.encode_utf16().count();
    if length < MIN_RESUME_CHARS {
        return Err(invalid(MSG_TOO_SHORT));
    }
    if length > MAX_RESUME_CHARS {
        return Err(invalid(MSG_TOO_LONG));
    }

    let summary = match ats.and_then(|a| a.get("summary")) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    Ok(AnalysisRequest {
        resume_text: resume_text.clone(),
        ats_score: AtsScore {
            total_score,
            summary,
        },
    })
}

fn invalid(msg: &str) -> AppError {
    AppError::InvalidInput(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resume(len: usize) -> String {
        "a".repeat(len)
    }

    fn message_of(body: Value) -> String {
        match validate_analysis_request(&body) {
            Err(AppError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_resume_text() {
        assert_eq!(
            message_of(json!({"atsScore": {"totalScore": 70}})),
            MSG_RESUME_REQUIRED
        );
    }

    #[test]
    fn test_non_string_resume_text() {
        assert_eq!(
            message_of(json!({"resumeText": 42, "atsScore": {"totalScore": 70}})),
            MSG_RESUME_REQUIRED
        );
        assert_eq!(
            message_of(json!({"resumeText": ["a"], "atsScore": {"totalScore": 70}})),
            MSG_RESUME_REQUIRED
        );
    }

    #[test]
    fn test_empty_resume_text_counts_as_missing() {
        assert_eq!(
            message_of(json!({"resumeText": "", "atsScore": {"totalScore": 70}})),
            MSG_RESUME_REQUIRED
        );
    }

    #[test]
    fn test_resume_text_checked_before_ats_score() {
        assert_eq!(message_of(json!({})), MSG_RESUME_REQUIRED);
    }

    #[test]
    fn test_ats_score_shapes() {
        for ats in [
            Value::Null,
            json!("72"),
            json!(72),
            json!({}),
            json!({"totalScore": "72"}),
            json!({"totalScore": null}),
            json!([72]),
        ] {
            assert_eq!(
                message_of(json!({"resumeText": resume(100), "atsScore": ats})),
                MSG_ATS_REQUIRED
            );
        }
        assert_eq!(
            message_of(json!({"resumeText": resume(100)})),
            MSG_ATS_REQUIRED
        );
    }

    #[test]
    fn test_ats_score_checked_before_length() {
        assert_eq!(
            message_of(json!({"resumeText": "short"})),
            MSG_ATS_REQUIRED
        );
    }

    #[test]
    fn test_length_bounds() {
        let ats = json!({"totalScore": 50});
        assert_eq!(
            message_of(json!({"resumeText": resume(49), "atsScore": ats})),
            MSG_TOO_SHORT
        );
        assert_eq!(
            message_of(json!({"resumeText": resume(20_001), "atsScore": ats})),
            MSG_TOO_LONG
        );
        assert!(validate_analysis_request(&json!({"resumeText": resume(50), "atsScore": ats})).is_ok());
        assert!(
            validate_analysis_request(&json!({"resumeText": resume(20_000), "atsScore": ats}))
                .is_ok()
        );
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // 25 astral characters = 50 UTF-16 units, 100 UTF-8 bytes.
        let text = "😀".repeat(25);
        assert!(validate_analysis_request(
            &json!({"resumeText": text, "atsScore": {"totalScore": 1}})
        )
        .is_ok());

        // 49 two-byte characters = 49 UTF-16 units.
        let text = "é".repeat(49);
        assert_eq!(
            message_of(json!({"resumeText": text, "atsScore": {"totalScore": 1}})),
            MSG_TOO_SHORT
        );
    }

    #[test]
    fn test_summary_defaults_to_empty() {
        let req = validate_analysis_request(&json!({
            "resumeText": resume(60),
            "atsScore": {"totalScore": 72}
        }))
        .unwrap();
        assert_eq!(req.ats_score.summary, "");
        assert_eq!(req.ats_score.total_score, 72.0);
    }

    #[test]
    fn test_extra_ats_fields_are_ignored() {
        let req = validate_analysis_request(&json!({
            "resumeText": resume(60),
            "atsScore": {"totalScore": 81.5, "summary": "Good keywords", "breakdown": {"format": 20}}
        }))
        .unwrap();
        assert_eq!(
            req.ats_score,
            AtsScore {
                total_score: 81.5,
                summary: "Good keywords".to_string()
            }
        );
    }
}
