// Prompt for the resume critique. The model is asked for uppercase section
// headers; the segmenter keys off the `**HEADER**` lines Gemini tends to emit.

use crate::analysis::models::AtsScore;

/// Builds the critique prompt. Pure and deterministic; interpolation is single-pass
/// so placeholder-looking text in the resume is sent through untouched.
pub fn build_analysis_prompt(resume_text: &str, ats_score: &AtsScore) -> String {
    let total_score = format_score(ats_score.total_score);
    let summary = ats_score.summary.as_str();

    format!(
        r#"You are an expert resume coach. Analyze this resume and provide concise, actionable improvement advice.

RESUME TEXT:
{resume_text}

CURRENT ATS SCORE: {total_score}/100

CONTEXT:
{summary}

YOUR TASK:
Write a brief, focused analysis (250-350 words max) that tells the candidate exactly what to improve. Use this structure:

OVERVIEW
[One paragraph: What's working well and the main issue holding this resume back]

TOP 3 IMPROVEMENTS

1. [Title]
What to do: [Specific action in 1-2 sentences]
Example: [Quick before/after or concrete example]

2. [Title]
What to do: [Specific action in 1-2 sentences]
Example: [Quick before/after or concrete example]

3. [Title]
What to do: [Specific action in 1-2 sentences]
Example: [Quick before/after or concrete example]

QUICK WINS
[One short paragraph listing 2-3 easy changes they can make today]

WRITING GUIDELINES:
- NO emojis, keep it professional
- Use UPPERCASE for section headers only
- Write in clear, short paragraphs (3-4 lines max)
- Be direct and specific - focus on WHAT TO CHANGE, not explanations
- Reference actual content from the resume
- Skip generic advice - make it personal to this resume
- Keep total response under 350 words
- Use conversational but professional tone

Focus on the highest-impact changes that will improve their ATS score and get them interviews."#
    )
}

/// Renders a score the way a JSON number prints: `72`, not `72.0`.
/// Exact for scores in the 0–100 range; magnitudes of 1e21 and up print as
/// plain digits rather than in exponent form.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        score.to_string()
    }
}
