// Resume analysis: validate → prompt → upstream completion → segment.
// All upstream calls go through llm_client; nothing here talks HTTP to Gemini.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod segmenter;
pub mod validation;
