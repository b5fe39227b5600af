//! Splits a free-text AI reply into named sections.
//!
//! A line whose trimmed form both starts and ends with `**` opens a new section.
//! The rule is applied literally: `**`, `***` and `****` are headers too.

use std::collections::BTreeMap;

use crate::analysis::models::DetailedFeedback;

const HEADER_MARKER: &str = "**";
const DEFAULT_SECTION: &str = "general";

/// Single pass over `'\n'`-separated lines. Repeated headers overwrite earlier content.
pub fn segment_response(text: &str) -> DetailedFeedback {
    let mut sections = BTreeMap::new();
    let mut current_section = DEFAULT_SECTION.to_string();
    let mut current_content: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if is_header(line) {
            if !current_content.is_empty() {
                sections.insert(current_section, current_content.join("\n").trim().to_string());
            }
            current_section = line.replace(HEADER_MARKER, "").trim().to_lowercase();
            current_content.clear();
        } else {
            current_content.push(line);
        }
    }

    if !current_content.is_empty() {
        sections.insert(current_section, current_content.join("\n").trim().to_string());
    }

    DetailedFeedback {
        sections,
        full_text: text.to_string(),
    }
}

fn is_header(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with(HEADER_MARKER) && trimmed.ends_with(HEADER_MARKER)
}
