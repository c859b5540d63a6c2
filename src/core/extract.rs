use crate::domain::model::InferenceResult;
use crate::utils::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;

static CLEAN_QUESTION: Lazy<Regex> = Lazy::new(|| {
    // Case-insensitive, `.` spans newlines, `$` is end of text.
    Regex::new(r"(?is)CLEAN_QUESTION:\s*(.*)$").expect("clean question pattern is valid")
});

/// Strips surrounding whitespace, counting the byte order mark as whitespace.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Text of a model run: a string response trimmed, anything else as compact JSON.
pub fn best_effort_text(result: InferenceResult) -> Result<String> {
    match result {
        InferenceResult::Text(text) => Ok(trim_text(&text).to_string()),
        InferenceResult::Opaque(value) => Ok(serde_json::to_string(&value)?),
    }
}

/// The problem statement after a `CLEAN_QUESTION:` marker, or the whole
/// OCR text when no marker is present.
pub fn extract_clean_question(ocr_text: &str) -> &str {
    CLEAN_QUESTION
        .captures(ocr_text)
        .and_then(|caps| caps.get(1))
        .map_or(ocr_text, |m| trim_text(m.as_str()))
}
