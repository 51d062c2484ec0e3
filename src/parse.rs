//! Extraction of JSON objects from free-form model output.
//!
//! Models often wrap the requested JSON in prose or code fences. The parser
//! finds the first balanced `{...}` span, skipping braces inside string
//! literals, and decodes it. Failures are returned as
//! [`WordweaveError::Parse`]; callers decide whether to substitute a
//! fallback.

use serde_json::Value;

use crate::types::{AnalysisResult, GeneratedPoem};
use crate::{Result, WordweaveError};

/// Non-empty lines kept from a generated poem.
pub const POEM_LINES: usize = 12;

/// Byte range of the first balanced top-level `{...}` in `text`.
fn balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Locate and decode the JSON object embedded in `raw`.
///
/// Tries the first balanced object span, then the whole text. The result is
/// always a JSON object.
pub fn extract_json(raw: &str) -> Result<Value> {
    let candidates = balanced_object(raw).into_iter().chain(Some(raw.trim()));
    let mut last_err = None;
    for candidate in candidates {
        match serde_json::from_str::<Value>(candidate) {
            Ok(value @ Value::Object(_)) => return Ok(value),
            Ok(_) => last_err = Some("model output is not a JSON object".to_string()),
            Err(e) => last_err = Some(e.to_string()),
        }
    }
    Err(WordweaveError::Parse(
        last_err.unwrap_or_else(|| "no JSON object in model output".to_string()),
    ))
}

/// Decode a theme analysis from model output. The result is not sanitized.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult> {
    let value = extract_json(raw)?;
    serde_json::from_value(value).map_err(|e| WordweaveError::Parse(e.to_string()))
}

/// Decode a generated poem and its literary analysis from model output.
///
/// The poem is trimmed to its first [`POEM_LINES`] non-empty lines. A
/// missing or blank poem is a parse failure. The analysis is not sanitized.
pub fn parse_generated_poem(raw: &str) -> Result<GeneratedPoem> {
    let value = extract_json(raw)?;
    let mut generated: GeneratedPoem =
        serde_json::from_value(value).map_err(|e| WordweaveError::Parse(e.to_string()))?;
    generated.poem = cap_lines(&generated.poem, POEM_LINES);
    if generated.poem.is_empty() {
        return Err(WordweaveError::Parse("model output has no poem".to_string()));
    }
    Ok(generated)
}

/// First `max` non-empty lines of `text`, trimmed and joined with `\n`.
pub fn cap_lines(text: &str, max: usize) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(max)
        .collect::<Vec<_>>()
        .join("\n")
}
