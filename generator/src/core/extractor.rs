//! Isolate a JSON object from free-form completion text

use std::sync::LazyLock;

use regex::Regex;

static LEADING_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\s*```(?:json)?\s*").unwrap());
static TRAILING_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*```\s*$").unwrap());
// Greedy: first `{` to last `}`
static OBJECT_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").unwrap());

/// Strip markdown fencing and return the outermost `{...}` span
///
/// Falls back to the trimmed text when no braces are present, leaving the
/// parse step to report the failure.
pub fn extract_json(text: &str) -> String {
    let unfenced = LEADING_FENCE.replace(text, "");
    let unfenced = TRAILING_FENCE.replace(&unfenced, "");
    let trimmed = unfenced.trim();

    match OBJECT_SPAN.find(trimmed) {
        Some(span) => span.as_str().to_string(),
        None => trimmed.to_string(),
    }
}
