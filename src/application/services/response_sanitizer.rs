use std::sync::LazyLock;

use regex::Regex;

/// Matches a reply that is exactly one markdown code fence (optionally
/// labeled `json`) wrapping a single JSON object.
static FENCED_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```(?:json)?\s*(\{.*?\})\s*```$").expect("fence pattern is valid")
});

/// Strips the markdown fence some providers wrap their JSON output in,
/// even when asked for strict JSON mode.
///
/// Trims surrounding whitespace; if the whole trimmed text is one fenced
/// `{...}` object, returns only the inner object text, otherwise returns
/// the trimmed text unchanged. Idempotent.
pub fn sanitize_completion(text: &str) -> String {
    let trimmed = text.trim();

    match FENCED_OBJECT.captures(trimmed) {
        Some(captures) => captures[1].to_string(),
        None => trimmed.to_string(),
    }
}
