//! Cleanup of raw vision-model output before verification and extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_ARTIFACTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\*"]"#).expect("valid regex"));
static COLON_SPACING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*:\s*").expect("valid regex"));
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize raw model output into the single string the verifier and
/// extractor operate on.
///
/// Removes markdown artifacts (`\`, `*`) and double quotes, fixes spacing
/// around colons to exactly `": "`, collapses remaining whitespace runs to
/// single spaces, and trims. Character removal runs first so the whitespace
/// passes see the final text; this keeps the function total and idempotent:
/// reapplying to already-clean text is a no-op.
pub fn clean_text(text: &str) -> String {
    let text = MARKUP_ARTIFACTS.replace_all(text, "");
    let text = COLON_SPACING.replace_all(&text, ": ");
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}
