//! Cleanup of raw model output.
//!
//! Models routinely ignore the "no headings, no prefixes" instruction, so
//! the service strips the common artifacts before a fact goes on the wire.

use std::sync::LazyLock;

use regex::Regex;

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s*").unwrap());
static FACT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^fact\s*(number\s*)?\d+\s*:?\s*").unwrap());
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+:\s*").unwrap());

/// Strip generation artifacts from raw model output.
///
/// Applies, in order: leading markdown heading markers, a leading
/// `Fact Number N` / `Fact N` label (case-insensitive, optional colon), a
/// leading bare `N:` prefix, then trims surrounding whitespace. Applying the
/// transform to already-clean text is a no-op.
pub fn strip_generation_artifacts(raw: &str) -> String {
    let text = raw.trim();
    let text = HEADING.replace(text, "");
    let text = FACT_LABEL.replace(&text, "");
    let text = NUMERIC_PREFIX.replace(&text, "");
    text.trim().to_string()
}
