//! Text normalization helpers shared by matching and the vacancy pipeline.

use std::collections::HashSet;
use std::sync::OnceLock;

use unicode_normalization::UnicodeNormalization;

/// Normalize free text for substring matching: NFKC fold, lowercase,
/// punctuation stripped to spaces, whitespace collapsed.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.nfkc() {
        if c.is_alphanumeric() {
            folded.extend(c.to_lowercase());
        } else {
            folded.push(' ');
        }
    }
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive identity key for term deduplication and overlap
/// counting. First-seen casing is preserved for rendering; this key is
/// only compared, never shown.
#[must_use]
pub fn fold_key(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Deduplicate terms preserving first-occurrence order, comparing
/// case-insensitively. Empty terms are dropped.
#[must_use]
pub fn dedup_ordered<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for term in terms {
        let term = term.as_ref().trim();
        if term.is_empty() {
            continue;
        }
        if seen.insert(fold_key(term)) {
            out.push(term.to_string());
        }
    }
    out
}

/// Sanitize untrusted input text: strip control characters and collapse
/// whitespace runs. Used on vacancy fields before they reach the matcher.
#[must_use]
pub fn sanitize(text: &str) -> String {
    static CONTROL: OnceLock<regex::Regex> = OnceLock::new();
    static RUNS: OnceLock<regex::Regex> = OnceLock::new();
    let control = CONTROL.get_or_init(|| regex::Regex::new(r"[\x00-\x1f\x7f]").expect("valid regex"));
    let runs = RUNS.get_or_init(|| regex::Regex::new(r"\s+").expect("valid regex"));

    let stripped = control.replace_all(text, "");
    runs.replace_all(stripped.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("Werkvoorbereider, Elektrotechniek!"),
            "werkvoorbereider elektrotechniek"
        );
        assert_eq!(normalize("  Senior   C++ Developer "), "senior c developer");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_dedup_ordered_keeps_first_casing() {
        let terms = dedup_ordered(["Python", "python", "PYTHON", "Rust"]);
        assert_eq!(terms, vec!["Python".to_string(), "Rust".to_string()]);
    }

    #[test]
    fn test_dedup_ordered_drops_empty() {
        let terms = dedup_ordered(["", "  ", "Go"]);
        assert_eq!(terms, vec!["Go".to_string()]);
    }

    #[test]
    fn test_sanitize_strips_control_and_collapses() {
        assert_eq!(sanitize("Software\x00 Engineer\t\t NL "), "Software Engineer NL");
    }
}
