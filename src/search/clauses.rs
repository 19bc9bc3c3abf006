//! Boolean clause grammar shared by the assembler and the hybrid search.
//!
//! Phrases containing whitespace are double-quoted; OR-groups join terms
//! with ` OR `; AND-composition parenthesizes multi-term sub-clauses.

/// Quote a phrase when it contains whitespace.
pub(crate) fn quote_phrase(phrase: &str) -> String {
    if phrase.contains(char::is_whitespace) {
        format!("\"{phrase}\"")
    } else {
        phrase.to_string()
    }
}

/// OR-join terms, quoting phrases. Empty terms are skipped.
pub(crate) fn or_clause<S: AsRef<str>>(terms: &[S]) -> String {
    terms
        .iter()
        .map(AsRef::as_ref)
        .filter(|term| !term.trim().is_empty())
        .map(quote_phrase)
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// OR-join company names as `company:"…"` filters. Companies are always
/// quoted, matching the platform's field-search syntax.
pub(crate) fn company_clause<S: AsRef<str>>(companies: &[S]) -> String {
    companies
        .iter()
        .map(AsRef::as_ref)
        .filter(|company| !company.trim().is_empty())
        .map(|company| format!("company:\"{company}\""))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// AND-join sub-clauses, parenthesizing any that are themselves OR-groups.
pub(crate) fn and_join<S: AsRef<str>>(clauses: &[S]) -> String {
    clauses
        .iter()
        .map(AsRef::as_ref)
        .filter(|clause| !clause.is_empty())
        .map(|clause| {
            if clause.contains(" OR ") {
                format!("({clause})")
            } else {
                clause.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" AND ")
}
