//! Keyword verification of the claimed document type.

use super::doc_type::DocumentType;

/// Count how many of the claimed type's verification keywords occur in the
/// text (case-insensitive substring search). An unrecognized label has an
/// empty keyword set and always counts zero.
pub fn keyword_match_count(label: &str, text: &str) -> usize {
    let keywords = DocumentType::from_label(label)
        .map(|doc_type| doc_type.keywords())
        .unwrap_or_default();

    let haystack = text.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .count()
}

/// Whether the claimed type matches the extracted text.
///
/// A single keyword occurrence is sufficient. This is a deliberately weak
/// heuristic: one incidental mention of a phrase passes verification.
pub fn verify_document_type(label: &str, text: &str) -> bool {
    keyword_match_count(label, text) >= 1
}
