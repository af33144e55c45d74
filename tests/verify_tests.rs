use veridoc::document::{keyword_match_count, verify_document_type, DocumentType};

// ============================================================================
// Keyword matching
// ============================================================================

#[test]
fn test_single_keyword_is_sufficient() {
    let text = "some text mentioning the Government of India and nothing else";
    assert!(verify_document_type("Aadhaar Card", text));
}

#[test]
fn test_matching_is_case_insensitive() {
    let text = "GOVERNMENT OF INDIA unique identification authority";
    assert_eq!(keyword_match_count("Aadhaar Card", text), 2);
    assert!(verify_document_type("Aadhaar Card", text));
}

#[test]
fn test_no_keywords_fails() {
    let text = "Name: Jane Doe DOB: 01/01/1990 nothing identifying here";
    assert!(!verify_document_type("PAN Card", text));
    assert_eq!(keyword_match_count("PAN Card", text), 0);
}

#[test]
fn test_counts_every_matching_keyword() {
    let text = "Income Tax Department Permanent Account Number Govt. of India";
    assert_eq!(keyword_match_count("PAN Card", text), 3);
}

// ============================================================================
// Unrecognized labels
// ============================================================================

#[test]
fn test_unrecognized_label_always_fails() {
    let text = "Government of India Income Tax Department University Resume";
    assert!(!verify_document_type("Driving License", text));
    assert!(!verify_document_type("", text));
    assert_eq!(keyword_match_count("Driving License", text), 0);
}

// ============================================================================
// Label round trip
// ============================================================================

#[test]
fn test_every_label_parses_back_to_its_type() {
    for doc_type in DocumentType::ALL {
        assert_eq!(DocumentType::from_label(doc_type.label()), Some(doc_type));
    }
}

#[test]
fn test_every_type_has_keywords() {
    for doc_type in DocumentType::ALL {
        assert!(!doc_type.keywords().is_empty());
    }
}

#[test]
fn test_each_type_verifies_against_its_own_keywords() {
    for doc_type in DocumentType::ALL {
        let text = doc_type.keywords().join(" ");
        assert!(
            verify_document_type(doc_type.label(), &text),
            "{} did not verify against its own keywords",
            doc_type.label()
        );
    }
}
