use veridoc::document::clean_text;

// ============================================================================
// Character removal
// ============================================================================

#[test]
fn test_removes_backslashes_and_asterisks() {
    let cleaned = clean_text(r"**Name:** John \ Doe \\ here");
    assert!(!cleaned.contains('*'));
    assert!(!cleaned.contains('\\'));
    assert_eq!(cleaned, "Name: John Doe here");
}

#[test]
fn test_removes_double_quotes() {
    let cleaned = clean_text(r#"Name: "Jane" Doe"#);
    assert!(!cleaned.contains('"'));
    assert_eq!(cleaned, "Name: Jane Doe");
}

#[test]
fn test_quote_removal_leaves_no_double_spaces() {
    // A quote between spaces must not survive as a two-space gap.
    assert_eq!(clean_text(r#"a " b"#), "a b");
    assert_eq!(clean_text(r#"a "" b"#), "a b");
}

#[test]
fn test_trims_whitespace_exposed_by_quote_removal() {
    assert_eq!(clean_text(r#"" a"#), "a");
    assert_eq!(clean_text(r#"a ""#), "a");
}

// ============================================================================
// Whitespace handling
// ============================================================================

#[test]
fn test_collapses_whitespace_around_colons() {
    assert_eq!(clean_text("a  :  b"), "a: b");
    assert_eq!(clean_text("a:b"), "a: b");
    assert_eq!(clean_text("a :b"), "a: b");
}

#[test]
fn test_collapses_whitespace_runs() {
    assert_eq!(clean_text("Name:   Jane\t\nDoe"), "Name: Jane Doe");
}

#[test]
fn test_trims_leading_and_trailing_whitespace() {
    assert_eq!(clean_text("   Name: Jane   "), "Name: Jane");
}

#[test]
fn test_empty_input() {
    assert_eq!(clean_text(""), "");
    assert_eq!(clean_text("   \t\n "), "");
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_idempotent_on_messy_input() {
    let inputs = [
        r"**Name:**  John \ Doe",
        "a  :  b   c",
        r#""quoted"  text : here"#,
        r#"a " b"#,
        r#"" a"#,
        r#"a " : " b"#,
        "already clean text: value",
        "",
        "trailing colon:",
    ];

    for input in inputs {
        let once = clean_text(input);
        let twice = clean_text(&once);
        assert_eq!(once, twice, "clean_text not idempotent for {input:?}");
    }
}
