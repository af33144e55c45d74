//! Per-document-type field extraction over normalized OCR text.
//!
//! Each document type carries a static, ordered rule table interpreted by one
//! generic routine. OCR output has no reliable field delimiters, so the
//! patterns anchor on literal labels ("Name:", "DOB:", "Percentage:") and stop
//! at the next expected label or end of text.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use super::doc_type::DocumentType;

/// Sentinel value for a field with no match. Every extracted field is either a
/// non-empty string or exactly this value, never an empty list or null.
pub const NOT_FOUND: &str = "Not Found";

/// Whether a field is expected to occur once or may have several candidate
/// matches in the source text. Multi-match fields still collapse to the first
/// match in the final mapping; later candidates are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    Multiple,
}

/// A single field-extraction rule.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: RuleKind,
    pub cardinality: Cardinality,
}

#[derive(Debug, Clone, Copy)]
pub enum RuleKind {
    /// Case-sensitive regex searched over the normalized text. The value is
    /// the first capture group, or the whole match for group-free patterns.
    Pattern(&'static str),
    /// Priority-ordered lookup: the first entry with any of its phrases
    /// present as a substring yields its canonical value.
    PhraseLookup(&'static [(&'static [&'static str], &'static str)]),
}

/// Board names share one priority-ordered lookup across both marksheets.
/// Maharashtra is checked first (two phrasings occur in the wild), then CBSE,
/// then CISCE.
const BOARD_LOOKUP: &[(&[&str], &str)] = &[
    (
        &[
            "Maharashtra State Board of Secondary and Higher Secondary Education",
            "Higher Secondary Certificate Examination in Maharashtra",
        ],
        "Maharashtra State Board of Secondary and Higher Secondary Education",
    ),
    (
        &["Central Board of Secondary Education"],
        "Central Board of Secondary Education",
    ),
    (
        &["Council for the Indian School Certificate Examinations"],
        "Council for the Indian School Certificate Examinations",
    ),
];

const AADHAAR_RULES: &[FieldRule] = &[
    FieldRule {
        name: "Aadhaar Number",
        kind: RuleKind::Pattern(r"\d{4}\s\d{4}\s\d{4}"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Name",
        kind: RuleKind::Pattern(r"Name:\s*([A-Za-z ]+?)(?:\s*(?:Address|Aadhaar|DOB|Date|Mobile)|$)"),
        cardinality: Cardinality::Single,
    },
    FieldRule {
        name: "DOB",
        kind: RuleKind::Pattern(r"(?:DOB|Date of Birth):\s*(\d{2}/\d{2}/\d{4})"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Address",
        kind: RuleKind::Pattern(r"Address:\s*(.+?)\s*(?:Mobile|Aadhaar|Date|Aadhar|DOB|Seat)"),
        cardinality: Cardinality::Single,
    },
    FieldRule {
        name: "Mobile",
        kind: RuleKind::Pattern(r"Mobile:\s*(\d{10})"),
        cardinality: Cardinality::Multiple,
    },
];

const PAN_RULES: &[FieldRule] = &[
    FieldRule {
        name: "PAN Number",
        kind: RuleKind::Pattern(r"[A-Z]{5}\d{4}[A-Z]"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Name",
        kind: RuleKind::Pattern(
            r"Name:\s*([A-Za-z ]+?)(?:\s*(?:Address|Aadhaar|Aadhar|Seat|DOB|Date|Mobile)|$)",
        ),
        cardinality: Cardinality::Single,
    },
    FieldRule {
        name: "DOB",
        kind: RuleKind::Pattern(r"(?:DOB|Date of Birth):\s*(\d{2}/\d{2}/\d{4})"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Father's Name",
        kind: RuleKind::Pattern(
            r"Father's Name:\s*([A-Za-z ]+?)(?:\s*(?:Address|Aadhaar|Aadhar|Seat|DOB|Date|Mobile)|$)",
        ),
        cardinality: Cardinality::Single,
    },
];

const TENTH_MARKSHEET_RULES: &[FieldRule] = &[
    FieldRule {
        name: "Name",
        kind: RuleKind::Pattern(
            r"Name:\s*([A-Za-z ]+?)(?:\s*(?:Address|Aadhaar|Aadhar|Seat|DOB|Date|Mobile)|$)",
        ),
        cardinality: Cardinality::Single,
    },
    FieldRule {
        name: "Roll Number",
        kind: RuleKind::Pattern(r"Seat(?: No\.?| Number)\s*:\s*(\w+)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Percentage",
        kind: RuleKind::Pattern(r"Percentage:\s*([\d.]+)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Board",
        kind: RuleKind::PhraseLookup(BOARD_LOOKUP),
        cardinality: Cardinality::Single,
    },
];

const TWELFTH_MARKSHEET_RULES: &[FieldRule] = &[
    FieldRule {
        name: "Name",
        kind: RuleKind::Pattern(r"Name:\s*([\w\s]+)"),
        cardinality: Cardinality::Single,
    },
    FieldRule {
        name: "Roll Number",
        kind: RuleKind::Pattern(r"Seat(?: No\.?| Number)\s*:\s*(\w+)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Percentage",
        kind: RuleKind::Pattern(r"Percentage:\s*([\d.]+)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Exam Month-Year",
        kind: RuleKind::Pattern(r"Month and Year of Exam:\s*([A-Za-z]+-\d{2})"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Board",
        kind: RuleKind::PhraseLookup(BOARD_LOOKUP),
        cardinality: Cardinality::Single,
    },
];

const GATE_RULES: &[FieldRule] = &[
    FieldRule {
        name: "Name",
        kind: RuleKind::Pattern(r"Name:\s([A-Za-z ]+)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Registration Number",
        kind: RuleKind::Pattern(r"(?:Registration Number|Reg\. No\.|No\.)\s*:\s*(\w+)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "GATE Score",
        kind: RuleKind::Pattern(r"GATE Score:\s(\d+)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "AIR",
        kind: RuleKind::Pattern(r"(?:In the test paper|All India Rank|AIR):?\s*(\d+)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Test Paper",
        kind: RuleKind::Pattern(r"Test Paper:\s*([\w\s&-]+)\s*\([A-Z]+\)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Date of Examination",
        kind: RuleKind::Pattern(r"Date of Examination:\s*([\w\s,]+)"),
        cardinality: Cardinality::Multiple,
    },
];

const RESUME_RULES: &[FieldRule] = &[
    FieldRule {
        name: "Name",
        kind: RuleKind::Pattern(r"Name:\s([A-Za-z ]+)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Contact Info",
        kind: RuleKind::Pattern(r"(\+\d{1,2}\s\d{10}|\d{10})"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Experience",
        kind: RuleKind::Pattern(r"Experience:\s(\d+ years)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Skills",
        kind: RuleKind::Pattern(r"Skills:\s([A-Za-z, ]+)"),
        cardinality: Cardinality::Multiple,
    },
];

const DEGREE_RULES: &[FieldRule] = &[
    FieldRule {
        name: "Name",
        kind: RuleKind::Pattern(r"Name:\s([A-Za-z ]+)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Degree",
        kind: RuleKind::Pattern(r"Degree:\s([A-Za-z ]+)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "University",
        kind: RuleKind::Pattern(r"University:\s([A-Za-z ]+)"),
        cardinality: Cardinality::Multiple,
    },
    FieldRule {
        name: "Year of Passing",
        kind: RuleKind::Pattern(r"Year:\s(\d{4})"),
        cardinality: Cardinality::Multiple,
    },
];

fn rule_table(doc_type: DocumentType) -> &'static [FieldRule] {
    match doc_type {
        DocumentType::AadhaarCard => AADHAAR_RULES,
        DocumentType::PanCard => PAN_RULES,
        DocumentType::TenthMarksheet => TENTH_MARKSHEET_RULES,
        DocumentType::TwelfthMarksheet => TWELFTH_MARKSHEET_RULES,
        DocumentType::GateScorecard => GATE_RULES,
        DocumentType::Resume => RESUME_RULES,
        DocumentType::DegreeCertificate => DEGREE_RULES,
    }
}

/// A rule with its pattern compiled, ready to evaluate.
#[derive(Debug)]
pub struct CompiledRule {
    pub name: &'static str,
    matcher: Matcher,
    cardinality: Cardinality,
}

#[derive(Debug)]
enum Matcher {
    Pattern(Regex),
    Phrases(&'static [(&'static [&'static str], &'static str)]),
}

impl CompiledRule {
    fn compile(rule: &FieldRule) -> Self {
        let matcher = match rule.kind {
            RuleKind::Pattern(pattern) => {
                Matcher::Pattern(Regex::new(pattern).expect("valid field pattern"))
            }
            RuleKind::PhraseLookup(entries) => Matcher::Phrases(entries),
        };
        CompiledRule {
            name: rule.name,
            matcher,
            cardinality: rule.cardinality,
        }
    }

    /// Evaluate this rule against normalized text. Returns `None` when the
    /// field is absent.
    pub fn evaluate(&self, text: &str) -> Option<String> {
        match &self.matcher {
            Matcher::Pattern(regex) => {
                let captures = match self.cardinality {
                    Cardinality::Single => regex.captures(text),
                    Cardinality::Multiple => regex.captures_iter(text).next(),
                };
                captures.map(|caps| {
                    let matched = caps.get(1).or_else(|| caps.get(0));
                    matched.map(|m| m.as_str().trim().to_string()).unwrap_or_default()
                })
            }
            Matcher::Phrases(entries) => entries
                .iter()
                .find(|(phrases, _)| phrases.iter().any(|phrase| text.contains(phrase)))
                .map(|(_, canonical)| (*canonical).to_string()),
        }
    }
}

static COMPILED_TABLES: Lazy<HashMap<DocumentType, Vec<CompiledRule>>> = Lazy::new(|| {
    DocumentType::ALL
        .iter()
        .map(|&doc_type| {
            let compiled = rule_table(doc_type).iter().map(CompiledRule::compile).collect();
            (doc_type, compiled)
        })
        .collect()
});

/// The compiled rule table for a document type.
pub fn rules_for(doc_type: DocumentType) -> &'static [CompiledRule] {
    COMPILED_TABLES
        .get(&doc_type)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Extract every configured field for `doc_type` from normalized text.
///
/// Extraction never fails: a field with no match maps to [`NOT_FOUND`], and an
/// empty match collapses to [`NOT_FOUND`] as well.
pub fn extract_fields(doc_type: DocumentType, text: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    for rule in rules_for(doc_type) {
        let value = match rule.evaluate(text) {
            Some(value) if !value.is_empty() => value,
            _ => NOT_FOUND.to_string(),
        };
        fields.insert(rule.name.to_string(), value);
    }
    fields
}
