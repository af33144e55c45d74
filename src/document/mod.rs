pub mod doc_type;
pub mod extract;
pub mod normalize;
pub mod verify;

pub use doc_type::DocumentType;
pub use extract::{extract_fields, rules_for, Cardinality, CompiledRule, FieldRule, NOT_FOUND};
pub use normalize::clean_text;
pub use verify::{keyword_match_count, verify_document_type};
