use serde::{Deserialize, Serialize};

/// The closed set of document types the service verifies.
///
/// The caller claims one of these labels; it is never inferred from the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    AadhaarCard,
    PanCard,
    TenthMarksheet,
    TwelfthMarksheet,
    GateScorecard,
    Resume,
    DegreeCertificate,
}

impl DocumentType {
    pub const ALL: [DocumentType; 7] = [
        DocumentType::AadhaarCard,
        DocumentType::PanCard,
        DocumentType::TenthMarksheet,
        DocumentType::TwelfthMarksheet,
        DocumentType::GateScorecard,
        DocumentType::Resume,
        DocumentType::DegreeCertificate,
    ];

    /// Parse the wire label supplied by the caller.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Aadhaar Card" => Some(DocumentType::AadhaarCard),
            "PAN Card" => Some(DocumentType::PanCard),
            "10th Marksheet" => Some(DocumentType::TenthMarksheet),
            "12th Marksheet" => Some(DocumentType::TwelfthMarksheet),
            "GATE Scorecard" => Some(DocumentType::GateScorecard),
            "Resume" => Some(DocumentType::Resume),
            "Degree Certificate" => Some(DocumentType::DegreeCertificate),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::AadhaarCard => "Aadhaar Card",
            DocumentType::PanCard => "PAN Card",
            DocumentType::TenthMarksheet => "10th Marksheet",
            DocumentType::TwelfthMarksheet => "12th Marksheet",
            DocumentType::GateScorecard => "GATE Scorecard",
            DocumentType::Resume => "Resume",
            DocumentType::DegreeCertificate => "Degree Certificate",
        }
    }

    /// Verification phrases expected somewhere in the extracted text of a
    /// genuine document of this type.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            DocumentType::AadhaarCard => &[
                "Unique Identification Authority",
                "Aadhaar Number",
                "Government of India",
                "Unique Identification",
            ],
            DocumentType::PanCard => &[
                "Income Tax Department",
                "Permanent Account Number",
                "Govt. of India",
            ],
            DocumentType::TenthMarksheet => &[
                "Secondary School Certificate",
                "10th Standard",
                "Board of Secondary Education",
            ],
            DocumentType::TwelfthMarksheet => &[
                "Higher Secondary Certificate",
                "12th Standard",
                "Senior Secondary",
                "Hr.Sec.School No.",
            ],
            DocumentType::GateScorecard => &[
                "Graduate Aptitude Test in Engineering",
                "GATE Score",
                "GATE Examination",
            ],
            DocumentType::Resume => &["Curriculum Vitae", "CV", "Resume", "Work Experience"],
            DocumentType::DegreeCertificate => &[
                "Bachelor of",
                "Master of",
                "Doctor of",
                "University",
                "Degree",
            ],
        }
    }
}
