//! Electronic Address Scheme (EAS) codes used in the scheme part of a
//! Peppol participant id.

use serde::Serialize;

/// A known EAS code with a human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EasScheme {
    /// The four-digit scheme code (e.g. "0088", "9925").
    pub code: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

impl EasScheme {
    pub const GLN: Self = Self {
        code: "0088",
        description: "GS1 GLN",
    };
    pub const BE_EN: Self = Self {
        code: "0208",
        description: "Belgian enterprise number",
    };
    pub const BE_VAT: Self = Self {
        code: "9925",
        description: "Belgian VAT number",
    };
    pub const NL_KVK: Self = Self {
        code: "0106",
        description: "Dutch KvK",
    };
    pub const NL_VAT: Self = Self {
        code: "9944",
        description: "Dutch VAT number",
    };
    pub const DE_VAT: Self = Self {
        code: "9930",
        description: "German VAT number",
    };
    pub const LEITWEG_ID: Self = Self {
        code: "0204",
        description: "Leitweg-ID",
    };
    pub const FR_VAT: Self = Self {
        code: "9957",
        description: "French VAT number",
    };
    pub const IT_VAT: Self = Self {
        code: "9906",
        description: "Italian VAT number",
    };
    pub const AT_VAT: Self = Self {
        code: "9914",
        description: "Austrian VAT number",
    };
    pub const GR_VAT: Self = Self {
        code: "9933",
        description: "Greek VAT number",
    };
    pub const LU_VAT: Self = Self {
        code: "9938",
        description: "Luxembourg VAT number",
    };
    pub const DK_DIGST: Self = Self {
        code: "0184",
        description: "DIGSTORG",
    };
    pub const FI_OVT: Self = Self {
        code: "0037",
        description: "Finnish OVT",
    };
    pub const SE_ORG: Self = Self {
        code: "0007",
        description: "Swedish Org number",
    };
    pub const NO_ORG: Self = Self {
        code: "0192",
        description: "Norwegian Org number",
    };
}

static KNOWN_SCHEMES: &[EasScheme] = &[
    EasScheme::SE_ORG,
    EasScheme::FI_OVT,
    EasScheme::GLN,
    EasScheme::NL_KVK,
    EasScheme::DK_DIGST,
    EasScheme::NO_ORG,
    EasScheme::LEITWEG_ID,
    EasScheme::BE_EN,
    EasScheme::IT_VAT,
    EasScheme::AT_VAT,
    EasScheme::BE_VAT,
    EasScheme::DE_VAT,
    EasScheme::GR_VAT,
    EasScheme::LU_VAT,
    EasScheme::NL_VAT,
    EasScheme::FR_VAT,
];

/// Look up a scheme by its four-digit code.
pub fn eas_scheme_for_code(code: &str) -> Option<EasScheme> {
    KNOWN_SCHEMES.iter().find(|s| s.code == code).copied()
}
