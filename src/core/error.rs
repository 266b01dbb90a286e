use thiserror::Error;

/// Errors that can occur while building or generating a document.
///
/// Generation is all-or-nothing: any of these aborts the call and no
/// partial output is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UblError {
    /// Builder encountered invalid or missing input.
    #[error("builder error: {0}")]
    Builder(String),

    /// A compound Peppol identifier could not be split into scheme and value.
    #[error("malformed Peppol identifier for {party}: {value:?}")]
    MalformedPeppolId {
        /// Which party carried the identifier ("supplier" / "customer").
        party: &'static str,
        /// The raw identifier as supplied.
        value: String,
    },

    /// The attachment file could not be read.
    #[error("add attachment failed: {0}")]
    Attachment(#[from] std::io::Error),

    /// A computed amount does not fit the decimal range.
    #[error("amount overflow computing {0}")]
    AmountOverflow(&'static str),

    /// The XML writer rejected the composed document.
    #[error("xml marshal failed: {0}")]
    Xml(String),
}

/// A single rule violation with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the offending field (e.g. "customer.vat_id").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Peppol / EN 16931 business rule ID if applicable (e.g. "BR-IC-02").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error with a business rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
