//! Peppol BIS Billing 3.0 identifiers and pre-generation rule checks.
//!
//! Peppol BIS 3.0 is a CIUS of EN 16931 on top of UBL 2.1. This module
//! knows how participants are addressed on the network (scheme + value
//! endpoint ids) and which of the intra-community rules can be checked on
//! the input before a document is produced.

mod eas;
mod endpoint;
mod validate;

pub use eas::{EasScheme, eas_scheme_for_code};
pub use endpoint::EndpointId;
pub use validate::validate_peppol;

/// Peppol BIS Billing 3.0 customization identifier (BT-24).
pub const PEPPOL_CUSTOMIZATION_ID: &str =
    "urn:cen.eu:en16931:2017#compliant#urn:fdc:peppol.eu:2017:poacc:billing:3.0";

/// Peppol BIS Billing 3.0 profile identifier (BT-23).
pub const PEPPOL_PROFILE_ID: &str = "urn:fdc:peppol.eu:2017:poacc:billing:01:1.0";
