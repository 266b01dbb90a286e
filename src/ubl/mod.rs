//! UBL 2.1 Invoice / CreditNote output.
//!
//! [`assemble`] turns an [`Invoice`](crate::core::Invoice) into a typed
//! [`UblDocument`]; [`UblDocument::to_xml`] serializes it. [`generate`] does
//! both in one call.
//!
//! ```no_run
//! use peppol_ubl::core::*;
//! use peppol_ubl::ubl;
//!
//! let invoice: Invoice = todo!(); // build via InvoiceBuilder
//! let config = GeneratorConfig::today();
//! let xml = ubl::generate(&invoice, &config).unwrap();
//! std::fs::write("invoice.xml", xml).unwrap();
//! ```

mod assemble;
mod attachment;
mod document;
mod kind;
mod line;
mod xml_utils;

pub use assemble::assemble;
pub use attachment::{
    AttachmentLoader, CLASSIFICATION_REFERENCE_DESCRIPTION, CLASSIFICATION_REFERENCE_ID,
    FsLoader, PDF_MIME_TYPE, detect_mime_type, embed, embed_bytes,
};
pub use document::{
    Delivery, DocumentReference, EmbeddedDocument, PaymentMeans, UblDocument, UblParty,
};
pub use kind::{KindDescriptor, descriptor};
pub use line::{LineFragment, UNSPECIFIED_UNIT_CODE, build_line};
pub use xml_utils::format_decimal;

use crate::core::{GeneratorConfig, Invoice, UblError};

/// The single document currency (BT-5).
pub const DOCUMENT_CURRENCY: &str = "EUR";

/// UBL 2.1 namespace URIs.
pub mod ns {
    pub const INVOICE: &str = "urn:oasis:names:specification:ubl:schema:xsd:Invoice-2";
    pub const CREDIT_NOTE: &str = "urn:oasis:names:specification:ubl:schema:xsd:CreditNote-2";
    pub const CAC: &str =
        "urn:oasis:names:specification:ubl:schema:xsd:CommonAggregateComponents-2";
    pub const CBC: &str = "urn:oasis:names:specification:ubl:schema:xsd:CommonBasicComponents-2";
}

/// Generate the XML bytes for `invoice`, reading any attachment file from
/// disk.
pub fn generate(invoice: &Invoice, config: &GeneratorConfig) -> Result<Vec<u8>, UblError> {
    generate_with(invoice, config, &FsLoader)
}

/// Like [`generate`], with attachment files read through `loader`.
pub fn generate_with(
    invoice: &Invoice,
    config: &GeneratorConfig,
    loader: &dyn AttachmentLoader,
) -> Result<Vec<u8>, UblError> {
    tracing::debug!(
        id = %invoice.id,
        kind = ?invoice.kind,
        lines = invoice.lines.len(),
        "generating UBL document"
    );
    let document = assemble(invoice, config, loader)?;
    let xml = document.to_xml()?;
    tracing::debug!(
        id = %invoice.id,
        subtotals = document.tax_subtotals.len(),
        bytes = xml.len(),
        "generated UBL document"
    );
    Ok(xml)
}
