use crate::core::DocumentKind;

use super::ns;

/// Everything that differs between an invoice and a credit note on the
/// wire. The assembler and writer are shared; only this table varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDescriptor {
    pub root_element: &'static str,
    pub root_namespace: &'static str,
    /// Element carrying [`DocumentKind::type_code`].
    pub type_code_element: &'static str,
    pub line_element: &'static str,
    pub quantity_element: &'static str,
    /// BT-9 is only written on invoices.
    pub has_due_date: bool,
    /// Line-level `cac:TaxTotal` is only written on invoices.
    pub has_line_tax_total: bool,
    /// Description of an attachment read from a file.
    pub attachment_label: &'static str,
}

static INVOICE: KindDescriptor = KindDescriptor {
    root_element: "Invoice",
    root_namespace: ns::INVOICE,
    type_code_element: "cbc:InvoiceTypeCode",
    line_element: "cac:InvoiceLine",
    quantity_element: "cbc:InvoicedQuantity",
    has_due_date: true,
    has_line_tax_total: true,
    attachment_label: "Invoice",
};

static CREDIT_NOTE: KindDescriptor = KindDescriptor {
    root_element: "CreditNote",
    root_namespace: ns::CREDIT_NOTE,
    type_code_element: "cbc:CreditNoteTypeCode",
    line_element: "cac:CreditNoteLine",
    quantity_element: "cbc:CreditedQuantity",
    has_due_date: false,
    has_line_tax_total: false,
    attachment_label: "CreditNote",
};

/// Look up the wire descriptor of a document kind.
pub fn descriptor(kind: DocumentKind) -> &'static KindDescriptor {
    match kind {
        DocumentKind::Invoice => &INVOICE,
        DocumentKind::CreditNote => &CREDIT_NOTE,
    }
}
