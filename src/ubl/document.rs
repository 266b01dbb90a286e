//! Typed UBL 2.1 output tree and its serialization.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::kind::{KindDescriptor, descriptor};
use super::line::LineFragment;
use super::ns;
use super::xml_utils::XmlWriter;
use crate::core::{Address, DocumentKind, Period, UblError};
use crate::peppol::EndpointId;
use crate::tax::{MonetaryTotals, ResolvedTax, TaxSubtotal};

/// One fully assembled Invoice or CreditNote.
///
/// Built fresh by every [`assemble`](super::assemble) call and owned by the
/// caller; nothing in it refers back to the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UblDocument {
    pub kind: DocumentKind,
    pub customization_id: String,
    pub profile_id: String,
    pub id: String,
    pub issue_date: NaiveDate,
    /// Always `Some` for invoices, always `None` for credit notes.
    pub due_date: Option<NaiveDate>,
    pub currency: String,
    pub invoice_period: Option<Period>,
    /// BT-13: Reuses the document id.
    pub order_reference: String,
    /// BG-24: Empty, or exactly two entries.
    pub document_references: Vec<DocumentReference>,
    pub supplier: UblParty,
    pub customer: UblParty,
    pub delivery: Option<Delivery>,
    pub payment_means: PaymentMeans,
    /// BT-20: Only present for a non-empty note.
    pub payment_terms: Option<String>,
    pub tax_total: Decimal,
    pub tax_subtotals: Vec<TaxSubtotal>,
    pub monetary_totals: MonetaryTotals,
    pub lines: Vec<LineFragment>,
}

/// Party as written inside `AccountingSupplierParty` / `AccountingCustomerParty`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UblParty {
    pub endpoint: EndpointId,
    pub name: String,
    pub address: Address,
    /// Normalized VAT identifier.
    pub company_id: String,
    pub registration_name: String,
}

/// BG-13. At least one of the two fields is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delivery {
    pub actual_delivery_date: Option<NaiveDate>,
    pub location: Option<Address>,
}

/// BG-16 with a credit transfer account (BG-17).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentMeans {
    pub code: String,
    pub account_id: String,
    pub bic: Option<String>,
}

/// BG-24: `cac:AdditionalDocumentReference`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReference {
    pub id: String,
    pub description: Option<String>,
    pub attachment: Option<EmbeddedDocument>,
}

/// BT-125: Base64 payload with its attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddedDocument {
    pub mime_code: String,
    pub filename: String,
    /// Base64 text, standard alphabet with padding.
    pub content: String,
}

impl UblDocument {
    /// Serialize to UTF-8 XML bytes with declaration and two-space indent.
    pub fn to_xml(&self) -> Result<Vec<u8>, UblError> {
        let kind = descriptor(self.kind);
        let mut w = XmlWriter::new(&self.currency)?;

        w.start_element_with_attrs(
            kind.root_element,
            &[
                ("xmlns", kind.root_namespace),
                ("xmlns:cac", ns::CAC),
                ("xmlns:cbc", ns::CBC),
            ],
        )?;

        // BT-24, BT-23, BT-1, BT-2
        w.text_element("cbc:CustomizationID", &self.customization_id)?;
        w.text_element("cbc:ProfileID", &self.profile_id)?;
        w.text_element("cbc:ID", &self.id)?;
        w.date_element("cbc:IssueDate", self.issue_date)?;
        // BT-9
        if let Some(due) = self.due_date.filter(|_| kind.has_due_date) {
            w.date_element("cbc:DueDate", due)?;
        }
        // BT-3
        w.text_element(kind.type_code_element, &self.kind.type_code().to_string())?;
        // BT-5
        w.text_element("cbc:DocumentCurrencyCode", &self.currency)?;

        // BG-14
        if let Some(period) = &self.invoice_period {
            w.wrapped("cac:InvoicePeriod", |w| {
                w.date_element("cbc:StartDate", period.start)?;
                w.date_element("cbc:EndDate", period.end)?;
                Ok(())
            })?;
        }

        // BT-13
        w.id_wrapper("cac:OrderReference", &self.order_reference)?;

        // BG-24
        for reference in &self.document_references {
            write_document_reference(&mut w, reference)?;
        }

        write_party(&mut w, &self.supplier, "cac:AccountingSupplierParty")?;
        write_party(&mut w, &self.customer, "cac:AccountingCustomerParty")?;

        // BG-13
        if let Some(delivery) = &self.delivery {
            w.wrapped("cac:Delivery", |w| {
                if let Some(date) = delivery.actual_delivery_date {
                    w.date_element("cbc:ActualDeliveryDate", date)?;
                }
                if let Some(address) = &delivery.location {
                    w.wrapped("cac:DeliveryLocation", |w| {
                        write_address(w, address, "cac:Address")
                    })?;
                }
                Ok(())
            })?;
        }

        // BG-16
        let means = &self.payment_means;
        w.wrapped("cac:PaymentMeans", |w| {
            w.text_element("cbc:PaymentMeansCode", &means.code)?;
            w.wrapped("cac:PayeeFinancialAccount", |w| {
                w.text_element("cbc:ID", &means.account_id)?;
                if let Some(bic) = means.bic.as_deref().filter(|b| !b.is_empty()) {
                    w.id_wrapper("cac:FinancialInstitutionBranch", bic)?;
                }
                Ok(())
            })?;
            Ok(())
        })?;

        // BT-20
        if let Some(note) = &self.payment_terms {
            w.wrapped("cac:PaymentTerms", |w| {
                w.text_element("cbc:Note", note)?;
                Ok(())
            })?;
        }

        // BG-23
        w.wrapped("cac:TaxTotal", |w| {
            w.amount_element("cbc:TaxAmount", self.tax_total)?;
            for sub in &self.tax_subtotals {
                w.wrapped("cac:TaxSubtotal", |w| {
                    w.amount_element("cbc:TaxableAmount", sub.taxable_amount)?;
                    w.amount_element("cbc:TaxAmount", sub.tax_amount)?;
                    write_tax_category(w, &sub.tax, "cac:TaxCategory")
                })?;
            }
            Ok(())
        })?;

        // BG-22
        let totals = &self.monetary_totals;
        w.wrapped("cac:LegalMonetaryTotal", |w| {
            w.amount_element("cbc:LineExtensionAmount", totals.line_extension)?;
            w.amount_element("cbc:TaxExclusiveAmount", totals.tax_exclusive)?;
            w.amount_element("cbc:TaxInclusiveAmount", totals.tax_inclusive)?;
            w.amount_element("cbc:PayableAmount", totals.payable)?;
            Ok(())
        })?;

        // BG-25
        for line in &self.lines {
            w.wrapped(kind.line_element, |w| write_line(w, line, kind))?;
        }

        w.end_element(kind.root_element)?;
        Ok(w.into_bytes())
    }
}

fn write_line(
    w: &mut XmlWriter,
    line: &LineFragment,
    kind: &KindDescriptor,
) -> Result<(), UblError> {
    w.text_element("cbc:ID", &line.id.to_string())?;
    w.quantity_element(kind.quantity_element, line.quantity, line.unit_code)?;
    w.amount_element("cbc:LineExtensionAmount", line.line_extension_amount)?;
    if kind.has_line_tax_total {
        w.wrapped("cac:TaxTotal", |w| {
            w.amount_element("cbc:TaxAmount", line.tax_amount)?;
            Ok(())
        })?;
    }
    w.wrapped("cac:Item", |w| {
        w.opt_text_element("cbc:Description", line.description.as_deref())?;
        w.text_element("cbc:Name", &line.name)?;
        write_tax_category(w, &line.tax, "cac:ClassifiedTaxCategory")
    })?;
    w.wrapped("cac:Price", |w| {
        w.amount_element("cbc:PriceAmount", line.price)?;
        Ok(())
    })?;
    Ok(())
}

fn write_party(w: &mut XmlWriter, party: &UblParty, wrapper: &str) -> Result<(), UblError> {
    w.start_element(wrapper)?;
    w.start_element("cac:Party")?;

    // BT-34 / BT-49
    w.text_element_with_attrs(
        "cbc:EndpointID",
        &party.endpoint.value,
        &[("schemeID", party.endpoint.scheme.as_str())],
    )?;

    w.wrapped("cac:PartyName", |w| {
        w.text_element("cbc:Name", &party.name)?;
        Ok(())
    })?;

    write_address(w, &party.address, "cac:PostalAddress")?;

    w.wrapped("cac:PartyTaxScheme", |w| {
        w.text_element("cbc:CompanyID", &party.company_id)?;
        w.vat_scheme()?;
        Ok(())
    })?;

    w.wrapped("cac:PartyLegalEntity", |w| {
        w.text_element("cbc:RegistrationName", &party.registration_name)?;
        Ok(())
    })?;

    w.end_element("cac:Party")?;
    w.end_element(wrapper)?;
    Ok(())
}

fn write_address(w: &mut XmlWriter, address: &Address, element: &str) -> Result<(), UblError> {
    w.wrapped(element, |w| {
        w.opt_text_element("cbc:StreetName", address.street.as_deref())?;
        w.opt_text_element("cbc:CityName", address.city.as_deref())?;
        w.opt_text_element("cbc:PostalZone", address.postal_code.as_deref())?;
        w.wrapped("cac:Country", |w| {
            w.text_element("cbc:IdentificationCode", &address.country_code)?;
            Ok(())
        })?;
        Ok(())
    })?;
    Ok(())
}

fn write_tax_category(w: &mut XmlWriter, tax: &ResolvedTax, element: &str) -> Result<(), UblError> {
    w.wrapped(element, |w| {
        w.text_element("cbc:ID", tax.category.code())?;
        w.text_element("cbc:Name", &tax.name)?;
        w.percent_element(tax.rate)?;
        if let Some(ex) = &tax.exemption {
            // BT-121, BT-120
            w.text_element("cbc:TaxExemptionReasonCode", &ex.code)?;
            w.text_element("cbc:TaxExemptionReason", &ex.reason)?;
        }
        w.vat_scheme()?;
        Ok(())
    })?;
    Ok(())
}

fn write_document_reference(
    w: &mut XmlWriter,
    reference: &DocumentReference,
) -> Result<(), UblError> {
    w.wrapped("cac:AdditionalDocumentReference", |w| {
        w.text_element("cbc:ID", &reference.id)?;
        w.opt_text_element("cbc:DocumentDescription", reference.description.as_deref())?;
        if let Some(doc) = &reference.attachment {
            w.wrapped("cac:Attachment", |w| {
                w.text_element_with_attrs(
                    "cbc:EmbeddedDocumentBinaryObject",
                    &doc.content,
                    &[
                        ("mimeCode", doc.mime_code.as_str()),
                        ("filename", doc.filename.as_str()),
                    ],
                )?;
                Ok(())
            })?;
        }
        Ok(())
    })?;
    Ok(())
}
