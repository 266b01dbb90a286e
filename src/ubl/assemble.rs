use super::attachment::{AttachmentLoader, embed};
use super::document::{Delivery, PaymentMeans, UblDocument, UblParty};
use super::kind::descriptor;
use super::line::build_line;
use super::DOCUMENT_CURRENCY;
use crate::core::{GeneratorConfig, Invoice, Party, Period, UblError, normalize_vat_id};
use crate::peppol::EndpointId;
use crate::tax::{MonetaryTotals, aggregate};

/// Compose the output tree for `invoice`.
///
/// Pure apart from the optional attachment read: the input is only
/// borrowed and every call returns a freshly built document.
pub fn assemble(
    invoice: &Invoice,
    config: &GeneratorConfig,
    loader: &dyn AttachmentLoader,
) -> Result<UblDocument, UblError> {
    let kind = descriptor(invoice.kind);

    let supplier = party(&invoice.supplier, "supplier")?;
    let customer = party(&invoice.customer, "customer")?;

    // Date alone still yields a Delivery block, with no location.
    let delivery = (invoice.delivery_address.is_some() || invoice.actual_delivery_date.is_some())
        .then(|| Delivery {
            actual_delivery_date: invoice.actual_delivery_date,
            location: invoice.delivery_address.clone(),
        });

    let invoice_period = match (invoice.invoice_period_start, invoice.invoice_period_end) {
        (Some(start), Some(end)) => Some(Period { start, end }),
        _ => None,
    };

    let lines = invoice
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| build_line(i, line))
        .collect::<Result<Vec<_>, _>>()?;

    let summary = aggregate(&invoice.lines)?;
    let monetary_totals = MonetaryTotals::from_summary(&summary)?;

    let document_references = match &invoice.pdf {
        Some(pdf) => embed(&invoice.id, pdf, kind.attachment_label, loader)?,
        None => Vec::new(),
    };

    Ok(UblDocument {
        kind: invoice.kind,
        customization_id: invoice.customization_id.clone(),
        profile_id: invoice.profile_id.clone(),
        id: invoice.id.clone(),
        issue_date: config.issue_date,
        due_date: kind.has_due_date.then(|| config.due_date()),
        currency: DOCUMENT_CURRENCY.to_string(),
        invoice_period,
        order_reference: invoice.id.clone(),
        document_references,
        supplier,
        customer,
        delivery,
        payment_means: PaymentMeans {
            code: config.payment_means_code.clone(),
            account_id: invoice.payment.iban.clone(),
            bic: invoice.payment.bic.clone().filter(|b| !b.is_empty()),
        },
        payment_terms: invoice.note.clone().filter(|n| !n.is_empty()),
        tax_total: summary.tax_total,
        tax_subtotals: summary.subtotals,
        monetary_totals,
        lines,
    })
}

fn party(party: &Party, role: &'static str) -> Result<UblParty, UblError> {
    Ok(UblParty {
        endpoint: EndpointId::parse(&party.peppol_id, role)?,
        name: party.name.clone(),
        address: party.address.clone(),
        company_id: normalize_vat_id(&party.vat_id, &party.address.country_code),
        registration_name: party.legal_name().to_string(),
    })
}
