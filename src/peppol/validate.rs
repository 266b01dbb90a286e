//! Peppol BIS Billing 3.0 rules that can be checked on the input model.
//!
//! This is a subset: the authoritative check is still the external
//! Schematron validator run over the produced bytes.

use super::EndpointId;
use crate::core::*;

/// Check an input against the Peppol rules that generation cannot repair.
///
/// Returns all errors found. An empty list means none of the covered rules
/// would fire; it does not block or alter generation.
pub fn validate_peppol(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // BR-02: A document shall have a document number
    if invoice.id.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "id",
            "document number must not be empty",
            "BR-02",
        ));
    }

    // BR-16: At least one line
    if invoice.lines.is_empty() {
        errors.push(ValidationError::with_rule(
            "lines",
            "document must have at least one line",
            "BR-16",
        ));
    }

    // PEPPOL-EN16931-R020 / R010: Electronic addresses must be usable
    for (label, party, rule) in [
        ("supplier", &invoice.supplier, "PEPPOL-EN16931-R020"),
        ("customer", &invoice.customer, "PEPPOL-EN16931-R010"),
    ] {
        if let Err(e) = EndpointId::parse(&party.peppol_id, label) {
            errors.push(ValidationError::with_rule(
                format!("{label}.peppol_id"),
                e.to_string(),
                rule,
            ));
        }
    }

    // BR-29: Period end must not precede period start
    if let (Some(start), Some(end)) = (invoice.invoice_period_start, invoice.invoice_period_end) {
        if end < start {
            errors.push(ValidationError::with_rule(
                "invoice_period_end",
                format!("invoicing period ends ({end}) before it starts ({start})"),
                "BR-29",
            ));
        }
    }

    let has_intra_community = invoice
        .lines
        .iter()
        .any(|l| l.tax_category.as_ref().is_some_and(TaxCategory::is_intra_community));
    if has_intra_community {
        validate_intra_community(invoice, &mut errors);
    }

    errors
}

fn validate_intra_community(invoice: &Invoice, errors: &mut Vec<ValidationError>) {
    // BR-IC-02: Seller VAT identifier required
    if invoice.supplier.vat_id.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "supplier.vat_id",
            "intra-community supply requires the seller VAT identifier",
            "BR-IC-02",
        ));
    }

    // BR-IC-02: Buyer VAT identifier required
    if invoice.customer.vat_id.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "customer.vat_id",
            "intra-community supply requires the buyer VAT identifier",
            "BR-IC-02",
        ));
    }

    // BR-IC-11: Actual delivery date or invoicing period required
    let has_period = invoice.invoice_period_start.is_some() && invoice.invoice_period_end.is_some();
    if invoice.actual_delivery_date.is_none() && !has_period {
        errors.push(ValidationError::with_rule(
            "actual_delivery_date",
            "intra-community supply requires an actual delivery date or an invoicing period",
            "BR-IC-11",
        ));
    }

    // BR-IC-12: Deliver-to country required
    let delivery_country = invoice
        .delivery_address
        .as_ref()
        .map(|a| a.country_code.trim())
        .unwrap_or_default();
    if delivery_country.is_empty() {
        errors.push(ValidationError::with_rule(
            "delivery_address.country_code",
            "intra-community supply requires the deliver-to country code",
            "BR-IC-12",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn party(vat: &str, country: &str) -> Party {
        PartyBuilder::new("Party", "9925:BE0123456789", AddressBuilder::new(country).build())
            .vat_id(vat)
            .build()
    }

    fn ic_line() -> InvoiceLine {
        InvoiceLineBuilder::new("Goods", dec!(1), dec!(100))
            .tax(TaxCategory::IntraCommunitySupply, dec!(0))
            .build()
    }

    fn rules(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().filter_map(|e| e.rule.as_deref()).collect()
    }

    #[test]
    fn domestic_invoice_passes() {
        let inv = InvoiceBuilder::new("INV-1")
            .supplier(party("BE0123456789", "BE"))
            .customer(party("BE9876543210", "BE"))
            .add_line(
                InvoiceLineBuilder::new("A", dec!(1), dec!(1))
                    .tax(TaxCategory::StandardRate, dec!(21))
                    .build(),
            )
            .build()
            .unwrap();
        assert!(validate_peppol(&inv).is_empty());
    }

    #[test]
    fn intra_community_needs_delivery_information() {
        let inv = InvoiceBuilder::new("INV-IC")
            .supplier(party("BE0123456789", "BE"))
            .customer(party("", "NL"))
            .add_line(ic_line())
            .build()
            .unwrap();
        let errors = validate_peppol(&inv);
        let rules = rules(&errors);
        assert!(rules.contains(&"BR-IC-02"));
        assert!(rules.contains(&"BR-IC-11"));
        assert!(rules.contains(&"BR-IC-12"));
    }

    #[test]
    fn intra_community_complete_passes() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let inv = InvoiceBuilder::new("INV-IC")
            .supplier(party("BE0123456789", "BE"))
            .customer(party("NL123456789B01", "NL"))
            .delivery_address(AddressBuilder::new("NL").build())
            .actual_delivery_date(d)
            .add_line(ic_line())
            .build()
            .unwrap();
        assert!(validate_peppol(&inv).is_empty());
    }

    #[test]
    fn k_spelled_as_other_code_is_still_checked() {
        let line = InvoiceLineBuilder::new("Goods", dec!(1), dec!(100))
            .tax(TaxCategory::Other("K".into()), dec!(0))
            .build();
        let inv = InvoiceBuilder::new("INV-IC")
            .supplier(party("BE0123456789", "BE"))
            .customer(party("NL123456789B01", "NL"))
            .add_line(line)
            .build()
            .unwrap();
        let errors = validate_peppol(&inv);
        let rules = rules(&errors);
        assert!(rules.contains(&"BR-IC-11"));
        assert!(rules.contains(&"BR-IC-12"));
    }

    #[test]
    fn invoicing_period_satisfies_br_ic_11() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let inv = InvoiceBuilder::new("INV-IC")
            .supplier(party("BE0123456789", "BE"))
            .customer(party("NL123456789B01", "NL"))
            .delivery_address(AddressBuilder::new("NL").build())
            .invoicing_period(start, end)
            .add_line(ic_line())
            .build()
            .unwrap();
        assert!(!rules(&validate_peppol(&inv)).contains(&"BR-IC-11"));
    }

    #[test]
    fn reversed_period_and_bad_endpoint() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut supplier = party("BE0123456789", "BE");
        supplier.peppol_id = "99".into();
        let inv = InvoiceBuilder::new("")
            .supplier(supplier)
            .customer(party("BE9876543210", "BE"))
            .invoicing_period(start, end)
            .add_line(InvoiceLineBuilder::new("A", dec!(1), dec!(1)).build())
            .build()
            .unwrap();
        let errors = validate_peppol(&inv);
        let rules = rules(&errors);
        assert!(rules.contains(&"BR-02"));
        assert!(rules.contains(&"BR-29"));
        assert!(rules.contains(&"PEPPOL-EN16931-R020"));
    }
}
