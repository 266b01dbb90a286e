use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::UblError;
use super::types::*;
use crate::peppol::{PEPPOL_CUSTOMIZATION_ID, PEPPOL_PROFILE_ID};

/// Builder for constructing a valid document input.
///
/// ```
/// use peppol_ubl::core::*;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new("INV-001")
///     .supplier(PartyBuilder::new("ABC Supplies Ltd", "9925:BE0123456789",
///         AddressBuilder::new("BE").build()).vat_id("BE0123456789").build())
///     .customer(PartyBuilder::new("XYZ Corp", "9925:BE9876543210",
///         AddressBuilder::new("BE").build()).vat_id("BE9876543210").build())
///     .add_line(InvoiceLineBuilder::new("Consulting", dec!(10), dec!(150))
///         .tax(TaxCategory::StandardRate, dec!(21))
///         .build())
///     .build()
///     .unwrap();
/// assert_eq!(invoice.kind, DocumentKind::Invoice);
/// ```
pub struct InvoiceBuilder {
    kind: DocumentKind,
    id: String,
    customization_id: String,
    profile_id: String,
    supplier: Option<Party>,
    customer: Option<Party>,
    delivery_address: Option<Address>,
    actual_delivery_date: Option<NaiveDate>,
    invoice_period_start: Option<NaiveDate>,
    invoice_period_end: Option<NaiveDate>,
    payment: PaymentAccount,
    note: Option<String>,
    lines: Vec<InvoiceLine>,
    pdf: Option<PdfAttachment>,
}

impl InvoiceBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: DocumentKind::Invoice,
            id: id.into(),
            customization_id: PEPPOL_CUSTOMIZATION_ID.to_string(),
            profile_id: PEPPOL_PROFILE_ID.to_string(),
            supplier: None,
            customer: None,
            delivery_address: None,
            actual_delivery_date: None,
            invoice_period_start: None,
            invoice_period_end: None,
            payment: PaymentAccount::default(),
            note: None,
            lines: Vec::new(),
            pdf: None,
        }
    }

    /// Start a credit note (type code 381) instead of an invoice.
    pub fn credit_note(id: impl Into<String>) -> Self {
        Self::new(id).kind(DocumentKind::CreditNote)
    }

    pub fn kind(mut self, kind: DocumentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn customization_id(mut self, id: impl Into<String>) -> Self {
        self.customization_id = id.into();
        self
    }

    pub fn profile_id(mut self, id: impl Into<String>) -> Self {
        self.profile_id = id.into();
        self
    }

    pub fn supplier(mut self, party: Party) -> Self {
        self.supplier = Some(party);
        self
    }

    pub fn customer(mut self, party: Party) -> Self {
        self.customer = Some(party);
        self
    }

    pub fn delivery_address(mut self, address: Address) -> Self {
        self.delivery_address = Some(address);
        self
    }

    pub fn actual_delivery_date(mut self, date: NaiveDate) -> Self {
        self.actual_delivery_date = Some(date);
        self
    }

    pub fn invoicing_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.invoice_period_start = Some(start);
        self.invoice_period_end = Some(end);
        self
    }

    /// Payee account: IBAN and optional BIC.
    pub fn payment(mut self, iban: impl Into<String>, bic: Option<String>) -> Self {
        self.payment = PaymentAccount {
            iban: iban.into(),
            bic,
        };
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn add_line(mut self, line: InvoiceLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Embed a PDF read from `path` when the document is generated.
    pub fn pdf_file(mut self, path: impl Into<String>) -> Self {
        self.pdf = Some(PdfAttachment {
            filename: path.into(),
            data: None,
            description: None,
        });
        self
    }

    /// Embed the given PDF bytes under `filename`.
    pub fn pdf_data(
        mut self,
        filename: impl Into<String>,
        data: Vec<u8>,
        description: Option<String>,
    ) -> Self {
        self.pdf = Some(PdfAttachment {
            filename: filename.into(),
            data: Some(data),
            description,
        });
        self
    }

    /// Build the input, checking the data-model invariants.
    pub fn build(self) -> Result<Invoice, UblError> {
        let supplier = self
            .supplier
            .ok_or_else(|| UblError::Builder("supplier is required".into()))?;
        let customer = self
            .customer
            .ok_or_else(|| UblError::Builder("customer is required".into()))?;

        if self.lines.is_empty() {
            return Err(UblError::Builder(
                "at least one line item is required".into(),
            ));
        }

        for (i, line) in self.lines.iter().enumerate() {
            check_line(i + 1, line)?;
        }

        Ok(Invoice {
            kind: self.kind,
            id: self.id,
            customization_id: self.customization_id,
            profile_id: self.profile_id,
            supplier,
            customer,
            delivery_address: self.delivery_address,
            actual_delivery_date: self.actual_delivery_date,
            invoice_period_start: self.invoice_period_start,
            invoice_period_end: self.invoice_period_end,
            payment: self.payment,
            note: self.note,
            lines: self.lines,
            pdf: self.pdf,
        })
    }
}

fn check_line(position: usize, line: &InvoiceLine) -> Result<(), UblError> {
    if line.quantity < Decimal::ZERO {
        return Err(UblError::Builder(format!(
            "line {position}: quantity {} must not be negative",
            line.quantity
        )));
    }
    if line.price < Decimal::ZERO {
        return Err(UblError::Builder(format!(
            "line {position}: price {} must not be negative",
            line.price
        )));
    }
    // Intra-community lines are forced to 0% later, whatever rate they state.
    let forced_zero = line
        .tax_category
        .as_ref()
        .is_some_and(TaxCategory::is_intra_community);
    if !forced_zero && (line.tax_rate < Decimal::ZERO || line.tax_rate > Decimal::ONE_HUNDRED) {
        return Err(UblError::Builder(format!(
            "line {position}: tax rate {} is outside 0..=100",
            line.tax_rate
        )));
    }
    Ok(())
}

/// Builder for Party (supplier/customer).
pub struct PartyBuilder {
    name: String,
    registration_name: Option<String>,
    vat_id: String,
    peppol_id: String,
    address: Address,
}

impl PartyBuilder {
    /// `peppol_id` is the compound participant id, e.g. `"9925:BE0123456789"`.
    pub fn new(name: impl Into<String>, peppol_id: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            registration_name: None,
            vat_id: String::new(),
            peppol_id: peppol_id.into(),
            address,
        }
    }

    pub fn vat_id(mut self, id: impl Into<String>) -> Self {
        self.vat_id = id.into();
        self
    }

    pub fn registration_name(mut self, name: impl Into<String>) -> Self {
        self.registration_name = Some(name.into());
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            registration_name: self.registration_name,
            vat_id: self.vat_id,
            peppol_id: self.peppol_id,
            address: self.address,
        }
    }
}

/// Builder for Address. Only the country is mandatory.
pub struct AddressBuilder {
    street: Option<String>,
    city: Option<String>,
    postal_code: Option<String>,
    country_code: String,
}

impl AddressBuilder {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            street: None,
            city: None,
            postal_code: None,
            country_code: country_code.into(),
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street,
            city: self.city,
            postal_code: self.postal_code,
            country_code: self.country_code,
        }
    }
}

/// Builder for InvoiceLine.
pub struct InvoiceLineBuilder {
    name: String,
    quantity: Decimal,
    price: Decimal,
    description: Option<String>,
    tax_category: Option<TaxCategory>,
    tax_category_name: Option<String>,
    tax_rate: Decimal,
    exemption_reason_code: Option<String>,
    exemption_reason: Option<String>,
}

impl InvoiceLineBuilder {
    pub fn new(name: impl Into<String>, quantity: Decimal, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            description: None,
            tax_category: None,
            tax_category_name: None,
            tax_rate: Decimal::ZERO,
            exemption_reason_code: None,
            exemption_reason: None,
        }
    }

    pub fn tax(mut self, category: TaxCategory, rate: Decimal) -> Self {
        self.tax_category = Some(category);
        self.tax_rate = rate;
        self
    }

    /// Set the rate only, leaving the category to default to standard rated.
    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn tax_category_name(mut self, name: impl Into<String>) -> Self {
        self.tax_category_name = Some(name.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Override the VATEX code and text used for intra-community lines.
    pub fn exemption(mut self, code: impl Into<String>, reason: impl Into<String>) -> Self {
        self.exemption_reason_code = Some(code.into());
        self.exemption_reason = Some(reason.into());
        self
    }

    pub fn build(self) -> InvoiceLine {
        InvoiceLine {
            quantity: self.quantity,
            price: self.price,
            name: self.name,
            description: self.description,
            tax_category: self.tax_category,
            tax_category_name: self.tax_category_name,
            tax_rate: self.tax_rate,
            exemption_reason_code: self.exemption_reason_code,
            exemption_reason: self.exemption_reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn party(name: &str) -> Party {
        PartyBuilder::new(name, "9925:BE0123456789", AddressBuilder::new("BE").build())
            .vat_id("BE0123456789")
            .build()
    }

    fn line() -> InvoiceLine {
        InvoiceLineBuilder::new("Item", dec!(1), dec!(10))
            .tax(TaxCategory::StandardRate, dec!(21))
            .build()
    }

    #[test]
    fn defaults_to_peppol_identifiers() {
        let inv = InvoiceBuilder::new("INV-1")
            .supplier(party("S"))
            .customer(party("C"))
            .add_line(line())
            .build()
            .unwrap();
        assert_eq!(inv.customization_id, PEPPOL_CUSTOMIZATION_ID);
        assert_eq!(inv.profile_id, PEPPOL_PROFILE_ID);
        assert_eq!(inv.kind, DocumentKind::Invoice);
    }

    #[test]
    fn credit_note_kind() {
        let inv = InvoiceBuilder::credit_note("CN-1")
            .supplier(party("S"))
            .customer(party("C"))
            .add_line(line())
            .build()
            .unwrap();
        assert_eq!(inv.kind, DocumentKind::CreditNote);
    }

    #[test]
    fn requires_parties_and_lines() {
        assert!(InvoiceBuilder::new("X").customer(party("C")).add_line(line()).build().is_err());
        assert!(InvoiceBuilder::new("X").supplier(party("S")).add_line(line()).build().is_err());
        assert!(InvoiceBuilder::new("X").supplier(party("S")).customer(party("C")).build().is_err());
    }

    #[test]
    fn rejects_negative_quantity_and_price() {
        let neg_qty = InvoiceLineBuilder::new("Item", dec!(-1), dec!(10)).build();
        let err = InvoiceBuilder::new("X")
            .supplier(party("S"))
            .customer(party("C"))
            .add_line(neg_qty)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("quantity"));

        let neg_price = InvoiceLineBuilder::new("Item", dec!(1), dec!(-10)).build();
        let err = InvoiceBuilder::new("X")
            .supplier(party("S"))
            .customer(party("C"))
            .add_line(neg_price)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn rate_range_checked_except_intra_community() {
        let too_high = InvoiceLineBuilder::new("Item", dec!(1), dec!(1))
            .tax(TaxCategory::StandardRate, dec!(101))
            .build();
        assert!(
            InvoiceBuilder::new("X")
                .supplier(party("S"))
                .customer(party("C"))
                .add_line(too_high)
                .build()
                .is_err()
        );

        let ic = InvoiceLineBuilder::new("Item", dec!(1), dec!(1))
            .tax(TaxCategory::IntraCommunitySupply, dec!(150))
            .build();
        assert!(
            InvoiceBuilder::new("X")
                .supplier(party("S"))
                .customer(party("C"))
                .add_line(ic)
                .build()
                .is_ok()
        );

        let other_k = InvoiceLineBuilder::new("Item", dec!(1), dec!(1))
            .tax(TaxCategory::Other("K".into()), dec!(150))
            .build();
        assert!(
            InvoiceBuilder::new("X")
                .supplier(party("S"))
                .customer(party("C"))
                .add_line(other_k)
                .build()
                .is_ok()
        );
    }

    #[test]
    fn registration_name_falls_back_to_name() {
        let p = party("ACME");
        assert_eq!(p.legal_name(), "ACME");
        let p = PartyBuilder::new("ACME", "0088:123", AddressBuilder::new("DE").build())
            .registration_name("ACME Holding GmbH")
            .build();
        assert_eq!(p.legal_name(), "ACME Holding GmbH");
    }
}
