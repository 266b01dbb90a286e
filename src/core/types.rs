use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The business-level input for one generated document.
///
/// Plain data: generation reads it and never writes to it, so the same
/// value can be handed to several generators at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice (380) or credit note (381).
    pub kind: DocumentKind,
    /// BT-1: Document number. Also reused as the order reference (BT-13).
    pub id: String,
    /// BT-24: Specification identifier.
    pub customization_id: String,
    /// BT-23: Business process type.
    pub profile_id: String,
    /// BG-4: Seller.
    pub supplier: Party,
    /// BG-7: Buyer.
    pub customer: Party,
    /// BG-15: Deliver-to address (required for intra-community supply).
    pub delivery_address: Option<Address>,
    /// BT-72: Actual delivery date.
    pub actual_delivery_date: Option<NaiveDate>,
    /// BT-73: Invoicing period start. Only emitted together with the end.
    pub invoice_period_start: Option<NaiveDate>,
    /// BT-74: Invoicing period end. Only emitted together with the start.
    pub invoice_period_end: Option<NaiveDate>,
    /// BG-17: Payee bank account.
    pub payment: PaymentAccount,
    /// BT-20: Payment terms free text.
    pub note: Option<String>,
    /// BG-25: Lines, in output order.
    pub lines: Vec<InvoiceLine>,
    /// BG-24: Optional PDF rendition of the document.
    pub pdf: Option<PdfAttachment>,
}

/// The two document kinds this crate emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// 380: Commercial invoice.
    Invoice,
    /// 381: Credit note.
    CreditNote,
}

impl DocumentKind {
    /// UNTDID 1001 numeric code.
    pub fn type_code(&self) -> u16 {
        match self {
            Self::Invoice => 380,
            Self::CreditNote => 381,
        }
    }
}

/// BG-4 / BG-7: Party (supplier or customer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// BT-27 / BT-44: Name.
    pub name: String,
    /// BT-30 / BT-47 registration name; falls back to `name` when absent.
    pub registration_name: Option<String>,
    /// BT-31 / BT-48: VAT identifier as supplied (normalized on output).
    pub vat_id: String,
    /// BT-34 / BT-49: Compound Peppol participant id, e.g. "9925:BE0123456789".
    pub peppol_id: String,
    /// BG-5 / BG-8: Postal address.
    pub address: Address,
}

impl Party {
    /// The legal registration name written to `PartyLegalEntity`.
    pub fn legal_name(&self) -> &str {
        self.registration_name.as_deref().unwrap_or(&self.name)
    }
}

/// Postal address. Everything except the country may be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// BT-35: Street + house number.
    pub street: Option<String>,
    /// BT-37: City.
    pub city: Option<String>,
    /// BT-38: Postal code.
    pub postal_code: Option<String>,
    /// BT-40: Country code (ISO 3166-1 alpha-2).
    pub country_code: String,
}

/// BG-17: Credit transfer account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentAccount {
    /// BT-84: Account identifier (IBAN).
    pub iban: String,
    /// BT-86: Service provider identifier (BIC).
    pub bic: Option<String>,
}

/// BG-25: Invoice line as the caller describes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// BT-129: Quantity. Non-negative.
    pub quantity: Decimal,
    /// BT-146: Net unit price. Non-negative.
    pub price: Decimal,
    /// BT-153: Item name.
    pub name: String,
    /// BT-154: Item description.
    pub description: Option<String>,
    /// BT-151: Tax category; `None` means standard rated.
    pub tax_category: Option<TaxCategory>,
    /// Display name of the category; `None` means "Standard rated".
    pub tax_category_name: Option<String>,
    /// BT-152: Stated VAT rate in percent.
    pub tax_rate: Decimal,
    /// BT-121: Exemption reason code override.
    pub exemption_reason_code: Option<String>,
    /// BT-120: Exemption reason text override.
    pub exemption_reason: Option<String>,
}

/// UNTDID 5305: Tax category codes.
///
/// Codes outside the handled set are kept verbatim in `Other` and passed
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaxCategory {
    /// S: Standard rate.
    StandardRate,
    /// Z: Zero rated.
    ZeroRated,
    /// E: Exempt from tax.
    Exempt,
    /// K: Intra-community supply.
    IntraCommunitySupply,
    /// Any other UNTDID 5305 code.
    Other(String),
}

impl TaxCategory {
    /// UNTDID 5305 code letter.
    pub fn code(&self) -> &str {
        match self {
            Self::StandardRate => "S",
            Self::ZeroRated => "Z",
            Self::Exempt => "E",
            Self::IntraCommunitySupply => "K",
            Self::Other(code) => code,
        }
    }

    /// Parse from a UNTDID 5305 code string. An empty code yields `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "" => None,
            "S" => Some(Self::StandardRate),
            "Z" => Some(Self::ZeroRated),
            "E" => Some(Self::Exempt),
            "K" => Some(Self::IntraCommunitySupply),
            other => Some(Self::Other(other.to_string())),
        }
    }

    /// Resolve `Other` spellings of the named codes (`Other("K")`,
    /// `Other("")`) to the variant [`from_code`](Self::from_code) gives.
    pub fn canonical(&self) -> Option<Self> {
        match self {
            Self::Other(code) => Self::from_code(code),
            known => Some(known.clone()),
        }
    }

    /// True for `K`, however it was spelled.
    pub fn is_intra_community(&self) -> bool {
        self.canonical() == Some(Self::IntraCommunitySupply)
    }
}

/// A PDF (or other binary) rendition embedded as a supporting document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfAttachment {
    /// File name written to the `filename` attribute. When `data` is
    /// absent this is also the path the payload is read from.
    pub filename: String,
    /// Raw payload bytes; read from `filename` when `None`.
    pub data: Option<Vec<u8>>,
    /// BT-123: Description; defaults to the document kind's label.
    pub description: Option<String>,
}

/// Invoicing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// BT-73: Start date.
    pub start: NaiveDate,
    /// BT-74: End date.
    pub end: NaiveDate,
}
