//! # peppol-ubl
//!
//! Turns a flat, business-level invoice or credit note into a Peppol BIS
//! Billing 3.0 conformant UBL 2.1 document.
//!
//! All monetary values use [`rust_decimal::Decimal`] and are rounded
//! half-away-from-zero to two decimals at the point they are computed, so
//! per-rate VAT subtotals always add up to the document totals.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use peppol_ubl::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("INV-12345")
//!     .supplier(PartyBuilder::new("ABC Supplies Ltd", "9925:BE0123456789",
//!             AddressBuilder::new("BE").city("Brussels").build())
//!         .vat_id("BE0123456789").build())
//!     .customer(PartyBuilder::new("XYZ Corp", "9925:BE9876543210",
//!             AddressBuilder::new("BE").build())
//!         .vat_id("BE9876543210").build())
//!     .add_line(InvoiceLineBuilder::new("Product A", dec!(10), dec!(100))
//!         .tax(TaxCategory::StandardRate, dec!(21)).build())
//!     .build()
//!     .unwrap();
//!
//! let config = GeneratorConfig::for_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
//! let xml = peppol_ubl::ubl::generate(&invoice, &config).unwrap();
//! assert!(String::from_utf8(xml).unwrap().contains("<cbc:PayableAmount currencyID=\"EUR\">1210.00</cbc:PayableAmount>"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Input model, builders, tax engine, VAT id normalization, Peppol ids |
//! | `ubl` (default) | UBL document assembly, attachments, XML output |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod tax;

#[cfg(feature = "core")]
pub mod peppol;

#[cfg(feature = "ubl")]
pub mod ubl;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
