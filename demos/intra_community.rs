use chrono::NaiveDate;
use peppol_ubl::core::*;
use peppol_ubl::peppol;
use peppol_ubl::ubl;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let seller = PartyBuilder::new(
        "Brouwerij De Kroon BV",
        "0208:0123456789",
        AddressBuilder::new("BE").city("Leuven").build(),
    )
    // Scheme digits left in the VAT id are stripped on output.
    .vat_id("9925BE0123456789")
    .build();
    let buyer = PartyBuilder::new(
        "Kafeneio AE",
        "9933:EL999999999",
        AddressBuilder::new("GR").city("Athens").build(),
    )
    .vat_id("GR999999999")
    .registration_name("Kafeneio Anonymi Etaireia")
    .build();

    // The first attempt misses the delivery details BR-IC-11/12 require.
    let draft = InvoiceBuilder::new("IC-2024-001")
        .supplier(seller.clone())
        .customer(buyer.clone())
        .add_line(
            InvoiceLineBuilder::new("Tripel 33cl (crate of 24)", dec!(40), dec!(28.50))
                .tax(TaxCategory::IntraCommunitySupply, dec!(21))
                .tax_category_name("Intra-community supply")
                .build(),
        )
        .build()
        .expect("draft input is valid");

    println!("=== Draft findings ===\n");
    for err in peppol::validate_peppol(&draft) {
        println!("  {err}");
    }

    let invoice = InvoiceBuilder::new("IC-2024-001")
        .supplier(seller)
        .customer(buyer)
        .delivery_address(AddressBuilder::new("GR").build())
        .actual_delivery_date(NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date"))
        .add_line(
            InvoiceLineBuilder::new("Tripel 33cl (crate of 24)", dec!(40), dec!(28.50))
                .tax(TaxCategory::IntraCommunitySupply, dec!(21))
                .tax_category_name("Intra-community supply")
                .build(),
        )
        .build()
        .expect("invoice input is valid");

    println!("\n=== Final findings: {} ===\n", peppol::validate_peppol(&invoice).len());

    let config = GeneratorConfig::for_date(NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date"));
    match ubl::generate(&invoice, &config) {
        Ok(xml) => println!("{}", String::from_utf8_lossy(&xml)),
        Err(e) => eprintln!("generation failed: {e}"),
    }
}
