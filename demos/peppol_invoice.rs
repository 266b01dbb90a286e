use peppol_ubl::core::*;
use peppol_ubl::peppol;
use peppol_ubl::ubl;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=peppol_ubl=debug shows generation steps
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let invoice = InvoiceBuilder::new("INV-12345")
        .supplier(
            PartyBuilder::new(
                "ABC Supplies Ltd",
                "9925:BE0123456789",
                AddressBuilder::new("BE")
                    .street("123 Supplier Street")
                    .city("Supplier City")
                    .postal_code("12345")
                    .build(),
            )
            .vat_id("BE0123456789")
            .build(),
        )
        .customer(
            PartyBuilder::new(
                "XYZ Corp",
                "9925:BE9876543210",
                AddressBuilder::new("BE")
                    .street("789 Customer Avenue")
                    .city("Customer Town")
                    .postal_code("67890")
                    .build(),
            )
            .vat_id("BE9876543210")
            .build(),
        )
        .payment("BE71096123456769", Some("GEBABEBB".into()))
        .note("You get a free sticker when you pay fast")
        .add_line(
            InvoiceLineBuilder::new("Product A - Standard rated", dec!(10), dec!(100))
                .description("Standard 21% VAT item")
                .tax(TaxCategory::StandardRate, dec!(21))
                .build(),
        )
        .add_line(
            InvoiceLineBuilder::new("Product B - Reduced rate", dec!(5), dec!(50))
                .description("Reduced 6% VAT item")
                .tax(TaxCategory::StandardRate, dec!(6))
                .build(),
        )
        .add_line(
            InvoiceLineBuilder::new("Product C - Zero rated", dec!(2), dec!(200))
                .tax(TaxCategory::ZeroRated, dec!(0))
                .tax_category_name("Zero rated")
                .build(),
        )
        .add_line(
            InvoiceLineBuilder::new("Product D - Exempt", dec!(1), dec!(500))
                .tax(TaxCategory::Exempt, dec!(0))
                .tax_category_name("Exempt")
                .build(),
        )
        .pdf_data("INV-12345.pdf", b"%PDF-1.4\n%%EOF\n".to_vec(), Some("Invoice INV-12345".into()))
        .build()
        .expect("invoice input is valid");

    println!("=== Peppol pre-check ===\n");
    let errors = peppol::validate_peppol(&invoice);
    if errors.is_empty() {
        println!("  No findings.\n");
    } else {
        for err in &errors {
            println!("  {err}");
        }
        println!();
    }

    let config = GeneratorConfig::today();
    let document = ubl::assemble(&invoice, &config, &ubl::FsLoader).expect("assembly failed");

    println!("=== VAT breakdown ===\n");
    for sub in &document.tax_subtotals {
        println!(
            "  {} {:>6}%  taxable {:>10}  tax {:>8}",
            sub.tax.category.code(),
            sub.tax.rate,
            sub.taxable_amount,
            sub.tax_amount
        );
    }
    println!("\n  Payable: {} EUR\n", document.monetary_totals.payable);

    let xml = document.to_xml().expect("XML generation failed");
    let xml = String::from_utf8_lossy(&xml);
    println!("=== UBL XML (first 20 lines) ===\n");
    for line in xml.lines().take(20) {
        println!("{line}");
    }
    println!("...");
}
