#![cfg(feature = "ubl")]

use chrono::NaiveDate;
use peppol_ubl::core::*;
use peppol_ubl::ubl;
use rust_decimal_macros::dec;

fn minimal_credit_note() -> Invoice {
    InvoiceBuilder::credit_note("CN-1")
        .supplier(
            PartyBuilder::new("S", "9925:BE0123456789", AddressBuilder::new("BE").build())
                .vat_id("BE0123456789")
                .build(),
        )
        .customer(
            PartyBuilder::new("C", "9925:BE9876543210", AddressBuilder::new("BE").build())
                .vat_id("BE9876543210")
                .build(),
        )
        .payment("BE71096123456769", None)
        .add_line(
            InvoiceLineBuilder::new("Refund", dec!(1), dec!(100))
                .tax_rate(dec!(21))
                .build(),
        )
        .build()
        .unwrap()
}

#[test]
fn credit_note_snapshot() {
    let config = GeneratorConfig::for_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    let xml = String::from_utf8(ubl::generate(&minimal_credit_note(), &config).unwrap()).unwrap();
    insta::assert_snapshot!(xml, @r###"
<?xml version="1.0" encoding="UTF-8"?>
<CreditNote xmlns="urn:oasis:names:specification:ubl:schema:xsd:CreditNote-2" xmlns:cac="urn:oasis:names:specification:ubl:schema:xsd:CommonAggregateComponents-2" xmlns:cbc="urn:oasis:names:specification:ubl:schema:xsd:CommonBasicComponents-2">
  <cbc:CustomizationID>urn:cen.eu:en16931:2017#compliant#urn:fdc:peppol.eu:2017:poacc:billing:3.0</cbc:CustomizationID>
  <cbc:ProfileID>urn:fdc:peppol.eu:2017:poacc:billing:01:1.0</cbc:ProfileID>
  <cbc:ID>CN-1</cbc:ID>
  <cbc:IssueDate>2024-06-15</cbc:IssueDate>
  <cbc:CreditNoteTypeCode>381</cbc:CreditNoteTypeCode>
  <cbc:DocumentCurrencyCode>EUR</cbc:DocumentCurrencyCode>
  <cac:OrderReference>
    <cbc:ID>CN-1</cbc:ID>
  </cac:OrderReference>
  <cac:AccountingSupplierParty>
    <cac:Party>
      <cbc:EndpointID schemeID="9925">BE0123456789</cbc:EndpointID>
      <cac:PartyName>
        <cbc:Name>S</cbc:Name>
      </cac:PartyName>
      <cac:PostalAddress>
        <cac:Country>
          <cbc:IdentificationCode>BE</cbc:IdentificationCode>
        </cac:Country>
      </cac:PostalAddress>
      <cac:PartyTaxScheme>
        <cbc:CompanyID>BE0123456789</cbc:CompanyID>
        <cac:TaxScheme>
          <cbc:ID>VAT</cbc:ID>
        </cac:TaxScheme>
      </cac:PartyTaxScheme>
      <cac:PartyLegalEntity>
        <cbc:RegistrationName>S</cbc:RegistrationName>
      </cac:PartyLegalEntity>
    </cac:Party>
  </cac:AccountingSupplierParty>
  <cac:AccountingCustomerParty>
    <cac:Party>
      <cbc:EndpointID schemeID="9925">BE9876543210</cbc:EndpointID>
      <cac:PartyName>
        <cbc:Name>C</cbc:Name>
      </cac:PartyName>
      <cac:PostalAddress>
        <cac:Country>
          <cbc:IdentificationCode>BE</cbc:IdentificationCode>
        </cac:Country>
      </cac:PostalAddress>
      <cac:PartyTaxScheme>
        <cbc:CompanyID>BE9876543210</cbc:CompanyID>
        <cac:TaxScheme>
          <cbc:ID>VAT</cbc:ID>
        </cac:TaxScheme>
      </cac:PartyTaxScheme>
      <cac:PartyLegalEntity>
        <cbc:RegistrationName>C</cbc:RegistrationName>
      </cac:PartyLegalEntity>
    </cac:Party>
  </cac:AccountingCustomerParty>
  <cac:PaymentMeans>
    <cbc:PaymentMeansCode>1</cbc:PaymentMeansCode>
    <cac:PayeeFinancialAccount>
      <cbc:ID>BE71096123456769</cbc:ID>
    </cac:PayeeFinancialAccount>
  </cac:PaymentMeans>
  <cac:TaxTotal>
    <cbc:TaxAmount currencyID="EUR">21.00</cbc:TaxAmount>
    <cac:TaxSubtotal>
      <cbc:TaxableAmount currencyID="EUR">100.00</cbc:TaxableAmount>
      <cbc:TaxAmount currencyID="EUR">21.00</cbc:TaxAmount>
      <cac:TaxCategory>
        <cbc:ID>S</cbc:ID>
        <cbc:Name>Standard rated</cbc:Name>
        <cbc:Percent>21.00</cbc:Percent>
        <cac:TaxScheme>
          <cbc:ID>VAT</cbc:ID>
        </cac:TaxScheme>
      </cac:TaxCategory>
    </cac:TaxSubtotal>
  </cac:TaxTotal>
  <cac:LegalMonetaryTotal>
    <cbc:LineExtensionAmount currencyID="EUR">100.00</cbc:LineExtensionAmount>
    <cbc:TaxExclusiveAmount currencyID="EUR">100.00</cbc:TaxExclusiveAmount>
    <cbc:TaxInclusiveAmount currencyID="EUR">121.00</cbc:TaxInclusiveAmount>
    <cbc:PayableAmount currencyID="EUR">121.00</cbc:PayableAmount>
  </cac:LegalMonetaryTotal>
  <cac:CreditNoteLine>
    <cbc:ID>1</cbc:ID>
    <cbc:CreditedQuantity unitCode="ZZ">1.00</cbc:CreditedQuantity>
    <cbc:LineExtensionAmount currencyID="EUR">100.00</cbc:LineExtensionAmount>
    <cac:Item>
      <cbc:Name>Refund</cbc:Name>
      <cac:ClassifiedTaxCategory>
        <cbc:ID>S</cbc:ID>
        <cbc:Name>Standard rated</cbc:Name>
        <cbc:Percent>21.00</cbc:Percent>
        <cac:TaxScheme>
          <cbc:ID>VAT</cbc:ID>
        </cac:TaxScheme>
      </cac:ClassifiedTaxCategory>
    </cac:Item>
    <cac:Price>
      <cbc:PriceAmount currencyID="EUR">100.00</cbc:PriceAmount>
    </cac:Price>
  </cac:CreditNoteLine>
</CreditNote>
"###);
}

#[test]
fn input_model_round_trips_through_json() {
    let invoice = minimal_credit_note();
    let json = serde_json::to_string_pretty(&invoice).unwrap();
    assert!(json.contains("\"kind\": \"CreditNote\""));
    // serde-with-str keeps decimals exact
    assert!(json.contains("\"tax_rate\": \"21\""));

    let back: Invoice = serde_json::from_str(&json).unwrap();
    let config = GeneratorConfig::for_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    assert_eq!(
        ubl::generate(&back, &config).unwrap(),
        ubl::generate(&invoice, &config).unwrap()
    );
}

#[test]
fn config_loads_from_json_with_defaults() {
    let config: GeneratorConfig =
        serde_json::from_str(r#"{ "issue_date": "2024-02-01", "payment_means_code": "30" }"#)
            .unwrap();
    assert_eq!(config.issue_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(config.due_date_offset_days, 30);
    assert_eq!(config.payment_means_code, "30");
    assert_eq!(config.due_date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
}
