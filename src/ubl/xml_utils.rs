use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Cursor;

use crate::core::UblError;

fn xml_io(e: std::io::Error) -> UblError {
    UblError::Xml(e.to_string())
}

/// Streaming UBL writer: XML declaration, two-space indent, `cbc:`/`cac:`
/// prefixed element names passed through as given.
///
/// Bound to one document currency; every [`amount_element`](Self::amount_element)
/// carries it as `currencyID`.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
    currency: String,
}

impl XmlWriter {
    pub fn new(currency: &str) -> Result<Self, UblError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self {
            writer,
            currency: currency.to_string(),
        })
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_inner().into_inner()
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, UblError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, UblError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, UblError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    /// Write `<name>`, whatever `body` writes, then `</name>`.
    pub fn wrapped<F>(&mut self, name: &str, body: F) -> Result<&mut Self, UblError>
    where
        F: FnOnce(&mut Self) -> Result<(), UblError>,
    {
        self.start_element(name)?;
        body(self)?;
        self.end_element(name)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, UblError> {
        self.text_element_with_attrs(name, text, &[])
    }

    pub fn text_element_with_attrs(
        &mut self,
        name: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, UblError> {
        self.start_element_with_attrs(name, attrs)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Write `text` only when it is non-empty.
    pub fn opt_text_element(
        &mut self,
        name: &str,
        text: Option<&str>,
    ) -> Result<&mut Self, UblError> {
        match text.filter(|t| !t.is_empty()) {
            Some(t) => self.text_element(name, t),
            None => Ok(self),
        }
    }

    /// `<name><cbc:ID>id</cbc:ID></name>`, the shape of most UBL references.
    pub fn id_wrapper(&mut self, name: &str, id: &str) -> Result<&mut Self, UblError> {
        self.wrapped(name, |w| {
            w.text_element("cbc:ID", id)?;
            Ok(())
        })
    }

    /// ISO 8601 calendar date.
    pub fn date_element(&mut self, name: &str, date: NaiveDate) -> Result<&mut Self, UblError> {
        self.text_element(name, &date.format("%Y-%m-%d").to_string())
    }

    /// Amount in the document currency.
    pub fn amount_element(&mut self, name: &str, amount: Decimal) -> Result<&mut Self, UblError> {
        let currency = self.currency.clone();
        self.text_element_with_attrs(
            name,
            &format_decimal(amount),
            &[("currencyID", currency.as_str())],
        )
    }

    /// Write a quantity with unitCode attribute.
    pub fn quantity_element(
        &mut self,
        name: &str,
        qty: Decimal,
        unit: &str,
    ) -> Result<&mut Self, UblError> {
        self.text_element_with_attrs(name, &format_decimal(qty), &[("unitCode", unit)])
    }

    /// BT-119 / BT-152: rate as a percentage.
    pub fn percent_element(&mut self, rate: Decimal) -> Result<&mut Self, UblError> {
        self.text_element("cbc:Percent", &format_decimal(rate))
    }

    /// `cac:TaxScheme` with the only scheme Peppol accepts.
    pub fn vat_scheme(&mut self) -> Result<&mut Self, UblError> {
        self.id_wrapper("cac:TaxScheme", "VAT")
    }
}

/// Format a Decimal with at least two decimal places, dropping trailing
/// zeros beyond that.
pub fn format_decimal(d: Decimal) -> String {
    let s = d.normalize().to_string();
    match s.find('.') {
        Some(dot) => {
            let decimals = s.len() - dot - 1;
            if decimals < 2 {
                format!("{s}{}", "0".repeat(2 - decimals))
            } else {
                s
            }
        }
        None => format!("{s}.00"),
    }
}
