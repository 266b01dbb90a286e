use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{InvoiceLine, UblError};
use crate::tax::{ResolvedTax, line_amounts};

/// UN/ECE Rec 20 "mutually defined"; the model carries no unit of measure.
pub const UNSPECIFIED_UNIT_CODE: &str = "ZZ";

/// BG-25: One output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineFragment {
    /// BT-126: 1-based position in the input.
    pub id: usize,
    /// BT-129
    pub quantity: Decimal,
    /// BT-130
    pub unit_code: &'static str,
    /// BT-131: `round(quantity * price)`.
    pub line_extension_amount: Decimal,
    /// Line VAT; written only where the document kind allows it.
    pub tax_amount: Decimal,
    /// BT-153
    pub name: String,
    /// BT-154
    pub description: Option<String>,
    /// BT-151 / BT-152 and, for `K`, the exemption.
    pub tax: ResolvedTax,
    /// BT-146
    pub price: Decimal,
}

/// Convert the line at `index` (0-based) into its output fragment.
pub fn build_line(index: usize, line: &InvoiceLine) -> Result<LineFragment, UblError> {
    let amounts = line_amounts(line)?;
    Ok(LineFragment {
        id: index + 1,
        quantity: line.quantity,
        unit_code: UNSPECIFIED_UNIT_CODE,
        line_extension_amount: amounts.taxable,
        tax_amount: amounts.tax,
        name: line.name.clone(),
        description: line.description.clone(),
        tax: amounts.resolved,
        price: line.price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InvoiceLineBuilder, TaxCategory};
    use crate::tax::aggregate;
    use rust_decimal_macros::dec;

    #[test]
    fn ids_are_one_based() {
        let line = InvoiceLineBuilder::new("A", dec!(1), dec!(1)).build();
        assert_eq!(build_line(0, &line).unwrap().id, 1);
        assert_eq!(build_line(9, &line).unwrap().id, 10);
    }

    #[test]
    fn amounts_are_rounded() {
        let line = InvoiceLineBuilder::new("A", dec!(3), dec!(19.995))
            .tax(TaxCategory::StandardRate, dec!(21))
            .build();
        let frag = build_line(0, &line).unwrap();
        // 59.985 -> 59.99; 59.99 * 0.21 = 12.5979 -> 12.60
        assert_eq!(frag.line_extension_amount, dec!(59.99));
        assert_eq!(frag.tax_amount, dec!(12.60));
        assert_eq!(frag.unit_code, "ZZ");
        assert_eq!(frag.price, dec!(19.995));
    }

    #[test]
    fn intra_community_line_has_exactly_zero_tax() {
        let line = InvoiceLineBuilder::new("A", dec!(7), dec!(13.37))
            .tax(TaxCategory::IntraCommunitySupply, dec!(19))
            .build();
        let frag = build_line(0, &line).unwrap();
        assert_eq!(frag.tax_amount, Decimal::ZERO);
        assert_eq!(frag.tax.rate, Decimal::ZERO);
        assert!(frag.tax.exemption.is_some());
    }

    #[test]
    fn line_builder_and_aggregator_never_disagree() {
        let lines = [
            InvoiceLineBuilder::new("A", dec!(2), dec!(10))
                .tax(TaxCategory::IntraCommunitySupply, dec!(21))
                .build(),
            InvoiceLineBuilder::new("B", dec!(1), dec!(10))
                .tax_rate(dec!(6.0))
                .build(),
            InvoiceLineBuilder::new("C", dec!(1), dec!(10))
                .tax(TaxCategory::Exempt, dec!(0))
                .build(),
        ];
        let summary = aggregate(&lines).unwrap();
        for (i, line) in lines.iter().enumerate() {
            let frag = build_line(i, line).unwrap();
            let sub = summary
                .subtotals
                .iter()
                .find(|s| s.tax.category == frag.tax.category && s.tax.rate == frag.tax.rate)
                .expect("line has a subtotal");
            assert_eq!(sub.tax, frag.tax);
        }
        let line_tax: Decimal = lines
            .iter()
            .enumerate()
            .map(|(i, l)| build_line(i, l).unwrap().tax_amount)
            .sum();
        assert_eq!(line_tax, summary.tax_total);
    }

    #[test]
    fn oversized_line_is_an_error() {
        let line = InvoiceLineBuilder::new("A", Decimal::MAX, dec!(2)).build();
        assert!(matches!(
            build_line(0, &line),
            Err(UblError::AmountOverflow(_))
        ));
    }
}
