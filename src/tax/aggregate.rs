use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::category::{ResolvedTax, resolve_tax};
use crate::core::{InvoiceLine, UblError, round_amount};

/// Rounded amounts for a single line, together with the tax treatment they
/// were computed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineAmounts {
    /// `round(quantity * price)`.
    pub taxable: Decimal,
    /// `round(taxable * rate / 100)`; always zero for `K`.
    pub tax: Decimal,
    pub resolved: ResolvedTax,
}

/// Compute the rounded taxable and tax amounts of one line.
///
/// Fails with [`UblError::AmountOverflow`] when `quantity * price` (or the
/// tax on it) leaves the decimal range.
pub fn line_amounts(line: &InvoiceLine) -> Result<LineAmounts, UblError> {
    let resolved = resolve_tax(line);
    let taxable = line
        .quantity
        .checked_mul(line.price)
        .map(round_amount)
        .ok_or(UblError::AmountOverflow("line amount"))?;
    let tax = taxable
        .checked_mul(resolved.rate)
        .map(|t| round_amount(t / Decimal::ONE_HUNDRED))
        .ok_or(UblError::AmountOverflow("line tax"))?;
    Ok(LineAmounts {
        taxable,
        tax,
        resolved,
    })
}

/// BG-23: One VAT breakdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSubtotal {
    /// BT-116: Sum of taxable amounts of all lines under this key.
    pub taxable_amount: Decimal,
    /// BT-117: Sum of tax amounts of all lines under this key.
    pub tax_amount: Decimal,
    /// Category, name, rate and exemption of the first line seen for the key.
    pub tax: ResolvedTax,
}

/// Result of aggregating all lines of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSummary {
    /// BT-106: Sum of line net amounts.
    pub line_extension_total: Decimal,
    /// BT-110: Sum of subtotal tax amounts.
    pub tax_total: Decimal,
    /// Ordered by category code, then rate.
    pub subtotals: Vec<TaxSubtotal>,
}

/// Group lines by `(category code, rate)` and sum their rounded amounts.
///
/// Every input to a sum is already rounded, so the subtotals add up to the
/// totals exactly, whatever order the lines come in.
pub fn aggregate(lines: &[InvoiceLine]) -> Result<TaxSummary, UblError> {
    let mut groups: BTreeMap<(String, Decimal), TaxSubtotal> = BTreeMap::new();
    let mut line_extension_total = Decimal::ZERO;

    for line in lines {
        let amounts = line_amounts(line)?;
        line_extension_total =
            checked_sum(line_extension_total, amounts.taxable, "line extension total")?;

        let key = (
            amounts.resolved.category.code().to_string(),
            amounts.resolved.rate,
        );
        let entry = groups.entry(key).or_insert_with(|| TaxSubtotal {
            taxable_amount: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            tax: amounts.resolved.clone(),
        });
        entry.taxable_amount =
            checked_sum(entry.taxable_amount, amounts.taxable, "subtotal taxable amount")?;
        entry.tax_amount = checked_sum(entry.tax_amount, amounts.tax, "subtotal tax amount")?;
    }

    let subtotals: Vec<TaxSubtotal> = groups.into_values().collect();
    let tax_total = subtotals
        .iter()
        .try_fold(Decimal::ZERO, |acc, s| checked_sum(acc, s.tax_amount, "tax total"))?;

    Ok(TaxSummary {
        line_extension_total,
        tax_total,
        subtotals,
    })
}

/// Rounded `a + b`.
fn checked_sum(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal, UblError> {
    a.checked_add(b)
        .map(round_amount)
        .ok_or(UblError::AmountOverflow(what))
}

/// BG-22: Document totals. No allowances, charges or prepayments exist in
/// this model, so several of these coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonetaryTotals {
    /// BT-106
    pub line_extension: Decimal,
    /// BT-109
    pub tax_exclusive: Decimal,
    /// BT-112
    pub tax_inclusive: Decimal,
    /// BT-115
    pub payable: Decimal,
}

impl MonetaryTotals {
    pub fn from_summary(summary: &TaxSummary) -> Result<Self, UblError> {
        let tax_inclusive =
            checked_sum(summary.line_extension_total, summary.tax_total, "tax inclusive total")?;
        Ok(Self {
            line_extension: summary.line_extension_total,
            tax_exclusive: summary.line_extension_total,
            tax_inclusive,
            payable: tax_inclusive,
        })
    }
}
