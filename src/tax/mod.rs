//! VAT category resolution and per-rate aggregation.
//!
//! Every line goes through [`resolve_tax`] exactly once per use, and both the
//! line builder and the aggregator compute amounts through [`line_amounts`],
//! so the rate a line shows and the rate it is summed under cannot differ.

mod aggregate;
mod category;

pub use aggregate::{
    LineAmounts, MonetaryTotals, TaxSubtotal, TaxSummary, aggregate, line_amounts,
};
pub use category::{
    DEFAULT_CATEGORY_NAME, Exemption, INTRA_COMMUNITY_EXEMPTION_CODE,
    INTRA_COMMUNITY_EXEMPTION_REASON, ResolvedTax, resolve_tax,
};
