use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{InvoiceLine, TaxCategory};

/// Category name used when a line does not supply one.
pub const DEFAULT_CATEGORY_NAME: &str = "Standard rated";

/// BT-121 default for intra-community supply.
pub const INTRA_COMMUNITY_EXEMPTION_CODE: &str = "VATEX-EU-IC";

/// BT-120 default for intra-community supply.
pub const INTRA_COMMUNITY_EXEMPTION_REASON: &str = "Intra-community supply";

/// BT-120 / BT-121: Why a category carries no VAT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exemption {
    /// VATEX code, e.g. "VATEX-EU-IC".
    pub code: String,
    /// Free text reason.
    pub reason: String,
}

/// The category, name and rate a line is actually taxed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTax {
    pub category: TaxCategory,
    pub name: String,
    /// Effective rate in percent, normalized (`6.00` and `6` are equal and
    /// display the same).
    pub rate: Decimal,
    pub exemption: Option<Exemption>,
}

/// How a category code overrides what the line states.
struct CategoryPolicy {
    code: &'static str,
    force_zero_rate: bool,
    default_exemption: Option<(&'static str, &'static str)>,
}

/// Categories with special handling. Codes not listed here keep their
/// stated rate and get no exemption.
static POLICIES: &[CategoryPolicy] = &[
    CategoryPolicy {
        code: "S",
        force_zero_rate: false,
        default_exemption: None,
    },
    CategoryPolicy {
        code: "Z",
        force_zero_rate: false,
        default_exemption: None,
    },
    CategoryPolicy {
        code: "E",
        force_zero_rate: false,
        default_exemption: None,
    },
    CategoryPolicy {
        code: "K",
        force_zero_rate: true,
        default_exemption: Some((
            INTRA_COMMUNITY_EXEMPTION_CODE,
            INTRA_COMMUNITY_EXEMPTION_REASON,
        )),
    },
];

fn policy_for(code: &str) -> Option<&'static CategoryPolicy> {
    POLICIES.iter().find(|p| p.code == code)
}

/// Decide the effective tax treatment of one line.
///
/// 1. Missing category means `S`; missing or empty name means
///    "Standard rated".
/// 2. `K` (intra-community supply) always has rate 0 and an exemption;
///    line-supplied code/text win over the defaults.
/// 3. Everything else keeps the stated rate and has no exemption.
pub fn resolve_tax(line: &InvoiceLine) -> ResolvedTax {
    let category = line
        .tax_category
        .as_ref()
        .and_then(TaxCategory::canonical)
        .unwrap_or(TaxCategory::StandardRate);
    let name = line
        .tax_category_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_CATEGORY_NAME)
        .to_string();

    let Some(policy) = policy_for(category.code()) else {
        tracing::warn!(
            code = category.code(),
            "tax category has no policy, passing stated rate through"
        );
        return ResolvedTax {
            category,
            name,
            rate: line.tax_rate.normalize(),
            exemption: None,
        };
    };

    let rate = if policy.force_zero_rate {
        Decimal::ZERO
    } else {
        line.tax_rate.normalize()
    };

    let exemption = policy.default_exemption.map(|(code, reason)| Exemption {
        code: non_empty(&line.exemption_reason_code).unwrap_or(code).to_string(),
        reason: non_empty(&line.exemption_reason).unwrap_or(reason).to_string(),
    });

    ResolvedTax {
        category,
        name,
        rate,
        exemption,
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InvoiceLineBuilder;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_to_standard_rated() {
        let line = InvoiceLineBuilder::new("A", dec!(1), dec!(1))
            .tax_rate(dec!(21))
            .build();
        let r = resolve_tax(&line);
        assert_eq!(r.category, TaxCategory::StandardRate);
        assert_eq!(r.name, "Standard rated");
        assert_eq!(r.rate, dec!(21));
        assert_eq!(r.exemption, None);
    }

    #[test]
    fn empty_name_defaults() {
        let line = InvoiceLineBuilder::new("A", dec!(1), dec!(1))
            .tax_category_name("")
            .build();
        assert_eq!(resolve_tax(&line).name, "Standard rated");
    }

    #[test]
    fn intra_community_forces_zero_and_exemption() {
        let line = InvoiceLineBuilder::new("A", dec!(1), dec!(1))
            .tax(TaxCategory::IntraCommunitySupply, dec!(19))
            .build();
        let r = resolve_tax(&line);
        assert_eq!(r.rate, Decimal::ZERO);
        assert_eq!(
            r.exemption,
            Some(Exemption {
                code: "VATEX-EU-IC".into(),
                reason: "Intra-community supply".into(),
            })
        );
    }

    #[test]
    fn intra_community_line_overrides_win() {
        let line = InvoiceLineBuilder::new("A", dec!(1), dec!(1))
            .tax(TaxCategory::IntraCommunitySupply, dec!(0))
            .exemption("VATEX-EU-IC", "Intracommunautaire levering")
            .build();
        let ex = resolve_tax(&line).exemption.unwrap();
        assert_eq!(ex.reason, "Intracommunautaire levering");
    }

    #[test]
    fn exemption_fields_ignored_outside_k() {
        let line = InvoiceLineBuilder::new("A", dec!(1), dec!(1))
            .tax(TaxCategory::Exempt, dec!(0))
            .exemption("VATEX-EU-132", "Exempt")
            .build();
        assert_eq!(resolve_tax(&line).exemption, None);
    }

    #[test]
    fn unknown_codes_pass_through() {
        let line = InvoiceLineBuilder::new("A", dec!(1), dec!(1))
            .tax(TaxCategory::Other("AE".into()), dec!(0))
            .tax_category_name("Reverse charge")
            .build();
        let r = resolve_tax(&line);
        assert_eq!(r.category.code(), "AE");
        assert_eq!(r.name, "Reverse charge");
        assert_eq!(r.exemption, None);
    }

    #[test]
    fn other_k_resolves_as_intra_community() {
        let line = InvoiceLineBuilder::new("A", dec!(1), dec!(1))
            .tax(TaxCategory::Other("K".into()), dec!(19))
            .build();
        let r = resolve_tax(&line);
        assert_eq!(r.category, TaxCategory::IntraCommunitySupply);
        assert_eq!(r.rate, Decimal::ZERO);
        assert!(r.exemption.is_some());
    }

    #[test]
    fn empty_other_code_means_standard() {
        let line = InvoiceLineBuilder::new("A", dec!(1), dec!(1))
            .tax(TaxCategory::Other(String::new()), dec!(21))
            .build();
        assert_eq!(resolve_tax(&line).category, TaxCategory::StandardRate);
    }

    #[test]
    fn rate_is_normalized() {
        let line = InvoiceLineBuilder::new("A", dec!(1), dec!(1))
            .tax_rate(dec!(6.00))
            .build();
        assert_eq!(resolve_tax(&line).rate.to_string(), "6");
    }
}
