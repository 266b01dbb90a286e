//! VAT identifier normalization for `PartyTaxScheme/CompanyID`.

use std::borrow::Cow;

/// Rewrite a raw VAT identifier into the country-prefixed form Peppol expects.
///
/// - Leading digits are dropped; they are Peppol scheme prefixes such as
///   `9925` that ended up in the tax id.
/// - If what remains does not start with an uppercase letter, or is shorter
///   than two characters, the party's country code is prepended.
/// - Greece uses `EL` as its VAT prefix instead of the ISO code `GR`.
///
/// Never fails: input it cannot repair comes back with the country code in
/// front. Applying it twice gives the same result as applying it once.
///
/// ```
/// use peppol_ubl::core::normalize_vat_id;
///
/// assert_eq!(normalize_vat_id("9925BE0123456789", "BE"), "BE0123456789");
/// assert_eq!(normalize_vat_id("GR123456789", "GR"), "EL123456789");
/// assert_eq!(normalize_vat_id("0123456789", "BE"), "BE");
/// ```
pub fn normalize_vat_id(raw: &str, country_code: &str) -> String {
    let rest = raw.trim_start_matches(|c: char| c.is_ascii_digit());

    let starts_upper = rest.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    if rest.chars().count() < 2 || !starts_upper {
        let prefix = vat_prefix(country_code);
        tracing::debug!(raw, %prefix, "VAT id lacks country prefix, prepending");
        return format!("{prefix}{rest}");
    }

    if let Some(number) = rest.strip_prefix("GR") {
        tracing::debug!(raw, "rewriting GR VAT prefix to EL");
        return format!("EL{number}");
    }

    rest.to_string()
}

/// VAT prefix for an ISO 3166-1 country code.
fn vat_prefix(country_code: &str) -> Cow<'_, str> {
    let upper = country_code.trim().to_ascii_uppercase();
    match upper.as_str() {
        "GR" => Cow::Borrowed("EL"),
        _ if upper == country_code => Cow::Borrowed(country_code),
        _ => Cow::Owned(upper),
    }
}
