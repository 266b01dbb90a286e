#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    let (raw, country) = input;
    let once = peppol_ubl::normalize_vat_id(raw, country);

    // Idempotence only holds for real two-letter country codes.
    if country.len() == 2 && country.bytes().all(|b| b.is_ascii_alphabetic()) {
        assert_eq!(peppol_ubl::normalize_vat_id(&once, country), once);
    }
});
