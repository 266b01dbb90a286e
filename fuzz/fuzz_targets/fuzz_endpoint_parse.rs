#![no_main]

use libfuzzer_sys::fuzz_target;
use peppol_ubl::peppol::EndpointId;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(id) = EndpointId::parse(s, "supplier") {
            assert_eq!(id.scheme.len(), 4);
        }
    }
});
