use serde::{Deserialize, Serialize};

use super::eas::eas_scheme_for_code;
use crate::core::UblError;

/// Width of the scheme part of a compound participant id.
const SCHEME_LEN: usize = 4;

/// BT-34 / BT-49: Electronic address, written as `cbc:EndpointID@schemeID`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointId {
    /// EAS scheme code, e.g. "9925".
    pub scheme: String,
    /// Identifier within the scheme.
    pub value: String,
}

impl EndpointId {
    /// Split a compound id such as `"9925:BE0123456789"`.
    ///
    /// The first four characters are the scheme, one separator character
    /// follows, and the rest is the value. The separator itself is not
    /// checked. Input too short to split, or whose scheme is not ASCII, is
    /// rejected rather than sliced.
    ///
    /// `party` only labels the error.
    pub fn parse(compound: &str, party: &'static str) -> Result<Self, UblError> {
        let malformed = || UblError::MalformedPeppolId {
            party,
            value: compound.to_string(),
        };

        let scheme = compound
            .get(..SCHEME_LEN)
            .filter(|s| s.is_ascii())
            .ok_or_else(malformed)?;
        let value = compound.get(SCHEME_LEN + 1..).ok_or_else(malformed)?;

        if eas_scheme_for_code(scheme).is_none() {
            tracing::debug!(party, scheme, "unrecognised EAS scheme, passing through");
        }

        Ok(Self {
            scheme: scheme.to_string(),
            value: value.to_string(),
        })
    }
}
