//! Canonical query construction.
//!
//! The canonical parameter sequence is the single source of truth for both
//! the signable string and the emitted URL; the two must agree byte for
//! byte or the verifier recomputes a different signature.

use percent_encoding::utf8_percent_encode;

use crate::constants::{PARAM_EXPIRES_AT, QUERY_ENCODE_SET};

/// Whether `expiry` names a real deadline; `0` and `-1` both mean "no expiry".
pub(crate) fn has_expiry(expiry: i64) -> bool {
    expiry != 0 && expiry != -1
}

/// Percent-encode a parameter value for the query component.
pub(crate) fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, &QUERY_ENCODE_SET).to_string()
}

/// Assemble the canonical parameter sequence.
///
/// Values are percent-encoded, rendered as `key=value` and sorted byte-wise
/// ascending. `X-ExpiresAt` joins the sequence only when at least one other
/// parameter is present; an expiry with an empty parameter set is dropped to
/// stay byte-compatible with the deployed verifier.
pub(crate) fn canonicalize(params: &[(&str, String)], expiry: i64) -> Vec<String> {
    let mut parts: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{k}={}", encode_value(v)))
        .collect();

    if !parts.is_empty() && has_expiry(expiry) {
        parts.push(format!("{PARAM_EXPIRES_AT}={expiry}"));
    }

    parts.sort_unstable();
    parts
}
