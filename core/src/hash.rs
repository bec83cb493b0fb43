//! Hash related utils.

use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;

/// Unpadded URL-safe base64 encode.
///
/// The output alphabet is `A-Za-z0-9-_` with no `=` padding, suitable for
/// embedding in a query string without further escaping.
pub fn base64url_encode(content: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(content)
}

/// Unpadded URL-safe base64 encoded HMAC with SHA1 hash.
///
/// Use this function instead of `base64url_encode(hmac_sha1(key, content))`
/// can reduce extra copy.
pub fn base64url_hmac_sha1(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha1>::new_from_slice(key).unwrap();
    h.update(content);

    base64url_encode(&h.finalize().into_bytes())
}
