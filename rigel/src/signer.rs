use std::fmt::{Debug, Formatter, Write};

use rigel_core::hash::base64url_hmac_sha1;

use crate::constants::{PARAM_REQUEST_PATH, PARAM_SIGNATURE};
use crate::query;

/// UrlSigner signs canonical queries and assembles final request URLs.
///
/// Holds the immutable base URL and shared secrets. All methods are pure:
/// identical inputs always produce identical URLs, which is the contract
/// the server-side verifier depends on.
#[derive(Clone)]
pub struct UrlSigner {
    endpoint: String,
    key: String,
    salt: String,
}

impl Debug for UrlSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlSigner")
            .field("endpoint", &self.endpoint)
            .field("key", &"***")
            .field("salt", &"***")
            .finish()
    }
}

impl UrlSigner {
    /// Create a signer for the service at `endpoint`.
    ///
    /// A trailing `/` on the endpoint is stripped so route joining stays
    /// canonical.
    pub fn new(endpoint: &str, key: &str, salt: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            key: key.to_string(),
            salt: salt.to_string(),
        }
    }

    /// Base URL this signer addresses, without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sign an arbitrary input string.
    ///
    /// The token is HMAC-SHA1 keyed with the shared key over the bytes of
    /// `input` followed by the salt, rendered as unpadded URL-safe base64.
    pub fn sign(&self, input: &str) -> String {
        let message = format!("{}{}", input, self.salt);
        base64url_hmac_sha1(self.key.as_bytes(), message.as_bytes())
    }

    /// Compute the signature token for a route and canonical sequence.
    pub fn token(&self, route: &str, parts: &[String]) -> String {
        self.sign(&signable_string(route, parts))
    }

    /// Build the full signed URL for `route` with the given parameters.
    ///
    /// The emitted query is the canonical sequence followed by
    /// `X-Signature=<token>`; the `request_path` entry participates only in
    /// the signable string and is never emitted.
    pub fn signed_url(&self, route: &str, params: &[(&str, String)], expiry: i64) -> String {
        let parts = query::canonicalize(params, expiry);
        let token = self.token(route, &parts);

        let mut url = format!("{}/{}?", self.endpoint, route);
        for part in &parts {
            url.push_str(part);
            url.push('&');
        }
        let _ = write!(url, "{PARAM_SIGNATURE}={token}");
        url
    }
}

/// The exact byte sequence the signature is computed over:
/// `request_path=<route>` followed by the `&`-joined canonical sequence.
fn signable_string(route: &str, parts: &[String]) -> String {
    let mut s = format!("{PARAM_REQUEST_PATH}={route}");
    for part in parts {
        s.push('&');
        s.push_str(part);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "http://localhost:8080/rigel";
    const KEY: &str = "secretkey";
    const SALT: &str = "secretsalt";
    const IMAGE_URL: &str =
        "https://www.pakainfo.com/wp-content/uploads/2021/09/image-url-for-testing.jpg";

    fn signer() -> UrlSigner {
        UrlSigner::new(ENDPOINT, KEY, SALT)
    }

    #[test]
    fn test_sign_is_deterministic_and_url_safe() {
        let s = signer();
        let token = s.sign("test-input");

        assert_eq!(token, s.sign("test-input"));
        assert!(!token.is_empty());
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_signable_string_shape() {
        assert_eq!(signable_string("proxy", &[]), "request_path=proxy");
        assert_eq!(
            signable_string("proxy", &["a=1".to_string(), "b=2".to_string()]),
            "request_path=proxy&a=1&b=2"
        );
    }

    // Token fixtures below are regression pins for the deployed verifier;
    // any change here means real servers start rejecting our URLs.

    #[test]
    fn test_signed_url_single_param() {
        let url = signer().signed_url("proxy", &[("img", IMAGE_URL.to_string())], -1);

        assert_eq!(
            url,
            format!("{ENDPOINT}/proxy?img={IMAGE_URL}&X-Signature=vX59TgdwdNqZD_jXGOky_zVgttc")
        );
    }

    #[test]
    fn test_signed_url_sorts_params() {
        let params = vec![
            ("width", "100".to_string()),
            ("img", IMAGE_URL.to_string()),
            ("type", "2".to_string()),
            ("height", "100".to_string()),
        ];
        let url = signer().signed_url("proxy", &params, -1);

        assert_eq!(
            url,
            format!(
                "{ENDPOINT}/proxy?height=100&img={IMAGE_URL}&type=2&width=100\
                 &X-Signature=zkEmP1FDNoopC8GoM-caGzx1_1s"
            )
        );
    }

    #[test]
    fn test_signed_url_with_expiry() {
        let params = vec![
            ("height", "100".to_string()),
            ("width", "100".to_string()),
            ("img", IMAGE_URL.to_string()),
            ("type", "2".to_string()),
        ];
        let url = signer().signed_url("proxy", &params, 86400000);

        assert_eq!(
            url,
            format!(
                "{ENDPOINT}/proxy?X-ExpiresAt=86400000&height=100&img={IMAGE_URL}\
                 &type=2&width=100&X-Signature=v6ROumbVPw18CkoBk9auEktWlzo"
            )
        );
    }

    #[test]
    fn test_signed_url_empty_params() {
        let url = signer().signed_url("img/fde5eda7214568293ad70621aec2ad1efee5c7fd", &[], -1);

        assert_eq!(
            url,
            format!(
                "{ENDPOINT}/img/fde5eda7214568293ad70621aec2ad1efee5c7fd\
                 ?X-Signature=ztW09e3EvM5IE7fJNsg0Z5-lPXg"
            )
        );
    }

    #[test]
    fn test_expiry_dropped_for_empty_params_keeps_signature_stable() {
        let s = signer();
        let route = "img/fde5eda7214568293ad70621aec2ad1efee5c7fd";

        assert_eq!(s.signed_url(route, &[], 86400000), s.signed_url(route, &[], -1));
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let with_slash = UrlSigner::new("http://localhost:8080/rigel/", KEY, SALT);

        assert_eq!(
            with_slash.signed_url("proxy", &[("img", IMAGE_URL.to_string())], -1),
            signer().signed_url("proxy", &[("img", IMAGE_URL.to_string())], -1)
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", signer());

        assert!(rendered.contains(ENDPOINT));
        assert!(!rendered.contains(KEY));
        assert!(!rendered.contains(SALT));
    }
}
