use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used to configure the client.
pub const RIGEL_ENDPOINT: &str = "RIGEL_ENDPOINT";
pub const RIGEL_KEY: &str = "RIGEL_KEY";
pub const RIGEL_SALT: &str = "RIGEL_SALT";

// Route names are case-sensitive and fixed by the service.
pub const ROUTE_PROXY: &str = "proxy";
pub const ROUTE_HEADSUP: &str = "headsup";
pub const ROUTE_BATCHED_HEADSUP: &str = "batched-headsup";
pub const ROUTE_IMG_PREFIX: &str = "img";

/// Signable-only parameter carrying the route; never emitted in URLs.
pub const PARAM_REQUEST_PATH: &str = "request_path";
/// Query parameter carrying the request signature.
pub const PARAM_SIGNATURE: &str = "X-Signature";
/// Query parameter carrying the expiry in milliseconds.
pub const PARAM_EXPIRES_AT: &str = "X-ExpiresAt";
/// Query parameter carrying the source image URL.
pub const PARAM_IMG: &str = "img";

/// AsciiSet for RFC 3986 query-component encoding of parameter values.
///
/// Keeps the unreserved characters, the query-legal `:@/?` and the
/// sub-delims that cannot break `key=value&` framing. `&`, `=`, `+` and `#`
/// always encode; the verifier recomputes the signature over the encoded
/// form, so both sides must frame pairs identically.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b',')
    .remove(b';')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');
