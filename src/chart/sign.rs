//! HMAC-SHA256 request signing for enterprise accounts.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Query parameter holding the enterprise account id.
pub const ACCOUNT_PARAM: &str = "icac";

/// Query parameter holding the request signature.
pub const SIGNATURE_PARAM: &str = "ichm";

/// Lowercase hex HMAC-SHA256 of `query`, keyed by `secret`.
///
/// `query` must be the exact encoded query string sent to the API, without the signature.
pub fn sign(query: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(query.as_bytes());
    format!("{:x}", mac.finalize().into_bytes())
}
